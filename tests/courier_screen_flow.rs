//! End-to-end tests for the courier list screen
//!
//! A wiremock server stands in for the Techfix API; the screen is driven the
//! way a host would drive it, through mount and handler identifiers.

use app_ui::{NavigationStack, Navigator, Route};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use techfix_couriers::{
    courier_screen, ApiClientConfig, AllCouriersScreen, CourierFilter, Element, FetchFailure,
    FetchOutcome, Notice, NoticePresenter,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingNotices {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotices {
    fn all(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl NoticePresenter for RecordingNotices {
    fn present(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

fn screen_for(server: &MockServer, notices: Arc<RecordingNotices>) -> AllCouriersScreen {
    let config = ApiClientConfig::new(format!("{}/api", server.uri()))
        .with_timeout(Duration::from_millis(500));
    courier_screen(config, notices, CourierFilter::All).unwrap()
}

fn list_items(tree: &Element) -> Vec<String> {
    match tree.find("courier_list") {
        Some(Element::List(list)) => list.items.iter().map(|item| item.key.clone()).collect(),
        other => panic!("expected courier list, got {:?}", other),
    }
}

#[tokio::test]
async fn test_single_in_transit_courier_renders_one_card() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "id": 1,
                "courier_id": "C100",
                "status": "in_transit",
                "sent_time": "2024-01-05T10:00:00Z",
                "items": [],
                "technicians_info": []
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let notices = Arc::new(RecordingNotices::default());
    let screen = screen_for(&server, notices.clone());

    assert_eq!(screen.mount().await, FetchOutcome::Updated { count: 1 });

    let state = screen.controller().state();
    assert!(!state.loading);
    assert!(!state.refreshing);

    let tree = screen.render();
    assert_eq!(list_items(&tree), vec!["1"]);

    let card = tree.find("courier:1").unwrap();
    let texts = card.texts();
    assert!(texts.contains(&"C100"));
    assert!(texts.contains(&"In Transit"));
    assert!(texts.contains(&"0 items"));
    assert!(!texts.iter().any(|t| t.starts_with('₹')));
    assert!(card.find("notes").is_none());

    assert!(notices.all().is_empty());
}

#[tokio::test]
async fn test_rejected_response_notifies_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": false, "message": "Not allowed" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let notices = Arc::new(RecordingNotices::default());
    let screen = screen_for(&server, notices.clone());

    let outcome = screen.mount().await;
    assert_eq!(
        outcome,
        FetchOutcome::Failed(FetchFailure::Rejected(Some("Not allowed".to_string())))
    );

    let state = screen.controller().state();
    assert!(!state.loading);
    assert!(state.couriers.is_empty());

    let shown = notices.all();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title, "Error");
    assert_eq!(shown[0].message, "Failed to fetch couriers");

    assert!(screen.render().texts().contains(&"No couriers found"));
}

#[tokio::test]
async fn test_filter_tab_fetches_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .and(query_param("status", "received"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "id": "R-9",
                "courier_id": "C900",
                "status": "received",
                "sent_time": "2024-02-01T08:30:00Z",
                "items": [{"name": "battery"}],
                "technicians_info": [{"first_name": "Asha", "username": "asha"}],
                "total_amount": "250.00",
                "notes": "Left at front desk"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": null })))
        .mount(&server)
        .await;

    let notices = Arc::new(RecordingNotices::default());
    let screen = screen_for(&server, notices.clone());
    let mut nav = NavigationStack::new(Route::AllCouriers);

    assert_eq!(screen.mount().await, FetchOutcome::Updated { count: 0 });

    let outcome = screen.handle_event("select_filter:received", &mut nav).await;
    assert_eq!(outcome, Some(FetchOutcome::Updated { count: 1 }));

    let tree = screen.render();
    assert_eq!(list_items(&tree), vec!["R-9"]);

    let texts = tree.texts();
    assert!(texts.contains(&"Asha"));
    assert!(texts.contains(&"1 items"));
    assert!(texts.contains(&"₹250.00"));
    assert!(texts.contains(&"Left at front desk"));
    assert!(texts.contains(&"01 Feb 2024, 08:30 am"));

    screen.handle_event("open_courier:R-9", &mut nav).await;
    assert_eq!(nav.current(), &Route::courier_view("R-9"));
    assert!(nav.go_back());

    assert!(notices.all().is_empty());
}

#[tokio::test]
async fn test_refresh_after_server_error_keeps_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "id": 4,
                "courier_id": "C400",
                "status": "in_transit",
                "sent_time": "2024-01-05T10:00:00Z"
            }]
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let notices = Arc::new(RecordingNotices::default());
    let screen = screen_for(&server, notices.clone());
    let mut nav = NavigationStack::new(Route::AllCouriers);

    screen.mount().await;
    let outcome = screen.handle_event("refresh", &mut nav).await;
    assert!(matches!(outcome, Some(FetchOutcome::Failed(FetchFailure::Transport(_)))));

    let state = screen.controller().state();
    assert!(!state.refreshing);
    assert!(!state.loading);
    assert_eq!(state.couriers.len(), 1);
    assert_eq!(state.couriers[0].courier_id, "C400");
    assert_eq!(notices.all().len(), 1);
}

#[tokio::test]
async fn test_slow_server_times_out_into_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "data": [] }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let notices = Arc::new(RecordingNotices::default());
    let screen = screen_for(&server, notices.clone());

    let outcome = screen.mount().await;
    assert!(matches!(outcome, FetchOutcome::Failed(FetchFailure::Transport(_))));
    assert!(!screen.controller().state().loading);
    assert_eq!(notices.all().len(), 1);
}
