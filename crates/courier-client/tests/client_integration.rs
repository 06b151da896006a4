//! Integration tests for the Techfix API client
//!
//! These tests use wiremock to stand up a mock API server and exercise the
//! full request/response cycle of the courier list endpoint.

use courier_client::{
    courier_list_request, ApiClient, ApiClientConfig, ApiError, CourierFilter, CourierId,
    CourierListResponse, CourierSource, CourierStatus,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiClientConfig::new(format!("{}/api", server.uri()))).unwrap()
}

fn sample_courier() -> serde_json::Value {
    json!({
        "id": 1,
        "courier_id": "C100",
        "status": "in_transit",
        "sent_time": "2024-01-05T10:00:00Z",
        "items": [],
        "technicians_info": []
    })
}

// =============================================================================
// Successful Request Tests
// =============================================================================

#[tokio::test]
async fn test_list_couriers_all_has_no_status_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "data": [sample_courier()] })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.list_couriers(CourierFilter::All).await.unwrap();

    assert!(response.success);
    let couriers = response.data.unwrap();
    assert_eq!(couriers.len(), 1);
    assert_eq!(couriers[0].id, CourierId::Number(1));
    assert_eq!(couriers[0].status, CourierStatus::InTransit);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_list_couriers_with_status_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .and(query_param("status", "received"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.list_couriers(CourierFilter::Received).await.unwrap();

    assert!(response.success);
    assert_eq!(response.data, Some(vec![]));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("status=received"));
}

#[tokio::test]
async fn test_list_couriers_null_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": null })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.list_couriers(CourierFilter::All).await.unwrap();

    assert!(response.success);
    assert!(response.data.is_none());
}

#[tokio::test]
async fn test_list_couriers_success_false_is_not_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Not allowed"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.list_couriers(CourierFilter::InTransit).await.unwrap();

    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some("Not allowed"));
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [] })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ApiClientConfig::new(format!("{}/api", mock_server.uri()))
        .with_bearer_token("secret-token");
    let client = ApiClient::new(config).unwrap();

    let response = client.list_couriers(CourierFilter::All).await.unwrap();
    assert!(response.success);
}

#[tokio::test]
async fn test_get_reports_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .and(query_param("status", "in_transit"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [] })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = courier_list_request("couriers/", CourierFilter::InTransit);
    let response = client.get::<CourierListResponse>(request).await.unwrap();

    assert_eq!(response.status, 200);
    assert!(response.data.success);
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[tokio::test]
async fn test_server_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "detail": "database unavailable" })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.list_couriers(CourierFilter::All).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            body: "database unavailable".to_string()
        }
    );
}

#[tokio::test]
async fn test_unauthorized_plain_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.list_couriers(CourierFilter::All).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("unauthorized"));
}

#[tokio::test]
async fn test_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.list_couriers(CourierFilter::All).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_request_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/couriers/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "data": [] }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let config = ApiClientConfig::new(format!("{}/api", mock_server.uri()))
        .with_timeout(Duration::from_millis(100));
    let client = ApiClient::new(config).unwrap();

    let err = client.list_couriers(CourierFilter::All).await.unwrap_err();
    assert!(err.is_network_error());
}

#[tokio::test]
async fn test_connection_refused() {
    // Reserve a free port, then release it so nothing is listening
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let client = ApiClient::new(ApiClientConfig::new(format!("http://{}/api", addr))).unwrap();
    let err = client.list_couriers(CourierFilter::All).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert!(err.is_network_error());
    assert_eq!(err.status(), None);
}
