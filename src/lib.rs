//! Techfix courier list client
//!
//! Wires the HTTP client, the list controller and the screen together. Hosts
//! supply a [`NoticePresenter`] and a [`Navigator`](app_ui::Navigator).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_state::{
    CourierListController, CourierListState, FetchFailure, FetchOutcome, Notice, NoticePresenter,
};
pub use app_ui::{AllCouriersScreen, CourierCard, Element, Route, ScreenAction};
pub use courier_client::{ApiClient, ApiClientConfig, ApiError, CourierFilter, CourierRecord};

use std::fmt::Write;
use std::sync::Arc;

/// Build the courier list screen against the Techfix API
pub fn courier_screen(
    config: ApiClientConfig,
    notices: Arc<dyn NoticePresenter>,
    filter: CourierFilter,
) -> Result<AllCouriersScreen, ApiError> {
    let client = ApiClient::new(config)?;
    let controller = CourierListController::with_filter(Arc::new(client), notices, filter);
    Ok(AllCouriersScreen::new(controller))
}

/// Plain-text rendering of the list for terminals
pub fn plain_text(state: &CourierListState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "All Couriers [{}]", app_ui::filter_label(state.filter));

    if state.loading {
        out.push_str("Loading...\n");
        return out;
    }
    if state.shows_empty_placeholder() {
        out.push_str("No couriers found\n");
        return out;
    }

    for card in state.couriers.iter().map(CourierCard::from_record) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}  ({})", card.tracking_code, card.status_label);
        let _ = writeln!(out, "  Sent:        {}", card.sent_time);
        let _ = writeln!(out, "  Technicians: {}", card.technicians);
        let _ = writeln!(out, "  Items:       {}", card.items);
        if let Some(amount) = &card.amount {
            let _ = writeln!(out, "  Amount:      {}", amount);
        }
        if let Some(notes) = &card.notes {
            let _ = writeln!(out, "  Notes:       {}", notes);
        }
    }
    out
}
