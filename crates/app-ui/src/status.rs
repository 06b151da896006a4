//! Status and filter presentation
//!
//! Every mapper is total: statuses the client does not know about fall
//! through to a neutral tone.

use crate::theme::colors;
use crate::tokens::icons;
use courier_client::{CourierFilter, CourierStatus};
use serde::Serialize;

/// Semantic tone of a courier status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    /// In transit
    Warning,
    /// Received
    Success,
    /// Anything else
    Neutral,
}

impl StatusTone {
    /// Tone for a courier status
    pub fn of(status: &CourierStatus) -> Self {
        match status {
            CourierStatus::InTransit => StatusTone::Warning,
            CourierStatus::Received => StatusTone::Success,
            CourierStatus::Other(_) => StatusTone::Neutral,
        }
    }

    /// Palette color for this tone
    pub fn color(&self) -> &'static str {
        match self {
            StatusTone::Warning => colors::WARNING,
            StatusTone::Success => colors::SUCCESS,
            StatusTone::Neutral => colors::GRAY,
        }
    }
}

/// Badge color for a status
pub fn status_color(status: &CourierStatus) -> &'static str {
    StatusTone::of(status).color()
}

/// Badge icon for a status
pub fn status_icon(status: &CourierStatus) -> &'static str {
    match status {
        CourierStatus::InTransit => icons::LOCAL_SHIPPING,
        CourierStatus::Received => icons::CHECK_CIRCLE,
        CourierStatus::Other(_) => icons::INFO,
    }
}

/// Badge text for a status
pub fn status_label(status: &CourierStatus) -> &'static str {
    match status {
        CourierStatus::InTransit => "In Transit",
        CourierStatus::Received => "Received",
        CourierStatus::Other(_) => "Unknown",
    }
}

/// Tab text for a filter
pub fn filter_label(filter: CourierFilter) -> &'static str {
    match filter {
        CourierFilter::All => "All",
        CourierFilter::InTransit => "In Transit",
        CourierFilter::Received => "Received",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        let in_transit = CourierStatus::InTransit;
        assert_eq!(status_color(&in_transit), "#F59E0B");
        assert_eq!(status_icon(&in_transit), "local-shipping");
        assert_eq!(status_label(&in_transit), "In Transit");

        let received = CourierStatus::Received;
        assert_eq!(status_color(&received), "#10B981");
        assert_eq!(status_icon(&received), "check-circle");
        assert_eq!(status_label(&received), "Received");
    }

    #[test]
    fn test_unknown_status_is_neutral() {
        let lost = CourierStatus::from("lost");
        assert_eq!(StatusTone::of(&lost), StatusTone::Neutral);
        assert_eq!(status_color(&lost), colors::GRAY);
        assert_eq!(status_icon(&lost), "info");
        assert_eq!(status_label(&lost), "Unknown");

        let cancelled = CourierStatus::from("cancelled");
        assert_eq!(StatusTone::of(&cancelled), StatusTone::Neutral);
        assert_eq!(status_color(&cancelled), colors::GRAY);
        assert_eq!(status_icon(&cancelled), "info");
        assert_eq!(status_label(&cancelled), "Unknown");

        let empty = CourierStatus::from("");
        assert_eq!(status_label(&empty), "Unknown");
    }

    #[test]
    fn test_filter_labels() {
        let labels: Vec<_> = CourierFilter::all().into_iter().map(filter_label).collect();
        assert_eq!(labels, vec!["All", "In Transit", "Received"]);
    }
}
