//! Courier card formatting
//!
//! [`CourierCard`] is the display-ready projection of a [`CourierRecord`].
//! Optional rows are `None` when they should not be rendered at all.

use crate::status::{status_color, status_icon, status_label};
use courier_client::{Amount, CourierRecord, SentTime, Technician};
use serde::Serialize;

/// Display format for dispatch timestamps, e.g. `05 Jan 2024, 10:00 am`
pub const SENT_TIME_FORMAT: &str = "%d %b %Y, %I:%M %P";

/// Maximum lines of notes shown on a card
pub const NOTES_MAX_LINES: u32 = 2;

/// Technician names joined in API order
pub fn technician_names(technicians: &[Technician]) -> String {
    technicians
        .iter()
        .map(Technician::display_name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Items row text
pub fn item_count_label(count: usize) -> String {
    format!("{} items", count)
}

/// Amount row text; `None` when missing, non-numeric or zero
pub fn amount_label(amount: Option<&Amount>) -> Option<String> {
    let value = amount?.value()?;
    if value == 0.0 || !value.is_finite() {
        return None;
    }
    Some(format!("₹{:.2}", value))
}

/// Date text in UTC; unparsable values are shown as sent
pub fn sent_time_label(sent_time: &SentTime) -> String {
    match sent_time.to_datetime() {
        Some(dt) => dt.format(SENT_TIME_FORMAT).to_string(),
        None => sent_time.to_string(),
    }
}

/// Notes text; `None` when missing or blank
pub fn notes_text(notes: Option<&str>) -> Option<&str> {
    notes.filter(|n| !n.trim().is_empty())
}

/// Display-ready courier card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourierCard {
    /// List key and navigation id
    pub key: String,
    /// Tracking code
    pub tracking_code: String,
    /// Formatted dispatch time
    pub sent_time: String,
    /// Badge text
    pub status_label: &'static str,
    /// Badge color
    pub status_color: &'static str,
    /// Badge icon
    pub status_icon: &'static str,
    /// Technicians row
    pub technicians: String,
    /// Items row
    pub items: String,
    /// Amount row
    pub amount: Option<String>,
    /// Notes box
    pub notes: Option<String>,
}

impl CourierCard {
    /// Project a record into card fields
    pub fn from_record(record: &CourierRecord) -> Self {
        Self {
            key: record.id.to_string(),
            tracking_code: record.courier_id.clone(),
            sent_time: sent_time_label(&record.sent_time),
            status_label: status_label(&record.status),
            status_color: status_color(&record.status),
            status_icon: status_icon(&record.status),
            technicians: technician_names(record.technicians()),
            items: item_count_label(record.item_count()),
            amount: amount_label(record.total_amount.as_ref()),
            notes: notes_text(record.notes.as_deref()).map(str::to_string),
        }
    }
}

impl From<&CourierRecord> for CourierCard {
    fn from(record: &CourierRecord) -> Self {
        Self::from_record(record)
    }
}
