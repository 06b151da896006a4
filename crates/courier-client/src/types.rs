//! Courier record types returned by the Techfix API
//!
//! Records are read-only on the client. Field shapes follow what the API
//! actually sends, which is looser than the model: ids arrive as integers or
//! strings, amounts as numbers or decimal strings, and list fields may be
//! `null`.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Identifiers and Status
// =============================================================================

/// Courier primary key, used as list key and navigation parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourierId {
    /// Integer primary key
    Number(i64),
    /// String key
    Text(String),
}

impl fmt::Display for CourierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourierId::Number(n) => write!(f, "{}", n),
            CourierId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CourierId {
    fn from(value: i64) -> Self {
        CourierId::Number(value)
    }
}

impl From<&str> for CourierId {
    fn from(value: &str) -> Self {
        CourierId::Text(value.to_string())
    }
}

/// Courier lifecycle status
///
/// Unknown wire values are kept as [`CourierStatus::Other`] instead of
/// failing the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CourierStatus {
    /// Handed to the courier, not yet received
    InTransit,
    /// Received at the destination
    Received,
    /// Any other status string
    Other(String),
}

impl CourierStatus {
    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            CourierStatus::InTransit => "in_transit",
            CourierStatus::Received => "received",
            CourierStatus::Other(raw) => raw,
        }
    }
}

impl From<&str> for CourierStatus {
    fn from(value: &str) -> Self {
        match value {
            "in_transit" => CourierStatus::InTransit,
            "received" => CourierStatus::Received,
            other => CourierStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for CourierStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CourierStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CourierStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(CourierStatus::from(raw.as_str()))
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Status filter applied server-side to the courier list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourierFilter {
    /// No status restriction
    #[default]
    All,
    /// Only couriers in transit
    InTransit,
    /// Only received couriers
    Received,
}

impl CourierFilter {
    /// All filters in display order
    pub fn all() -> [CourierFilter; 3] {
        [
            CourierFilter::All,
            CourierFilter::InTransit,
            CourierFilter::Received,
        ]
    }

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CourierFilter::All => "all",
            CourierFilter::InTransit => "in_transit",
            CourierFilter::Received => "received",
        }
    }

    /// Value of the `status` query parameter, `None` for [`CourierFilter::All`]
    pub fn status_param(&self) -> Option<&'static str> {
        match self {
            CourierFilter::All => None,
            other => Some(other.as_str()),
        }
    }
}

impl fmt::Display for CourierFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized filter string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown courier filter: {0} (expected all, in_transit or received)")]
pub struct ParseFilterError(pub String);

impl FromStr for CourierFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CourierFilter::All),
            "in_transit" => Ok(CourierFilter::InTransit),
            "received" => Ok(CourierFilter::Received),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

// =============================================================================
// Record Fields
// =============================================================================

/// Dispatch timestamp, either ISO-8601 text or epoch milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SentTime {
    /// Milliseconds since the Unix epoch
    EpochMillis(i64),
    /// Fractional milliseconds since the Unix epoch
    FractionalMillis(f64),
    /// ISO-8601 timestamp, with or without offset
    Text(String),
}

impl SentTime {
    /// Parse into a UTC instant, `None` when the value is not a valid time
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            SentTime::EpochMillis(millis) => Utc.timestamp_millis_opt(*millis).single(),
            SentTime::FractionalMillis(millis) => {
                if !millis.is_finite() {
                    return None;
                }
                let micros = (millis * 1000.0).round() as i64;
                Utc.timestamp_millis_opt(micros.div_euclid(1000))
                    .single()
                    .map(|dt| dt + Duration::microseconds(micros.rem_euclid(1000)))
            }
            SentTime::Text(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    // Naive timestamps are taken as UTC
                    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                        .ok()
                        .map(|naive| naive.and_utc())
                }),
        }
    }
}

impl fmt::Display for SentTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentTime::EpochMillis(millis) => write!(f, "{}", millis),
            SentTime::FractionalMillis(millis) => write!(f, "{}", millis),
            SentTime::Text(raw) => f.write_str(raw),
        }
    }
}

/// Technician attached to a courier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technician {
    /// Given name, may be missing or blank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Login name
    #[serde(default)]
    pub username: String,
}

impl Technician {
    /// Name shown on cards: first name, falling back to the username
    pub fn display_name(&self) -> &str {
        match self.first_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

/// Monetary amount, sent as a JSON number or a decimal string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// Numeric amount
    Number(f64),
    /// Decimal string such as `"1250.50"`
    Text(String),
}

impl Amount {
    /// Numeric value, `None` when the text is not a number
    pub fn value(&self) -> Option<f64> {
        match self {
            Amount::Number(n) => Some(*n),
            Amount::Text(raw) => raw.trim().parse::<f64>().ok(),
        }
    }
}

// =============================================================================
// Courier Record
// =============================================================================

/// A courier shipment record as listed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierRecord {
    /// Primary key
    pub id: CourierId,
    /// Human-readable tracking code
    pub courier_id: String,
    /// When the courier was sent
    pub sent_time: SentTime,
    /// Lifecycle status
    pub status: CourierStatus,
    /// Technicians involved, in API order
    #[serde(default)]
    pub technicians_info: Option<Vec<Technician>>,
    /// Line items; only the count is used on the client
    #[serde(default)]
    pub items: Option<Vec<serde_json::Value>>,
    /// Total declared amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Amount>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CourierRecord {
    /// Technicians, empty when the API sent none or `null`
    pub fn technicians(&self) -> &[Technician] {
        self.technicians_info.as_deref().unwrap_or(&[])
    }

    /// Number of line items
    pub fn item_count(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }
}

// =============================================================================
// Response Envelope
// =============================================================================

/// Standard Techfix response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the API accepted the request
    pub success: bool,
    /// Payload, absent or `null` on some successful responses
    pub data: Option<T>,
    /// Optional server message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Envelope returned by the courier list endpoint
pub type CourierListResponse = ApiEnvelope<Vec<CourierRecord>>;

// =============================================================================
// Tests
// =============================================================================
