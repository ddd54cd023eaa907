//! Payment data model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::PropertyId;

/// Storage and wire format for payment timestamps.
///
/// Second precision, no timezone suffix; the recording clock supplies UTC.
pub const PAYMENT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a payment timestamp in the canonical `YYYY-MM-DD HH:MM:SS` form.
pub fn format_payment_date(recorded_at: NaiveDateTime) -> String {
    recorded_at.format(PAYMENT_DATE_FORMAT).to_string()
}

/// Parse a stored payment timestamp.
pub fn parse_payment_date(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, PAYMENT_DATE_FORMAT)
}

/// An immutable record of a tax amount paid against a property.
///
/// ## Invariants
/// - Append-only: rows are never mutated or deleted.
/// - `property_id` is a weak reference by business key; the referenced
///   property is not required to exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Store-assigned row identifier.
    pub id: i32,
    /// External identifier of the property the payment is recorded against.
    #[schema(value_type = String, example = "P100")]
    pub property_id: PropertyId,
    /// Amount paid.
    #[schema(example = 3000.0)]
    pub amount: f64,
    /// Server-assigned timestamp, second precision.
    #[serde(
        serialize_with = "serialize_payment_date",
        deserialize_with = "deserialize_payment_date"
    )]
    #[schema(value_type = String, example = "2026-08-06 12:30:00")]
    pub payment_date: NaiveDateTime,
}

fn serialize_payment_date<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_payment_date(*value))
}

fn deserialize_payment_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_payment_date(&raw).map_err(serde::de::Error::custom)
}
