//! Store document format.
//!
//! The booking collection is written as one pretty-printed JSON document
//! wrapped in a small versioned header:
//!
//! ```text
//! {
//!   "format": "hotel-booking",      <- identifies the file
//!   "version": 1,                   <- CURRENT_SCHEMA_VERSION
//!   "bookings": [ { ... }, ... ]    <- insertion order
//! }
//! ```
//!
//! # Validation
//!
//! - Wrong or missing `format` → `Error::CorruptStore`
//! - Different `version` → `Error::VersionMismatch`
//! - Unparsable record, or one breaking the booking invariants, or a
//!   duplicated id → `Error::CorruptStore`
//!
//! # Legacy files
//!
//! The original desktop form wrote a bare JSON array with PascalCase field
//! names, Russian room labels, date-time strings and decimal prices. Such a
//! file is accepted on load and rewritten in the current format by the next
//! save.
//!
//! # Example
//!
//! ```rust
//! use hotel_booking::serialization::{deserialize_store, serialize_store};
//! use hotel_booking::{validate_and_price, PriceTable};
//! use chrono::NaiveDate;
//!
//! # fn main() -> hotel_booking::Result<()> {
//! let booking = validate_and_price(
//!     &PriceTable::standard(),
//!     "Guest",
//!     "Single",
//!     NaiveDate::from_ymd_opt(2024, 6, 1),
//!     NaiveDate::from_ymd_opt(2024, 6, 2),
//! )?;
//!
//! let json = serialize_store(&[booking.clone()])?;
//! assert_eq!(deserialize_store(&json)?, vec![booking]);
//! # Ok(())
//! # }
//! ```

use crate::booking::Booking;
use crate::error::{Error, Result};
use crate::pricing::Money;
use crate::room::RoomType;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use uuid::Uuid;

/// Value of the `format` field in every store document.
pub const STORE_FORMAT: &str = "hotel-booking";

/// Current schema version.
///
/// Increment when the persisted booking fields change shape. Files written
/// with another version are rejected with `Error::VersionMismatch`.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoreDocument<'a> {
    format: &'a str,
    version: u32,
    bookings: &'a [Booking],
}

#[derive(Deserialize)]
struct StoreHeader {
    format: String,
    version: u32,
}

/// Serialize the whole collection into a store document.
///
/// # Errors
///
/// Returns `Error::IoFailure` if JSON encoding fails.
pub fn serialize_store(bookings: &[Booking]) -> Result<String> {
    let document = StoreDocument {
        format: STORE_FORMAT,
        version: CURRENT_SCHEMA_VERSION,
        bookings,
    };
    serde_json::to_string_pretty(&document).map_err(|e| {
        log::error!("Store serialization failed: {}", e);
        Error::IoFailure(e.to_string())
    })
}

/// Parse a store document (current or legacy) into the booking collection.
///
/// # Errors
///
/// - `Error::CorruptStore`: not JSON, wrong format tag, bad or invalid record
/// - `Error::VersionMismatch`: document written by another schema version
pub fn deserialize_store(json: &str) -> Result<Vec<Booking>> {
    let value: Value = serde_json::from_str(json).map_err(|e| {
        log::warn!("Store is not valid JSON: {}", e);
        Error::CorruptStore(e.to_string())
    })?;

    let bookings: Vec<Booking> = if value.is_array() {
        log::info!("Reading store in legacy array format");
        let legacy: Vec<LegacyBooking> = serde_json::from_value(value)?;
        legacy.into_iter().map(Booking::from).collect()
    } else if value.is_object() {
        read_document(&value)?
    } else {
        return Err(Error::CorruptStore(
            "expected a store document or a booking array".to_string(),
        ));
    };

    check_records(&bookings)?;
    Ok(bookings)
}

fn read_document(value: &Value) -> Result<Vec<Booking>> {
    let header = StoreHeader::deserialize(value)
        .map_err(|e| Error::CorruptStore(format!("invalid store header: {}", e)))?;

    if header.format != STORE_FORMAT {
        log::warn!(
            "Invalid store: expected format {:?}, got {:?}",
            STORE_FORMAT,
            header.format
        );
        return Err(Error::CorruptStore(format!(
            "unexpected format {:?}",
            header.format
        )));
    }

    if header.version != CURRENT_SCHEMA_VERSION {
        log::warn!(
            "Store version mismatch: expected {}, got {}",
            CURRENT_SCHEMA_VERSION,
            header.version
        );
        return Err(Error::VersionMismatch {
            expected: CURRENT_SCHEMA_VERSION,
            found: header.version,
        });
    }

    Vec::<Booking>::deserialize(&value["bookings"])
        .map_err(|e| Error::CorruptStore(format!("invalid booking list: {}", e)))
}

fn check_records(bookings: &[Booking]) -> Result<()> {
    let mut seen = HashSet::with_capacity(bookings.len());
    for (index, booking) in bookings.iter().enumerate() {
        booking.validate().map_err(|e| {
            Error::CorruptStore(format!("booking #{} ({}): {}", index, booking.id(), e))
        })?;
        if !seen.insert(booking.id()) {
            return Err(Error::CorruptStore(format!(
                "booking #{}: duplicate id {}",
                index,
                booking.id()
            )));
        }
    }
    Ok(())
}

// ============================================================================
// Legacy array format
// ============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct LegacyBooking {
    guid: Uuid,
    full_name: String,
    room_type: RoomType,
    #[serde(deserialize_with = "legacy_date")]
    check_in_date: NaiveDate,
    #[serde(deserialize_with = "legacy_date")]
    check_out_date: NaiveDate,
    #[serde(default)]
    image_base64: Option<String>,
    #[serde(deserialize_with = "legacy_money")]
    total_price: Money,
}

impl From<LegacyBooking> for Booking {
    fn from(legacy: LegacyBooking) -> Self {
        Booking::from_parts(
            legacy.guid,
            legacy.full_name.trim().to_string(),
            legacy.room_type,
            legacy.check_in_date,
            legacy.check_out_date,
            legacy.image_base64.unwrap_or_default(),
            legacy.total_price,
        )
    }
}

/// Accepts `2024-06-01`, `2024-06-01T00:00:00` and offset variants; the
/// time of day is dropped.
fn legacy_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let date_part = text.get(..10).unwrap_or(&text);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| serde::de::Error::custom(format!("invalid date {:?}: {}", text, e)))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyAmount {
    Whole(u64),
    Decimal(f64),
}

/// Accepts `15000` and `15000.0`; fractional or negative amounts are rejected.
fn legacy_money<'de, D>(deserializer: D) -> std::result::Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    match LegacyAmount::deserialize(deserializer)? {
        LegacyAmount::Whole(amount) => Ok(amount),
        LegacyAmount::Decimal(amount)
            if amount.is_finite()
                && amount >= 0.0
                && amount.fract() == 0.0
                && amount < u64::MAX as f64 =>
        {
            Ok(amount as Money)
        }
        LegacyAmount::Decimal(amount) => Err(serde::de::Error::custom(format!(
            "total price {} is not a whole amount",
            amount
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PriceTable;
    use crate::validator::validate_and_price;

    fn booking(name: &str, room: &str, from: u32, to: u32) -> Booking {
        validate_and_price(
            &PriceTable::standard(),
            name,
            room,
            NaiveDate::from_ymd_opt(2024, 6, from),
            NaiveDate::from_ymd_opt(2024, 6, to),
        )
        .unwrap()
    }

    #[test]
    fn test_roundtrip_preserves_order() {
        let bookings = vec![
            booking("First", "Single", 1, 2),
            booking("Second", "Deluxe", 3, 9),
            booking("Third", "Double", 10, 12),
        ];

        let json = serialize_store(&bookings).unwrap();
        let back = deserialize_store(&json).unwrap();
        assert_eq!(back, bookings);
    }

    #[test]
    fn test_document_header() {
        let json = serialize_store(&[]).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["format"], STORE_FORMAT);
        assert_eq!(value["version"], CURRENT_SCHEMA_VERSION);
        assert_eq!(value["bookings"], Value::Array(Vec::new()));
    }

    #[test]
    fn test_wrong_format_rejected() {
        let json = r#"{"format": "something-else", "version": 1, "bookings": []}"#;
        assert!(matches!(deserialize_store(json), Err(Error::CorruptStore(_))));
    }

    #[test]
    fn test_version_mismatch_rejected() {
        let json = r#"{"format": "hotel-booking", "version": 999, "bookings": []}"#;
        match deserialize_store(json) {
            Err(Error::VersionMismatch { expected, found }) => {
                assert_eq!(expected, CURRENT_SCHEMA_VERSION);
                assert_eq!(found, 999);
            }
            other => panic!("Expected VersionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(deserialize_store("{\"format\""), Err(Error::CorruptStore(_))));
        assert!(matches!(deserialize_store("42"), Err(Error::CorruptStore(_))));
        assert!(matches!(deserialize_store(""), Err(Error::CorruptStore(_))));
    }

    #[test]
    fn test_invalid_record_rejected() {
        let json = r#"{
            "format": "hotel-booking",
            "version": 1,
            "bookings": [{
                "id": "3f2504e0-4f89-41d3-9a0c-0305e82c3301",
                "guest_name": "Guest",
                "room_type": "Single",
                "check_in": "2024-06-05",
                "check_out": "2024-06-01",
                "image_base64": "",
                "total_price": 2000
            }]
        }"#;
        assert!(matches!(deserialize_store(json), Err(Error::CorruptStore(_))));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let original = booking("Twice", "Single", 1, 2);
        let json = serialize_store(&[original.clone(), original]).unwrap();
        let err = deserialize_store(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate id"));
    }

    #[test]
    fn test_legacy_array() {
        let json = r#"[
          {
            "Guid": "9b2e1c4a-6d7f-4e21-8a3b-5c6d7e8f9a0b",
            "FullName": "Иванов И.И.",
            "RoomType": "Люкс",
            "CheckInDate": "2024-06-01T00:00:00",
            "CheckOutDate": "2024-06-04T00:00:00",
            "ImageBase64": "",
            "TotalPrice": 15000.0
          }
        ]"#;

        let bookings = deserialize_store(json).unwrap();
        assert_eq!(bookings.len(), 1);
        let booking = &bookings[0];
        assert_eq!(booking.guest_name(), "Иванов И.И.");
        assert_eq!(booking.room_type(), RoomType::Suite);
        assert_eq!(booking.check_in(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(booking.total_price(), 15000);
        assert_eq!(
            booking.id().to_string(),
            "9b2e1c4a-6d7f-4e21-8a3b-5c6d7e8f9a0b"
        );
    }

    #[test]
    fn test_legacy_fractional_price_rejected() {
        let json = r#"[{
            "Guid": "9b2e1c4a-6d7f-4e21-8a3b-5c6d7e8f9a0b",
            "FullName": "Guest",
            "RoomType": "Одноместный",
            "CheckInDate": "2024-06-01T00:00:00",
            "CheckOutDate": "2024-06-02T00:00:00",
            "TotalPrice": 2000.5
        }]"#;
        assert!(matches!(deserialize_store(json), Err(Error::CorruptStore(_))));
    }
}
