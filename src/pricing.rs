//! Room price table and price display helpers.
//!
//! The table is plain read-only data handed to whoever needs it (validator,
//! service, UI preview). There is no process-wide price state, so tests and
//! deployments can substitute their own table.
//!
//! # Example
//!
//! ```
//! use hotel_booking::pricing::PriceTable;
//! use hotel_booking::RoomType;
//! use chrono::NaiveDate;
//!
//! let prices = PriceTable::standard();
//! assert_eq!(prices.price_for(RoomType::Suite)?, 5000);
//! assert_eq!(prices.format_price_label(RoomType::Suite), "5000 per day");
//!
//! let check_in = NaiveDate::from_ymd_opt(2024, 6, 1);
//! let check_out = NaiveDate::from_ymd_opt(2024, 6, 4);
//! assert_eq!(prices.preview_price("Suite", check_in, check_out), "Estimated total: 15000");
//! # Ok::<(), hotel_booking::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::room::RoomType;
use crate::validator::billable_days;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::Path;

/// Whole currency units.
pub type Money = u64;

/// Label shown when a room type has no price.
pub const PRICE_UNAVAILABLE: &str = "price unavailable";

/// Mapping from room type to price per day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceTable {
    prices: BTreeMap<RoomType, Money>,
}

impl PriceTable {
    /// The hotel's standard rates.
    pub fn standard() -> Self {
        PriceTable::empty()
            .with_price(RoomType::Single, 2000)
            .with_price(RoomType::Double, 3000)
            .with_price(RoomType::Suite, 5000)
            .with_price(RoomType::Deluxe, 8000)
    }

    /// A table with no rooms priced. Every lookup fails until prices are added.
    pub fn empty() -> Self {
        PriceTable {
            prices: BTreeMap::new(),
        }
    }

    /// Set the price per day for a room type.
    pub fn with_price(mut self, room_type: RoomType, price: Money) -> Self {
        self.prices.insert(room_type, price);
        self
    }

    /// Parse a table from a JSON object such as `{"Single": 2000, "Suite": 5000}`.
    ///
    /// Keys accept any label [`RoomType`] parses.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` for malformed JSON, unknown room keys or
    /// non-integer prices.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let prices: BTreeMap<RoomType, Money> = serde_json::from_str(json)
            .map_err(|e| Error::ConfigError(format!("invalid price table: {}", e)))?;
        Ok(PriceTable { prices })
    }

    /// Load a table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Error::IoFailure` if the file cannot be read and
    /// `Error::ConfigError` if its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&json)?;
        debug!("Loaded price table from {} ({} rooms)", path.display(), table.len());
        Ok(table)
    }

    /// Price per day for a room type.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownRoomType` if the table has no price for it.
    pub fn price_for(&self, room_type: RoomType) -> Result<Money> {
        self.prices
            .get(&room_type)
            .copied()
            .ok_or_else(|| Error::UnknownRoomType(room_type.to_string()))
    }

    /// Parse a room label, then look up its price.
    pub fn price_for_label(&self, label: &str) -> Result<Money> {
        let room_type: RoomType = label.parse()?;
        self.price_for(room_type)
    }

    /// `"<price> per day"`, or [`PRICE_UNAVAILABLE`]. Never fails.
    pub fn format_price_label(&self, room_type: RoomType) -> String {
        match self.price_for(room_type) {
            Ok(price) => format!("{} per day", price),
            Err(_) => PRICE_UNAVAILABLE.to_string(),
        }
    }

    /// Text for the live price preview next to the booking form.
    ///
    /// Recomputed on every input change; has no side effects.
    pub fn preview_price(
        &self,
        room_label: &str,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
    ) -> String {
        let price = match self.price_for_label(room_label) {
            Ok(price) => price,
            Err(_) => return PRICE_UNAVAILABLE.to_string(),
        };

        if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
            if check_in < check_out {
                if let Some(total) = billable_days(check_in, check_out).checked_mul(price) {
                    return format!("Estimated total: {}", total);
                }
            }
        }

        format!("Price per day: {}", price)
    }

    /// Room types that have a price, in selector order.
    pub fn room_types(&self) -> impl Iterator<Item = RoomType> + '_ {
        self.prices.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_standard_prices() {
        let prices = PriceTable::standard();
        assert_eq!(prices.price_for(RoomType::Single).unwrap(), 2000);
        assert_eq!(prices.price_for(RoomType::Double).unwrap(), 3000);
        assert_eq!(prices.price_for(RoomType::Suite).unwrap(), 5000);
        assert_eq!(prices.price_for(RoomType::Deluxe).unwrap(), 8000);
        assert_eq!(prices.len(), 4);
    }

    #[test]
    fn test_missing_price_is_unknown_room() {
        let prices = PriceTable::empty().with_price(RoomType::Single, 100);
        assert_eq!(
            prices.price_for(RoomType::Deluxe),
            Err(Error::UnknownRoomType("Deluxe".to_string()))
        );
    }

    #[test]
    fn test_price_for_label() {
        let prices = PriceTable::standard();
        assert_eq!(prices.price_for_label("Двухместный").unwrap(), 3000);
        assert!(matches!(
            prices.price_for_label("Unknown"),
            Err(Error::UnknownRoomType(_))
        ));
    }

    #[test]
    fn test_format_price_label() {
        let prices = PriceTable::empty().with_price(RoomType::Double, 3000);
        assert_eq!(prices.format_price_label(RoomType::Double), "3000 per day");
        assert_eq!(prices.format_price_label(RoomType::Suite), PRICE_UNAVAILABLE);
    }

    #[test]
    fn test_preview_with_valid_range() {
        let prices = PriceTable::standard();
        let preview = prices.preview_price("Deluxe", date(2024, 6, 1), date(2024, 6, 3));
        assert_eq!(preview, "Estimated total: 16000");
    }

    #[test]
    fn test_preview_without_range() {
        let prices = PriceTable::standard();
        assert_eq!(
            prices.preview_price("Single", date(2024, 6, 3), date(2024, 6, 1)),
            "Price per day: 2000"
        );
        assert_eq!(
            prices.preview_price("Single", None, date(2024, 6, 1)),
            "Price per day: 2000"
        );
    }

    #[test]
    fn test_preview_unknown_room() {
        let prices = PriceTable::standard();
        assert_eq!(
            prices.preview_price("Garage", date(2024, 6, 1), date(2024, 6, 2)),
            PRICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_from_json_str() {
        let prices = PriceTable::from_json_str(r#"{"Single": 1500, "Люкс": 4500}"#).unwrap();
        assert_eq!(prices.price_for(RoomType::Single).unwrap(), 1500);
        assert_eq!(prices.price_for(RoomType::Suite).unwrap(), 4500);
        assert!(prices.price_for(RoomType::Double).is_err());
    }

    #[test]
    fn test_from_json_str_rejects_bad_input() {
        assert!(matches!(
            PriceTable::from_json_str(r#"{"Attic": 10}"#),
            Err(Error::ConfigError(_))
        ));
        assert!(matches!(
            PriceTable::from_json_str(r#"{"Single": -5}"#),
            Err(Error::ConfigError(_))
        ));
        assert!(matches!(
            PriceTable::from_json_str("[]"),
            Err(Error::ConfigError(_))
        ));
    }
}
