//! Booking record and the raw form input it is built from.

use crate::error::{Error, Result};
use crate::image::decode_image;
use crate::pricing::{Money, PriceTable};
use crate::room::RoomType;
use crate::validator::billable_days;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One reservation.
///
/// Created only by [`validate_and_price`](crate::validator::validate_and_price)
/// (or loaded from the store) and never mutated afterwards, so fields are
/// read through accessors.
///
/// # Invariants
///
/// - `guest_name` is trimmed and non-empty
/// - `check_in < check_out`
/// - `total_price` was computed from the price table active at creation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: Uuid,
    guest_name: String,
    room_type: RoomType,
    check_in: NaiveDate,
    check_out: NaiveDate,
    #[serde(default)]
    image_base64: String,
    total_price: Money,
}

impl Booking {
    pub(crate) fn from_parts(
        id: Uuid,
        guest_name: String,
        room_type: RoomType,
        check_in: NaiveDate,
        check_out: NaiveDate,
        image_base64: String,
        total_price: Money,
    ) -> Self {
        Booking {
            id,
            guest_name,
            room_type,
            check_in,
            check_out,
            image_base64,
            total_price,
        }
    }

    pub(crate) fn with_image_base64(mut self, image_base64: String) -> Self {
        self.image_base64 = image_base64;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Total computed when the booking was created.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Number of billed days (at least one).
    pub fn nights(&self) -> u64 {
        billable_days(self.check_in, self.check_out)
    }

    /// Stored photo text; empty when no photo is attached.
    pub fn image_base64(&self) -> &str {
        &self.image_base64
    }

    pub fn has_image(&self) -> bool {
        !self.image_base64.is_empty()
    }

    /// Decoded photo, or `None` when absent or undecodable.
    pub fn image(&self) -> Option<Vec<u8>> {
        decode_image(&self.image_base64)
    }

    /// Price-per-day text for display. Derived from the given table, never stored.
    pub fn price_per_day_label(&self, prices: &PriceTable) -> String {
        prices.format_price_label(self.room_type)
    }

    /// Check the record invariants. Used on records read back from storage.
    pub fn validate(&self) -> Result<()> {
        if self.guest_name.trim().is_empty() {
            return Err(Error::EmptyGuestName);
        }
        if self.check_in >= self.check_out {
            return Err(Error::InvalidDateRange {
                check_in: self.check_in,
                check_out: self.check_out,
            });
        }
        Ok(())
    }
}

/// Raw booking form fields, as handed over by the UI.
///
/// # Example
///
/// ```
/// use hotel_booking::BookingRequest;
/// use chrono::NaiveDate;
///
/// let request = BookingRequest::new("Иванов И.И.", "Suite")
///     .check_in(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
///     .check_out(NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
/// assert!(request.image.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingRequest {
    pub guest_name: String,
    /// Selected room label
    pub room_type: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    /// Raw photo bytes; `None` or empty means no photo
    pub image: Option<Vec<u8>>,
}

impl BookingRequest {
    pub fn new(guest_name: impl Into<String>, room_type: impl Into<String>) -> Self {
        BookingRequest {
            guest_name: guest_name.into(),
            room_type: room_type.into(),
            ..Default::default()
        }
    }

    pub fn check_in(mut self, date: NaiveDate) -> Self {
        self.check_in = Some(date);
        self
    }

    pub fn check_out(mut self, date: NaiveDate) -> Self {
        self.check_out = Some(date);
        self
    }

    pub fn image(mut self, bytes: Vec<u8>) -> Self {
        self.image = Some(bytes);
        self
    }
}
