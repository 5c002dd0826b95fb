//! Turns raw form input into a priced [`Booking`].
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. guest name (trimmed) is non-empty → `EmptyGuestName`
//! 2. both dates are present → `MissingDate`
//! 3. check-in is strictly before check-out → `InvalidDateRange`
//! 4. room label resolves to a priced room → `UnknownRoomType`
//! 5. total = max(1, days) × price per day → `PriceOverflow` if it does not fit
//!
//! Apart from the generated id, the result depends only on the inputs.

use crate::booking::{Booking, BookingRequest};
use crate::error::{Error, Result};
use crate::image::encode_image;
use crate::pricing::PriceTable;
use crate::room::RoomType;
use chrono::NaiveDate;
use uuid::Uuid;

/// Whole days between the two dates, never less than one.
pub fn billable_days(check_in: NaiveDate, check_out: NaiveDate) -> u64 {
    let days = (check_out - check_in).num_days();
    days.max(1) as u64
}

/// Validate form fields and build a priced booking with a fresh id.
///
/// # Example
///
/// ```
/// use hotel_booking::{validate_and_price, PriceTable, RoomType};
/// use chrono::NaiveDate;
///
/// let booking = validate_and_price(
///     &PriceTable::standard(),
///     "Иванов И.И.",
///     "Suite",
///     NaiveDate::from_ymd_opt(2024, 6, 1),
///     NaiveDate::from_ymd_opt(2024, 6, 4),
/// )?;
/// assert_eq!(booking.nights(), 3);
/// assert_eq!(booking.total_price(), 15000);
/// # Ok::<(), hotel_booking::Error>(())
/// ```
///
/// # Errors
///
/// See the module documentation for the order of checks.
pub fn validate_and_price(
    prices: &PriceTable,
    guest_name: &str,
    room_type: &str,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> Result<Booking> {
    let guest_name = guest_name.trim();
    if guest_name.is_empty() {
        return Err(Error::EmptyGuestName);
    }

    let (check_in, check_out) = match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => (check_in, check_out),
        _ => return Err(Error::MissingDate),
    };

    if check_in >= check_out {
        return Err(Error::InvalidDateRange {
            check_in,
            check_out,
        });
    }

    let room: RoomType = room_type.parse()?;
    let price_per_day = prices.price_for(room)?;

    let total_price = billable_days(check_in, check_out)
        .checked_mul(price_per_day)
        .ok_or(Error::PriceOverflow)?;

    Ok(Booking::from_parts(
        Uuid::new_v4(),
        guest_name.to_string(),
        room,
        check_in,
        check_out,
        String::new(),
        total_price,
    ))
}

/// Validate a whole [`BookingRequest`], attaching its photo if present.
pub fn validate_request(prices: &PriceTable, request: &BookingRequest) -> Result<Booking> {
    let booking = validate_and_price(
        prices,
        &request.guest_name,
        &request.room_type,
        request.check_in,
        request.check_out,
    )?;

    let image_base64 = request
        .image
        .as_deref()
        .map(encode_image)
        .unwrap_or_default();

    Ok(booking.with_image_base64(image_base64))
}
