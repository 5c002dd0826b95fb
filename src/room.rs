//! Room categories offered by the hotel.

use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of room categories.
///
/// Stored and displayed by its English name. Parsing also accepts the labels
/// used by the original desktop form, so bookings recorded there load
/// unchanged.
///
/// # Example
///
/// ```
/// use hotel_booking::RoomType;
///
/// let room: RoomType = "suite".parse()?;
/// assert_eq!(room, RoomType::Suite);
/// assert_eq!("Люкс".parse::<RoomType>()?, RoomType::Suite);
/// assert!("Penthouse".parse::<RoomType>().is_err());
/// # Ok::<(), hotel_booking::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Deluxe,
}

impl RoomType {
    /// All room types in selector order.
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Suite,
        RoomType::Deluxe,
    ];

    /// English name, as written to the store.
    pub fn name(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
            RoomType::Deluxe => "Deluxe",
        }
    }

    /// Label shown by the original desktop form.
    pub fn legacy_label(&self) -> &'static str {
        match self {
            RoomType::Single => "Одноместный",
            RoomType::Double => "Двухместный",
            RoomType::Suite => "Люкс",
            RoomType::Deluxe => "Делюкс",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoomType {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let trimmed = label.trim();
        RoomType::ALL
            .into_iter()
            .find(|room| {
                room.name().eq_ignore_ascii_case(trimmed) || room.legacy_label() == trimmed
            })
            .ok_or_else(|| Error::UnknownRoomType(label.to_string()))
    }
}

impl<'de> Deserialize<'de> for RoomType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
