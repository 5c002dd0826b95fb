//! Error types for booking validation and persistence.

use chrono::NaiveDate;
use std::fmt;

/// Result type for booking operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the booking core.
///
/// Every operation returns `Result<T>`. Variants fall into three groups:
/// validation (the user corrects the form and resubmits), persistence
/// (surfaced to the user, recovered by treating the store as empty or
/// retrying) and configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Guest name is empty after trimming.
    EmptyGuestName,

    /// Check-in or check-out date was not supplied.
    MissingDate,

    /// Check-out is not strictly later than check-in.
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// Room type label is not in the closed set, or the active price table
    /// has no price for it.
    UnknownRoomType(String),

    /// Total price does not fit in [`Money`](crate::pricing::Money).
    PriceOverflow,

    /// Store file exists but cannot be parsed, or holds a record that
    /// breaks the booking invariants.
    ///
    /// **Recovery:** the in-memory collection is left empty; the next
    /// successful save replaces the file.
    CorruptStore(String),

    /// Store file was written by a different schema version.
    VersionMismatch {
        /// Schema version this build writes
        expected: u32,
        /// Schema version found in the file
        found: u32,
    },

    /// Reading or writing the store (or an image file) failed.
    ///
    /// **Recovery:** retry the operation.
    IoFailure(String),

    /// Invalid configuration, such as a malformed price table file.
    ConfigError(String),
}

impl Error {
    /// True for errors caused by form input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyGuestName
                | Error::MissingDate
                | Error::InvalidDateRange { .. }
                | Error::UnknownRoomType(_)
                | Error::PriceOverflow
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyGuestName => write!(f, "Guest name is required"),
            Error::MissingDate => write!(f, "Select check-in and check-out dates"),
            Error::InvalidDateRange {
                check_in,
                check_out,
            } => write!(
                f,
                "Check-out date must be later than check-in date ({} .. {})",
                check_in, check_out
            ),
            Error::UnknownRoomType(label) => write!(f, "Unknown room type: {:?}", label),
            Error::PriceOverflow => write!(f, "Total price is too large"),
            Error::CorruptStore(msg) => write!(f, "Booking store is corrupt: {}", msg),
            Error::VersionMismatch { expected, found } => write!(
                f,
                "Booking store version mismatch: expected {}, found {}",
                expected, found
            ),
            Error::IoFailure(msg) => write!(f, "I/O error: {}", msg),
            Error::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Conversions from other error types
// ============================================================================

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IoFailure(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Error::IoFailure(e.to_string())
        } else {
            Error::CorruptStore(e.to_string())
        }
    }
}
