//! # hotel-booking
//!
//! Pricing, validation and persistence core for a hotel room booking form.
//!
//! The UI collects a guest name, a room type, check-in/check-out dates and an
//! optional photo. This crate turns those raw fields into a priced,
//! immutable [`Booking`], keeps the ordered collection of bookings and
//! persists it to a single human-readable JSON file.
//!
//! ## Features
//!
//! - **Explicit validation:** blank names, missing dates, inverted ranges and
//!   unknown room types are rejected with a specific [`Error`]
//! - **Injected prices:** a read-only [`PriceTable`] instead of global state
//! - **Whole-file persistence:** temp-file-then-rename saves, versioned store
//!   document, reader for files written by the original desktop form
//! - **Logging:** lifecycle events go through the `log` facade
//!
//! ## Quick Start
//!
//! ```no_run
//! use hotel_booking::{BookingConfig, BookingRequest, BookingService};
//! use chrono::NaiveDate;
//!
//! let mut service = BookingService::from_config(BookingConfig::default());
//! if let Err(e) = service.load() {
//!     eprintln!("{}", e); // show to the user, continue with an empty list
//! }
//!
//! // On every form change
//! let preview = service.preview_price(
//!     "Suite",
//!     NaiveDate::from_ymd_opt(2024, 6, 1),
//!     NaiveDate::from_ymd_opt(2024, 6, 4),
//! );
//! assert_eq!(preview, "Estimated total: 15000");
//!
//! // On submit
//! let request = BookingRequest::new("Иванов И.И.", "Suite")
//!     .check_in(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
//!     .check_out(NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
//! match service.create_booking(&request) {
//!     Ok(booking) => println!("Booked, total {}", booking.total_price()),
//!     Err(e) if e.is_validation() => println!("Please fix: {}", e),
//!     Err(e) => eprintln!("Could not save: {}", e),
//! }
//! ```

#[macro_use]
extern crate log;

pub mod booking;
pub mod config;
pub mod error;
pub mod image;
pub mod observability;
pub mod pricing;
pub mod room;
pub mod serialization;
pub mod service;
pub mod store;
pub mod validator;

// Re-exports for convenience
pub use booking::{Booking, BookingRequest};
pub use config::BookingConfig;
pub use error::{Error, Result};
pub use image::{decode_image, encode_image};
pub use pricing::{Money, PriceTable};
pub use room::RoomType;
pub use service::{BookingListener, BookingService};
pub use store::{BookingStore, InMemoryStore, JsonFileStore};
pub use validator::{validate_and_price, validate_request};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
