//! Observability hooks for booking operations.
//!
//! [`BookingService`](crate::BookingService) reports every lifecycle event
//! through the `BookingMetrics` trait. The default methods write to the `log`
//! facade, so an application only needs to initialise a logger (for example
//! `env_logger`) to see them:
//!
//! ```ignore
//! use hotel_booking::observability::BookingMetrics;
//!
//! struct CountingMetrics { /* counters */ }
//!
//! impl BookingMetrics for CountingMetrics {
//!     fn record_created(&self, booking: &Booking) {
//!         // self.created.fetch_add(1, Ordering::Relaxed);
//!     }
//!     // other hooks keep their logging defaults
//! }
//!
//! // let service = BookingService::new(store, prices)
//! //     .with_metrics(Box::new(CountingMetrics { .. }));
//! ```
//!
//! Use [`NoOpMetrics`] to silence everything.

use crate::booking::Booking;
use crate::error::Error;
use std::time::Duration;

/// Trait for booking lifecycle hooks.
pub trait BookingMetrics: Send + Sync {
    /// A booking passed validation and was saved.
    fn record_created(&self, booking: &Booking) {
        info!(
            "Booking {} created: {} / {} / {}..{} total {}",
            booking.id(),
            booking.guest_name(),
            booking.room_type(),
            booking.check_in(),
            booking.check_out(),
            booking.total_price()
        );
    }

    /// Form input was rejected.
    fn record_rejected(&self, error: &Error) {
        warn!("Booking rejected: {}", error);
    }

    /// A booking was removed from the collection.
    fn record_removed(&self, booking: &Booking) {
        info!("Booking {} removed", booking.id());
    }

    /// The collection was loaded from the store.
    fn record_loaded(&self, count: usize, duration: Duration) {
        info!("Loaded {} bookings in {:?}", count, duration);
    }

    /// The collection was written to the store.
    fn record_saved(&self, count: usize, duration: Duration) {
        debug!("Saved {} bookings in {:?}", count, duration);
    }

    /// A store operation failed.
    fn record_error(&self, operation: &str, error: &Error) {
        error!("Booking store {} failed: {}", operation, error);
    }
}

/// Default hooks: everything goes to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogMetrics;

impl BookingMetrics for LogMetrics {}

/// Hooks that do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpMetrics;

impl BookingMetrics for NoOpMetrics {
    fn record_created(&self, _booking: &Booking) {}
    fn record_rejected(&self, _error: &Error) {}
    fn record_removed(&self, _booking: &Booking) {}
    fn record_loaded(&self, _count: usize, _duration: Duration) {}
    fn record_saved(&self, _count: usize, _duration: Duration) {}
    fn record_error(&self, _operation: &str, _error: &Error) {}
}
