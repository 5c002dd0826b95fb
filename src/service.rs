//! Booking service: the entry point the UI talks to.
//!
//! Owns the in-memory collection and keeps it in step with the store. Every
//! call is synchronous request/response:
//!
//! ```text
//! UI event ─► create_booking ─► validate & price ─► append ─► save whole list
//!                                                              │
//!                         listener(&bookings) ◄────────────────┘
//! ```

use crate::booking::{Booking, BookingRequest};
use crate::config::BookingConfig;
use crate::error::Result;
use crate::observability::{BookingMetrics, LogMetrics};
use crate::pricing::PriceTable;
use crate::room::RoomType;
use crate::store::{BookingStore, JsonFileStore};
use crate::validator::validate_request;
use chrono::NaiveDate;
use std::time::Instant;
use uuid::Uuid;

/// Called with the full collection after every successful change, so the
/// UI can re-render its list.
pub trait BookingListener: Send + Sync {
    fn on_bookings_changed(&self, bookings: &[Booking]);
}

impl<F> BookingListener for F
where
    F: Fn(&[Booking]) + Send + Sync,
{
    fn on_bookings_changed(&self, bookings: &[Booking]) {
        self(bookings)
    }
}

/// Validates, prices and persists bookings.
///
/// # Example
///
/// ```
/// use hotel_booking::{BookingRequest, BookingService, PriceTable};
/// use hotel_booking::store::InMemoryStore;
/// use chrono::NaiveDate;
///
/// let mut service = BookingService::new(InMemoryStore::new(), PriceTable::standard());
/// service.load()?;
///
/// let request = BookingRequest::new("Иванов И.И.", "Suite")
///     .check_in(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
///     .check_out(NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
///
/// let booking = service.create_booking(&request)?;
/// assert_eq!(booking.total_price(), 15000);
/// assert_eq!(service.len(), 1);
/// # Ok::<(), hotel_booking::Error>(())
/// ```
pub struct BookingService<S: BookingStore> {
    store: S,
    prices: PriceTable,
    bookings: Vec<Booking>,
    metrics: Box<dyn BookingMetrics>,
    listener: Option<Box<dyn BookingListener>>,
}

impl BookingService<JsonFileStore> {
    /// Service over the configured store file. Call [`load`](Self::load) next.
    pub fn from_config(config: BookingConfig) -> Self {
        BookingService::new(JsonFileStore::new(config.store_path), config.prices)
    }
}

impl<S: BookingStore> BookingService<S> {
    /// Create a service with an empty collection. Nothing is read until
    /// [`load`](Self::load) is called.
    pub fn new(store: S, prices: PriceTable) -> Self {
        BookingService {
            store,
            prices,
            bookings: Vec::new(),
            metrics: Box::new(LogMetrics),
            listener: None,
        }
    }

    /// Replace the default log-backed hooks.
    pub fn with_metrics(mut self, metrics: Box<dyn BookingMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Register the change listener.
    pub fn with_listener(mut self, listener: impl BookingListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Replace the in-memory collection with the stored one.
    ///
    /// Returns the number of bookings loaded.
    ///
    /// # Errors
    ///
    /// `Error::CorruptStore`, `Error::VersionMismatch` or `Error::IoFailure`.
    /// On error the collection is left empty.
    pub fn load(&mut self) -> Result<usize> {
        let start = Instant::now();
        match self.store.load() {
            Ok(bookings) => {
                self.bookings = bookings;
                self.metrics.record_loaded(self.bookings.len(), start.elapsed());
                self.notify();
                Ok(self.bookings.len())
            }
            Err(e) => {
                self.bookings.clear();
                self.metrics.record_error("load", &e);
                self.notify();
                Err(e)
            }
        }
    }

    /// Validate and price the request, append it and save the collection.
    ///
    /// If the save fails the booking is dropped again, so the collection
    /// always matches the store; the caller resubmits to retry.
    ///
    /// # Errors
    ///
    /// Validation errors from
    /// [`validate_and_price`](crate::validator::validate_and_price), or
    /// `Error::IoFailure` from the store.
    pub fn create_booking(&mut self, request: &BookingRequest) -> Result<Booking> {
        let booking = match validate_request(&self.prices, request) {
            Ok(booking) => booking,
            Err(e) => {
                self.metrics.record_rejected(&e);
                return Err(e);
            }
        };

        self.bookings.push(booking.clone());
        if let Err(e) = self.save() {
            self.bookings.pop();
            return Err(e);
        }

        self.metrics.record_created(&booking);
        self.notify();
        Ok(booking)
    }

    /// Remove a booking by id and save the collection.
    ///
    /// Returns `Ok(None)` if no booking has that id. If the save fails the
    /// booking is put back in its original position.
    pub fn remove_booking(&mut self, id: Uuid) -> Result<Option<Booking>> {
        let Some(index) = self.bookings.iter().position(|b| b.id() == id) else {
            return Ok(None);
        };

        let removed = self.bookings.remove(index);
        if let Err(e) = self.save() {
            self.bookings.insert(index, removed);
            return Err(e);
        }

        self.metrics.record_removed(&removed);
        self.notify();
        Ok(Some(removed))
    }

    /// Write the current collection to the store.
    pub fn save(&self) -> Result<()> {
        let start = Instant::now();
        match self.store.save(&self.bookings) {
            Ok(()) => {
                self.metrics.record_saved(self.bookings.len(), start.elapsed());
                Ok(())
            }
            Err(e) => {
                self.metrics.record_error("save", &e);
                Err(e)
            }
        }
    }

    /// Bookings in creation order.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, id: Uuid) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id() == id)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Price-per-day text for the room selector.
    pub fn price_label(&self, room_type: RoomType) -> String {
        self.prices.format_price_label(room_type)
    }

    /// Live price preview; see [`PriceTable::preview_price`].
    pub fn preview_price(
        &self,
        room_label: &str,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
    ) -> String {
        self.prices.preview_price(room_label, check_in, check_out)
    }

    fn notify(&self) {
        if let Some(listener) = &self.listener {
            listener.on_bookings_changed(&self.bookings);
        }
    }
}
