//! Service configuration.

use crate::error::Result;
use crate::pricing::PriceTable;
use crate::store::DEFAULT_STORE_PATH;
use std::path::{Path, PathBuf};

/// Where bookings are stored and which prices apply.
///
/// # Example
///
/// ```
/// use hotel_booking::config::BookingConfig;
/// use hotel_booking::{PriceTable, RoomType};
///
/// let config = BookingConfig::default()
///     .with_store_path("/var/lib/hotel/bookings.json")
///     .with_prices(PriceTable::standard().with_price(RoomType::Suite, 5500));
///
/// assert_eq!(config.prices.price_for(RoomType::Suite)?, 5500);
/// # Ok::<(), hotel_booking::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct BookingConfig {
    /// Store file (default `bookings.json`, relative to the working directory)
    pub store_path: PathBuf,
    /// Active price table (default [`PriceTable::standard`])
    pub prices: PriceTable,
}

impl BookingConfig {
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    pub fn with_prices(mut self, prices: PriceTable) -> Self {
        self.prices = prices;
        self
    }

    /// Replace the price table with one read from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Error::IoFailure` or `Error::ConfigError`; see
    /// [`PriceTable::from_path`].
    pub fn with_price_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let prices = PriceTable::from_path(path)?;
        Ok(self.with_prices(prices))
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            prices: PriceTable::standard(),
        }
    }
}
