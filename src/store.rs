//! Booking store trait and implementations.
//!
//! The `BookingStore` trait decouples the service from where the collection
//! lives. The collection is always read and written whole; there is no
//! per-record persistence.
//!
//! - [`JsonFileStore`]: the store file next to the application (default)
//! - [`InMemoryStore`]: same document format kept in memory, for tests and
//!   embedding
//!
//! # Example
//!
//! ```no_run
//! use hotel_booking::store::{BookingStore, JsonFileStore};
//!
//! let store = JsonFileStore::new("bookings.json");
//! let bookings = store.load()?;   // empty if the file does not exist yet
//! store.save(&bookings)?;
//! # Ok::<(), hotel_booking::Error>(())
//! ```

use crate::booking::Booking;
use crate::error::{Error, Result};
use crate::serialization::{deserialize_store, serialize_store};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Default store file, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "bookings.json";

/// Trait for booking store implementations.
pub trait BookingStore: Send + Sync {
    /// Load the whole collection in insertion order.
    ///
    /// # Returns
    /// - `Ok(vec![])` - Nothing stored yet (not an error)
    /// - `Ok(bookings)` - Stored collection
    ///
    /// # Errors
    /// - `Error::CorruptStore` / `Error::VersionMismatch` if stored data is unusable
    /// - `Error::IoFailure` if the store cannot be read
    fn load(&self) -> Result<Vec<Booking>>;

    /// Replace the stored collection with `bookings`.
    ///
    /// A later `load()` sees either the previous collection or this one,
    /// never a mix.
    ///
    /// # Errors
    /// Returns `Error::IoFailure` if the store cannot be written
    fn save(&self, bookings: &[Booking]) -> Result<()>;
}

// ============================================================================
// File store
// ============================================================================

/// Store backed by a single JSON file.
///
/// Saves go to a sibling `*.tmp` file which is flushed and then renamed over
/// the live file, so an interrupted save leaves the previous contents intact.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(DEFAULT_STORE_PATH));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_temp(&self, temp: &Path, contents: &str) -> Result<()> {
        let mut file = File::create(temp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        Ok(())
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

impl BookingStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Booking>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("✓ File LOAD {} -> not found, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!("Store {} is not UTF-8 text", self.path.display());
                return Err(Error::CorruptStore(e.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let bookings = deserialize_store(&json)?;
        debug!(
            "✓ File LOAD {} -> {} bookings",
            self.path.display(),
            bookings.len()
        );
        Ok(bookings)
    }

    fn save(&self, bookings: &[Booking]) -> Result<()> {
        let json = serialize_store(bookings)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp = self.temp_path();
        let written = self
            .write_temp(&temp, &json)
            .and_then(|_| fs::rename(&temp, &self.path).map_err(Error::from));

        if let Err(e) = written {
            // Best effort: the live file is untouched either way.
            let _ = fs::remove_file(&temp);
            error!("Failed to save {}: {}", self.path.display(), e);
            return Err(e);
        }

        debug!(
            "✓ File SAVE {} ({} bookings, {} bytes)",
            self.path.display(),
            bookings.len(),
            json.len()
        );
        Ok(())
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// In-memory store holding the serialized store document.
///
/// Clones share the same contents, so a test can keep one handle and give
/// another to the service.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    document: Arc<RwLock<Option<String>>>,
}

impl InMemoryStore {
    /// An empty store (as if the file did not exist).
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose document is `contents`, verbatim.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        InMemoryStore {
            document: Arc::new(RwLock::new(Some(contents.into()))),
        }
    }

    /// The stored document text, if anything was saved.
    pub fn contents(&self) -> Option<String> {
        self.document.read().ok().and_then(|doc| doc.clone())
    }
}

impl BookingStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Booking>> {
        let document = self
            .document
            .read()
            .map_err(|_| Error::IoFailure("in-memory store lock poisoned".to_string()))?;

        match document.as_deref() {
            Some(json) => deserialize_store(json),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, bookings: &[Booking]) -> Result<()> {
        let json = serialize_store(bookings)?;
        let mut document = self
            .document
            .write()
            .map_err(|_| Error::IoFailure("in-memory store lock poisoned".to_string()))?;
        *document = Some(json);
        debug!("✓ InMemory SAVE ({} bookings)", bookings.len());
        Ok(())
    }
}
