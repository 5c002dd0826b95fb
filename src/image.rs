//! Guest photo attachment.
//!
//! Photos are stored inside the booking as standard base64 text. An empty
//! string means "no photo", which is a valid state distinct from a photo
//! that fails to decode.

use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

/// Encode raw image bytes for storage. Empty input encodes to an empty string.
pub fn encode_image(raw: &[u8]) -> String {
    if raw.is_empty() {
        return String::new();
    }
    STANDARD.encode(raw)
}

/// Recover image bytes from stored text.
///
/// Returns `None` for an empty value and for malformed data. A damaged photo
/// must never stop the rest of the collection from loading, so decode
/// failures are logged and swallowed.
pub fn decode_image(encoded: &str) -> Option<Vec<u8>> {
    if encoded.is_empty() {
        return None;
    }

    match STANDARD.decode(encoded) {
        Ok(bytes) if !bytes.is_empty() => Some(bytes),
        Ok(_) => None,
        Err(e) => {
            warn!("Discarding undecodable image data ({} chars): {}", encoded.len(), e);
            None
        }
    }
}

/// Read the image file the user picked.
///
/// # Errors
///
/// Returns `Error::IoFailure` if the file cannot be read.
pub fn load_image_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    debug!("Read image {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}
