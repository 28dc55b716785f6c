//! Portrait photo embedding.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// A photo prepared for inline embedding in the HTML document.
#[derive(Debug, Clone)]
pub struct EmbeddedPhoto {
    /// Base64-encoded image bytes.
    pub data: String,
    /// MIME type inferred from the file extension.
    pub mime: String,
}

/// Load and encode a photo for embedding.
///
/// Returns `None` when no path is given or the path does not resolve
/// to a readable file — a missing photo is never an error.
pub(crate) fn load(path: Option<&Path>) -> Option<EmbeddedPhoto> {
    let path = path?;
    if !path.is_file() {
        return None;
    }
    let bytes = fs::read(path).ok()?;
    let mime = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("image/jpeg")
        .to_string();
    Some(EmbeddedPhoto {
        data: STANDARD.encode(bytes),
        mime,
    })
}
