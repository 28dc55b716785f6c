//! Error types for the mdcv library.

use std::io;
use thiserror::Error;

/// Result type alias for mdcv operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during CV conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The requested theme does not exist in the registry.
    #[error("Theme '{name}' not found. Available themes: {available}")]
    ThemeNotFound {
        /// The name that failed to resolve.
        name: String,
        /// Comma-separated list of registered theme names.
        available: String,
    },

    /// A theme bundle is malformed (bad `theme.toml`, non-UTF-8 template).
    #[error("Invalid theme '{name}': {reason}")]
    InvalidTheme {
        /// Name of the offending theme.
        name: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Error rendering the HTML template.
    #[error("Template error: {0}")]
    Template(String),

    /// The external rasterizer failed or produced unusable output.
    #[error("Rasterization error: {0}")]
    Rasterize(String),

    /// The rasterizer output could not be parsed as a PDF document.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// Error serializing the CV model to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<tera::Error> for Error {
    fn from(err: tera::Error) -> Self {
        use std::error::Error as _;

        // Tera buries the useful message in the source chain.
        let mut msg = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            msg.push_str(": ");
            msg.push_str(&cause.to_string());
            source = cause.source();
        }
        Error::Template(msg)
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
