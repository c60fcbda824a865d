//! Error types for blockmail operations.
//!
//! Only the import/export boundary can fail. The codec itself never does:
//! the background decoder returns `None` for values it cannot classify and
//! the HTML parser degrades to an empty document.

use thiserror::Error;

/// Errors that can occur while loading or saving templates.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
