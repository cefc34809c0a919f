//! Error type for the ambient surface of the crate.
//!
//! The conversion functions themselves never fail loudly; they return `None`.
//! This type covers reading unit codes from text and decoding option documents.

use thiserror::Error;

/// Errors produced outside the conversion functions.
#[derive(Error, Debug)]
pub enum Error {
    /// Text did not name a known unit.
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// An options document could not be decoded or encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an unknown unit error.
    pub fn unknown_unit<S: ToString>(s: S) -> Self {
        Self::UnknownUnit(s.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
