//! Error types for appver
//!
//! Version parsing never fails, so the only errors live at the edges where a
//! version is carried inside a larger document. We use `thiserror` for
//! automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for appver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for appver
#[derive(Debug, Error)]
pub enum Error {
    /// Serialization/deserialization error
    ///
    /// Raised when a manifest cannot be encoded, or when the surrounding
    /// document is malformed (including a `version` field that is not a
    /// string).
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Manifest decoded but holds values that make no sense
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
