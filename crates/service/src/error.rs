//! Error types for the service crate.

use store::StoreError;
use thiserror::Error;

/// Errors the presentation layer has to deal with.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The user sent something we cannot accept; show `reason` next to `field`
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// The store failed; passed through unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ServiceError>;
