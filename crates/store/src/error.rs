//! Error types for the store crate.

use thiserror::Error;

/// Errors raised while reading or writing the catalog.
///
/// "Not found" is never an error here: lookups return `Option` and
/// deletes return `false` instead.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error while reading or writing the snapshot file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The snapshot decoded but breaks a catalog invariant
    #[error("Corrupt catalog: {reason}")]
    Corrupt { reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
