//! Error types for the data shim
//!
//! Two tiers: [`RequestError`] for contract violations the caller has to fix
//! at the call site, [`StoreError`] for environment faults reported through
//! the failure callback.

use thiserror::Error;

/// A malformed request config.
///
/// Returned as `Err` from [`DataShim::data`](crate::DataShim::data) and
/// [`DataRequest::from_value`](crate::DataRequest::from_value); never routed
/// through the failure callback, and no storage access happens first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The config had no usable key
    #[error("missing key; make sure you include the appropriate config")]
    MissingKey,

    /// `act` was present but not one of the supported literals
    #[error("invalid act {0:?}; must be either \"load\", \"save\" or \"remove\"")]
    InvalidAct(String),

    /// The JSON config was not an object of the expected shape
    #[error("bad request config: {0}")]
    BadConfig(String),
}

/// Error type for storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("database error: {0}")]
    Database(String),

    /// Invalid path
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
