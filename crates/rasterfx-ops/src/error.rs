//! Error types for effect operations.

use thiserror::Error;

/// Error type for effect operations.
///
/// Effects validate their parameters before allocating the destination
/// buffer; once a kernel starts it cannot fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for effect operations.
pub type OpsResult<T> = Result<T, OpsError>;
