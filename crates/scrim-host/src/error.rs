#![forbid(unsafe_code)]

//! Host error taxonomy.

use thiserror::Error;

/// Errors surfaced by the modal host.
///
/// None of these are fatal: validation failures turn into a `false`
/// return from `add_item`, and everything else turns into a rejected
/// open promise. The host stays usable after any single failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// A required field was missing or malformed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An open was requested for an unknown item, or before the host
    /// became ready.
    #[error("item not found: {0}")]
    NotFound(String),

    /// Anything else that went wrong inside a host operation.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}
