//! Error types for risk engine

use thiserror::Error;

/// Risk engine error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// One or more of the required financial fields was absent.
    /// The message is fixed and does not name the missing field.
    #[error("Missing required financial fields")]
    MissingFields,
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
