//! Error types for CartonFit.

use thiserror::Error;

/// Result type alias for CartonFit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building packing inputs.
///
/// "The part does not fit" is never an error: infeasibility is an expected
/// outcome and surfaces as an empty fit result instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid part definition.
    #[error("Invalid part: {0}")]
    InvalidPart(String),

    /// Invalid container definition.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// Invalid box catalogue.
    #[error("Invalid catalogue: {0}")]
    InvalidCatalogue(String),
}
