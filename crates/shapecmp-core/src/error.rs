//! Error types for shapecmp

use thiserror::Error;

/// Main error type for shapecmp predicates.
///
/// Normalization and shape dispatch are total, so the only failure is a
/// malformed call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The argument list was present but had too few elements.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Builds the error raised when a variadic argument list is shorter than
    /// `min` elements.
    pub fn too_few(name: &str, min: usize) -> Self {
        Error::InvalidArgument(format!(
            "{name}: length should be greater than {}",
            min.saturating_sub(1)
        ))
    }
}

/// Result type alias for shapecmp operations
pub type Result<T> = std::result::Result<T, Error>;
