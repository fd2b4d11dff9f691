//! Loggable extraction error types.

use vermap_core::InvalidMapping;
use vermap_mapping::DocumentError;

/// Failure while deriving a class's versioning configuration.
#[derive(Debug, thiserror::Error)]
pub enum LoggableError {
    /// The mapping is readable but incoherent.
    #[error(transparent)]
    Invalid(#[from] InvalidMapping),

    /// A mapping document could not be located or read.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl LoggableError {
    #[must_use]
    pub const fn is_invalid_mapping(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    #[must_use]
    pub const fn as_invalid_mapping(&self) -> Option<&InvalidMapping> {
        match self {
            Self::Invalid(invalid) => Some(invalid),
            Self::Document(_) => None,
        }
    }
}
