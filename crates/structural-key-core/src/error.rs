//! Error types for structural keys and the coders they consume.

use thiserror::Error;

/// Failures reported by a [`Coder`](crate::Coder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoderError {
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("decoding error: {0}")]
    Decoding(String),

    #[error("structural value error: {0}")]
    StructuralValue(String),
}

/// Errors surfaced by [`StructuralKey`](crate::StructuralKey) operations.
///
/// Both variants carry the name of the coder involved and keep the
/// underlying [`CoderError`] reachable through `Error::source`.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The structural value or the encoding could not be computed, so no key
    /// was built.
    #[error("could not encode a key with its provided coder {coder}")]
    Construction {
        coder: String,
        #[source]
        source: CoderError,
    },

    /// The bytes stored in a key could not be decoded by its retained coder.
    #[error("could not decode a key with coder {coder}")]
    Decoding {
        coder: String,
        #[source]
        source: CoderError,
    },
}

impl KeyError {
    /// Name of the coder that produced the failure.
    pub fn coder(&self) -> &str {
        match self {
            KeyError::Construction { coder, .. } | KeyError::Decoding { coder, .. } => coder,
        }
    }

    /// The coder failure that caused this error.
    pub fn cause(&self) -> &CoderError {
        match self {
            KeyError::Construction { source, .. } | KeyError::Decoding { source, .. } => source,
        }
    }
}

/// Result type for structural key operations.
pub type Result<T> = std::result::Result<T, KeyError>;
