//! Satisfiability checks run before generation.

use thiserror::Error;
use tracing::debug;

use super::Charset;

/// Why a (length, uniqueness, charset) request cannot be generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("A charset is empty.")]
    EmptyCharset,
    #[error("The charset is too short.")]
    CharsetTooSmall { length: usize, available: usize },
}

impl ValidationError {
    /// Stable name of the failure, for callers that report it programmatically.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::EmptyCharset => "EmptyCharset",
            ValidationError::CharsetTooSmall { .. } => "CharsetTooSmall",
        }
    }
}

/// Check that `length` characters can be drawn from `charset`.
///
/// Emptiness is checked first, so an empty charset always reports
/// `EmptyCharset` whatever the other inputs are.
pub fn validate(length: usize, unique_chars: bool, charset: &Charset) -> Result<(), ValidationError> {
    if charset.is_empty() {
        debug!(length, "rejected: empty charset");
        return Err(ValidationError::EmptyCharset);
    }

    if unique_chars && length > charset.len() {
        debug!(length, available = charset.len(), "rejected: charset too small for unique mode");
        return Err(ValidationError::CharsetTooSmall {
            length,
            available: charset.len(),
        });
    }

    Ok(())
}
