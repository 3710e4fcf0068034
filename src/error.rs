//! Crate-level error type.

use thiserror::Error;

use crate::pass::{GenerateError, ValidationError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Password length must be between 1 and {}.", crate::pass::MAX_LENGTH)]
    InvalidLength,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl Error {
    /// Stable name of the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidLength => "InvalidLength",
            Error::Validation(e) => e.kind(),
            Error::Generate(GenerateError::InsufficientCharset { .. }) => "InsufficientCharset",
            Error::Generate(GenerateError::LengthTooLong { .. }) => "LengthTooLong",
        }
    }
}
