use relay_domain::{DecodeError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized server '{0}'")]
    Unauthorized(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AppError {
    /// The rule violation behind this error, whether raised directly or while decoding.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            AppError::Validation(err) | AppError::Decode(DecodeError::Invalid(err)) => Some(err),
            _ => None,
        }
    }
}
