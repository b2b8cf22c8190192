// Domain errors
// Both kinds are recoverable: the caller rejects the payload and reports it

use thiserror::Error;

use crate::value_objects::{DeathType, RecordKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{kind}: missing required field '{field}'")]
    MissingField {
        kind: RecordKind,
        field: &'static str,
    },
    #[error("{kind}: field '{field}' is not allowed when type is '{death_type}'")]
    UnexpectedField {
        kind: RecordKind,
        field: &'static str,
        death_type: DeathType,
    },
    #[error("{kind}: invalid timestamp '{value}'")]
    InvalidTimestamp { kind: RecordKind, value: String },
}

impl ValidationError {
    pub fn kind(&self) -> RecordKind {
        match self {
            ValidationError::MissingField { kind, .. }
            | ValidationError::UnexpectedField { kind, .. }
            | ValidationError::InvalidTimestamp { kind, .. } => *kind,
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed {target} payload: {source}")]
    Malformed {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown event action '{0}'")]
    UnknownAction(String),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl DecodeError {
    pub(crate) fn malformed(target: &'static str, source: serde_json::Error) -> Self {
        DecodeError::Malformed { target, source }
    }
}
