// Field presence helpers shared by the record constructors

use crate::error::ValidationError;
use crate::value_objects::{DeathType, RecordKind};

/// Producers emit `""` for unset strings, so empty counts as absent.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

pub fn require_field(
    kind: RecordKind,
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    present(value).ok_or(ValidationError::MissingField { kind, field })
}

pub fn forbid_field(
    kind: RecordKind,
    field: &'static str,
    death_type: DeathType,
    value: Option<String>,
) -> Result<(), ValidationError> {
    match present(value) {
        Some(_) => Err(ValidationError::UnexpectedField {
            kind,
            field,
            death_type,
        }),
        None => Ok(()),
    }
}
