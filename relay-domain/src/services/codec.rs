// Canonical codec
// Records encode as compact JSON objects with lexicographically sorted keys,
// independent of which map type serde_json is built with.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{DecodeError, ValidationError};
use crate::value_objects::RecordKind;

/// One of the closed set of message shapes.
pub trait EventRecord: Sized {
    const KIND: RecordKind;

    /// Loose field set accepted by [`EventRecord::construct`]; every field optional.
    type Fields: DeserializeOwned;

    fn construct(fields: Self::Fields) -> Result<Self, ValidationError>;

    /// Wire name and value of every populated field.
    fn wire_fields(&self) -> Vec<(&'static str, &str)>;

    fn to_value(&self) -> Value {
        canonical_object(
            self.wire_fields()
                .into_iter()
                .map(|(key, value)| (key, Value::String(value.to_string()))),
        )
    }
}

pub fn serialize<R: EventRecord>(record: &R) -> Vec<u8> {
    record.to_value().to_string().into_bytes()
}

pub fn deserialize<R: EventRecord>(bytes: &[u8]) -> Result<R, DecodeError> {
    let fields: R::Fields = serde_json::from_slice(bytes)
        .map_err(|err| DecodeError::malformed(R::KIND.as_str(), err))?;
    Ok(R::construct(fields)?)
}

pub fn decode_value<R: EventRecord>(value: Value) -> Result<R, DecodeError> {
    let fields: R::Fields = serde_json::from_value(value)
        .map_err(|err| DecodeError::malformed(R::KIND.as_str(), err))?;
    Ok(R::construct(fields)?)
}

pub(crate) fn canonical_object<'a>(entries: impl IntoIterator<Item = (&'a str, Value)>) -> Value {
    let mut entries: Vec<(&str, Value)> = entries.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    let mut map = Map::new();
    for (key, value) in entries {
        map.insert(key.to_string(), value);
    }
    Value::Object(map)
}
