// Legacy advancement shape
// Older game-server builds sent `time` as epoch milliseconds under `mc_server`, with an
// optional uuid. The canonical decoder never accepts it; it is converted explicitly.

use chrono::{SecondsFormat, TimeZone, Utc};
use serde::Deserialize;

use super::{AdvancementEvent, AdvancementFields};
use crate::error::{DecodeError, ValidationError};
use crate::services::EventRecord;
use crate::value_objects::RecordKind;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LegacyAdvancement {
    pub username: Option<String>,
    pub advancement: Option<String>,
    pub time: i64,
    pub mc_server: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

impl LegacyAdvancement {
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(bytes).map_err(|err| DecodeError::malformed("LegacyAdvancement", err))
    }
}

impl AdvancementEvent {
    /// Converts the retired shape. `id` is a storage row id and is dropped.
    pub fn from_legacy(legacy: LegacyAdvancement) -> Result<Self, ValidationError> {
        let timestamp = millis_to_rfc3339(legacy.time).ok_or_else(|| {
            ValidationError::InvalidTimestamp {
                kind: RecordKind::AdvancementEvent,
                value: legacy.time.to_string(),
            }
        })?;
        Self::construct(AdvancementFields {
            advancement: legacy.advancement,
            username: legacy.username,
            uuid: legacy.uuid,
            timestamp: Some(timestamp),
            server: legacy.mc_server,
        })
    }
}

fn millis_to_rfc3339(ms: i64) -> Option<String> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .map(|time| time.to_rfc3339_opts(SecondsFormat::Millis, true))
}
