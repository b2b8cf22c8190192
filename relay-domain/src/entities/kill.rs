// Kill entity
// Credited to the player that scored the kill; the victim travels in the matching death event

use serde::{Deserialize, Serialize};

use super::presence::{player_event_accessors, PlayerFields, PlayerStamp};
use crate::error::ValidationError;
use crate::services::EventRecord;
use crate::value_objects::RecordKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlayerFields")]
pub struct PlayerKillEvent {
    #[serde(flatten)]
    stamp: PlayerStamp,
}

player_event_accessors!(PlayerKillEvent);

impl PlayerKillEvent {
    pub(crate) fn from_stamp(stamp: PlayerStamp) -> Self {
        Self { stamp }
    }
}

impl EventRecord for PlayerKillEvent {
    const KIND: RecordKind = RecordKind::PlayerKillEvent;
    type Fields = PlayerFields;

    fn construct(fields: PlayerFields) -> Result<Self, ValidationError> {
        Ok(Self {
            stamp: PlayerStamp::from_fields(Self::KIND, fields)?,
        })
    }

    fn wire_fields(&self) -> Vec<(&'static str, &str)> {
        self.stamp.wire_fields()
    }
}
