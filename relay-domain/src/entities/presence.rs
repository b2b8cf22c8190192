// Presence entities
// Player joined or left a server

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::services::EventRecord;
use crate::utils::require_field;
use crate::value_objects::RecordKind;

/// Field set shared by the single-player event shapes (join, leave, kill).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerFields {
    pub username: Option<String>,
    pub uuid: Option<String>,
    pub timestamp: Option<String>,
    pub server: Option<String>,
}

/// Validated player identity plus event origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct PlayerStamp {
    pub(crate) username: String,
    pub(crate) uuid: String,
    pub(crate) timestamp: String,
    pub(crate) server: String,
}

impl PlayerStamp {
    pub(crate) fn from_fields(kind: RecordKind, fields: PlayerFields) -> Result<Self, ValidationError> {
        Ok(Self {
            username: require_field(kind, "username", fields.username)?,
            uuid: require_field(kind, "uuid", fields.uuid)?,
            timestamp: require_field(kind, "timestamp", fields.timestamp)?,
            server: require_field(kind, "server", fields.server)?,
        })
    }

    pub(crate) fn wire_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("username", self.username.as_str()),
            ("uuid", self.uuid.as_str()),
            ("timestamp", self.timestamp.as_str()),
            ("server", self.server.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlayerFields")]
pub struct PlayerJoinEvent {
    #[serde(flatten)]
    stamp: PlayerStamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlayerFields")]
pub struct PlayerLeaveEvent {
    #[serde(flatten)]
    stamp: PlayerStamp,
}

macro_rules! player_event_accessors {
    ($record:ty) => {
        impl $record {
            pub fn username(&self) -> &str {
                &self.stamp.username
            }

            pub fn uuid(&self) -> &str {
                &self.stamp.uuid
            }

            pub fn timestamp(&self) -> &str {
                &self.stamp.timestamp
            }

            pub fn server(&self) -> &str {
                &self.stamp.server
            }
        }

        impl TryFrom<PlayerFields> for $record {
            type Error = ValidationError;

            fn try_from(fields: PlayerFields) -> Result<Self, Self::Error> {
                <Self as EventRecord>::construct(fields)
            }
        }
    };
}

pub(crate) use player_event_accessors;

player_event_accessors!(PlayerJoinEvent);
player_event_accessors!(PlayerLeaveEvent);

impl EventRecord for PlayerJoinEvent {
    const KIND: RecordKind = RecordKind::PlayerJoinEvent;
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

impl EventRecord for PlayerLeaveEvent {
    const KIND: RecordKind = RecordKind::PlayerLeaveEvent;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{deserialize, serialize};

    fn fields() -> PlayerFields {
        PlayerFields {
            username: Some("steve".to_string()),
            uuid: Some("u1".to_string()),
            timestamp: Some("t".to_string()),
            server: Some("smp".to_string()),
        }
    }

    #[test]
    fn join_and_leave_share_the_wire_shape() {
        let join = PlayerJoinEvent::construct(fields()).expect("join");
        let leave = PlayerLeaveEvent::construct(fields()).expect("leave");
        assert_eq!(serialize(&join), serialize(&leave));
        assert_eq!(
            String::from_utf8(serialize(&join)).expect("utf8"),
            r#"{"server":"smp","timestamp":"t","username":"steve","uuid":"u1"}"#
        );
    }

    #[test]
    fn missing_field_names_the_record_kind() {
        let err = PlayerLeaveEvent::construct(PlayerFields {
            server: None,
            ..fields()
        })
        .expect_err("server required");
        assert_eq!(
            err,
            ValidationError::MissingField {
                kind: RecordKind::PlayerLeaveEvent,
                field: "server",
            }
        );
    }

    #[test]
    fn every_missing_join_and_leave_field_is_reported() {
        for field in ["username", "uuid", "timestamp", "server"] {
            let mut value = serde_json::to_value(fields()).expect("fields");
            value
                .as_object_mut()
                .expect("object")
                .remove(field);
            let partial: PlayerFields = serde_json::from_value(value).expect("fields");

            let err = PlayerJoinEvent::construct(partial.clone()).expect_err("missing join field");
            assert_eq!(
                err,
                ValidationError::MissingField {
                    kind: RecordKind::PlayerJoinEvent,
                    field,
                }
            );
            let err = PlayerLeaveEvent::construct(partial).expect_err("missing leave field");
            assert_eq!(
                err,
                ValidationError::MissingField {
                    kind: RecordKind::PlayerLeaveEvent,
                    field,
                }
            );
        }
    }

    #[test]
    fn join_round_trips_and_matches_serde_shape() {
        let join = PlayerJoinEvent::construct(fields()).expect("join");
        let decoded: PlayerJoinEvent = deserialize(&serialize(&join)).expect("decode");
        assert_eq!(decoded, join);
        assert_eq!(serde_json::to_value(&join).expect("to_value"), join.to_value());
    }
}
