// Chat entities
// Chat text relayed from the game side and from the Discord side

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::services::EventRecord;
use crate::utils::require_field;
use crate::value_objects::RecordKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameChatFields")]
pub struct GameChatMessage {
    message: String,
    username: String,
    uuid: String,
    timestamp: String,
    server: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameChatFields {
    pub message: Option<String>,
    pub username: Option<String>,
    pub uuid: Option<String>,
    pub timestamp: Option<String>,
    pub server: Option<String>,
}

impl GameChatMessage {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn server(&self) -> &str {
        &self.server
    }
}

impl EventRecord for GameChatMessage {
    const KIND: RecordKind = RecordKind::GameChatMessage;
    type Fields = GameChatFields;

    fn construct(fields: GameChatFields) -> Result<Self, ValidationError> {
        let kind = Self::KIND;
        Ok(Self {
            message: require_field(kind, "message", fields.message)?,
            username: require_field(kind, "username", fields.username)?,
            uuid: require_field(kind, "uuid", fields.uuid)?,
            timestamp: require_field(kind, "timestamp", fields.timestamp)?,
            server: require_field(kind, "server", fields.server)?,
        })
    }

    fn wire_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("message", self.message.as_str()),
            ("username", self.username.as_str()),
            ("uuid", self.uuid.as_str()),
            ("timestamp", self.timestamp.as_str()),
            ("server", self.server.as_str()),
        ]
    }
}

impl TryFrom<GameChatFields> for GameChatMessage {
    type Error = ValidationError;

    fn try_from(fields: GameChatFields) -> Result<Self, Self::Error> {
        Self::construct(fields)
    }
}

/// Chat from a Discord channel. Discord users have no Minecraft uuid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BridgeChatFields")]
pub struct BridgeChatMessage {
    message: String,
    username: String,
    timestamp: String,
    server: String,
    channel_id: String,
    guild_id: String,
    guild_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeChatFields {
    pub message: Option<String>,
    pub username: Option<String>,
    pub timestamp: Option<String>,
    pub server: Option<String>,
    pub channel_id: Option<String>,
    pub guild_id: Option<String>,
    pub guild_name: Option<String>,
}

impl BridgeChatMessage {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    pub fn guild_id(&self) -> &str {
        &self.guild_id
    }

    pub fn guild_name(&self) -> &str {
        &self.guild_name
    }
}

impl EventRecord for BridgeChatMessage {
    const KIND: RecordKind = RecordKind::BridgeChatMessage;
    type Fields = BridgeChatFields;

    fn construct(fields: BridgeChatFields) -> Result<Self, ValidationError> {
        let kind = Self::KIND;
        Ok(Self {
            message: require_field(kind, "message", fields.message)?,
            username: require_field(kind, "username", fields.username)?,
            timestamp: require_field(kind, "timestamp", fields.timestamp)?,
            server: require_field(kind, "server", fields.server)?,
            channel_id: require_field(kind, "channel_id", fields.channel_id)?,
            guild_id: require_field(kind, "guild_id", fields.guild_id)?,
            guild_name: require_field(kind, "guild_name", fields.guild_name)?,
        })
    }

    fn wire_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("message", self.message.as_str()),
            ("username", self.username.as_str()),
            ("timestamp", self.timestamp.as_str()),
            ("server", self.server.as_str()),
            ("channel_id", self.channel_id.as_str()),
            ("guild_id", self.guild_id.as_str()),
            ("guild_name", self.guild_name.as_str()),
        ]
    }
}

impl TryFrom<BridgeChatFields> for BridgeChatMessage {
    type Error = ValidationError;

    fn try_from(fields: BridgeChatFields) -> Result<Self, Self::Error> {
        Self::construct(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::services::{deserialize, serialize};

    fn bridge_fields() -> BridgeChatFields {
        BridgeChatFields {
            message: Some("hello".to_string()),
            username: Some("alex".to_string()),
            timestamp: Some("2024-01-01T00:00:00Z".to_string()),
            server: Some("smp".to_string()),
            channel_id: Some("123".to_string()),
            guild_id: Some("456".to_string()),
            guild_name: Some("MyGuild".to_string()),
        }
    }

    fn game_fields() -> GameChatFields {
        GameChatFields {
            message: Some("gg".to_string()),
            username: Some("steve".to_string()),
            uuid: Some("069a79f4-44e9-4726-a5be-fca90e38aaf5".to_string()),
            timestamp: Some("1700000000000".to_string()),
            server: Some("smp".to_string()),
        }
    }

    #[test]
    fn bridge_chat_survives_serialize_and_deserialize() {
        let record = BridgeChatMessage::construct(bridge_fields()).expect("construct");
        let bytes = serialize(&record);
        let decoded: BridgeChatMessage = deserialize(&bytes).expect("deserialize");
        assert_eq!(decoded, record);
        assert_eq!(decoded.guild_name(), "MyGuild");
    }

    #[test]
    fn bridge_chat_encodes_with_sorted_keys() {
        let record = BridgeChatMessage::construct(bridge_fields()).expect("construct");
        let text = String::from_utf8(serialize(&record)).expect("utf8");
        assert_eq!(
            text,
            r#"{"channel_id":"123","guild_id":"456","guild_name":"MyGuild","message":"hello","server":"smp","timestamp":"2024-01-01T00:00:00Z","username":"alex"}"#
        );
        assert_eq!(serialize(&record), serialize(&record.clone()));
    }

    #[test]
    fn every_missing_bridge_field_is_reported() {
        let clears: [(&str, fn(&mut BridgeChatFields)); 7] = [
            ("message", |f: &mut BridgeChatFields| f.message = None),
            ("username", |f: &mut BridgeChatFields| f.username = None),
            ("timestamp", |f: &mut BridgeChatFields| f.timestamp = None),
            ("server", |f: &mut BridgeChatFields| f.server = None),
            ("channel_id", |f: &mut BridgeChatFields| f.channel_id = None),
            ("guild_id", |f: &mut BridgeChatFields| f.guild_id = None),
            ("guild_name", |f: &mut BridgeChatFields| f.guild_name = None),
        ];
        for (field, clear) in clears {
            let mut fields = bridge_fields();
            clear(&mut fields);
            let err = BridgeChatMessage::construct(fields).expect_err("missing field");
            assert_eq!(
                err,
                ValidationError::MissingField {
                    kind: RecordKind::BridgeChatMessage,
                    field,
                }
            );
        }
    }

    #[test]
    fn every_missing_game_chat_field_is_reported() {
        let clears: [(&str, fn(&mut GameChatFields)); 5] = [
            ("message", |f: &mut GameChatFields| f.message = None),
            ("username", |f: &mut GameChatFields| f.username = None),
            ("uuid", |f: &mut GameChatFields| f.uuid = None),
            ("timestamp", |f: &mut GameChatFields| f.timestamp = None),
            ("server", |f: &mut GameChatFields| f.server = None),
        ];
        for (field, clear) in clears {
            let mut fields = game_fields();
            clear(&mut fields);
            let err = GameChatMessage::construct(fields).expect_err("missing field");
            assert_eq!(
                err,
                ValidationError::MissingField {
                    kind: RecordKind::GameChatMessage,
                    field,
                }
            );
        }
    }

    #[test]
    fn whitespace_only_text_is_kept_verbatim() {
        let record = GameChatMessage::construct(GameChatFields {
            message: Some(" ".to_string()),
            ..game_fields()
        })
        .expect("whitespace message");
        assert_eq!(record.message(), " ");
        let decoded: GameChatMessage = deserialize(&serialize(&record)).expect("deserialize");
        assert_eq!(decoded, record);

        let bridge = BridgeChatMessage::construct(BridgeChatFields {
            guild_name: Some("  ".to_string()),
            ..bridge_fields()
        })
        .expect("whitespace guild name");
        assert_eq!(bridge.guild_name(), "  ");
    }

    #[test]
    fn empty_message_counts_as_missing() {
        let err = GameChatMessage::construct(GameChatFields {
            message: Some(String::new()),
            ..game_fields()
        })
        .expect_err("empty message");
        assert_eq!(
            err,
            ValidationError::MissingField {
                kind: RecordKind::GameChatMessage,
                field: "message",
            }
        );
    }

    #[test]
    fn game_chat_round_trips_through_serde_derive() {
        let record = GameChatMessage::construct(game_fields()).expect("construct");
        assert_eq!(serde_json::to_value(&record).expect("to_value"), record.to_value());
        let decoded: GameChatMessage =
            serde_json::from_value(record.to_value()).expect("from_value");
        assert_eq!(decoded, record);
    }

    #[test]
    fn deserialize_rejects_non_object_payload() {
        let err = deserialize::<GameChatMessage>(b"[\"gg\"]").expect_err("array payload");
        assert!(matches!(
            err,
            DecodeError::Malformed {
                target: "GameChatMessage",
                ..
            }
        ));
    }

    #[test]
    fn deserialize_reports_missing_uuid_as_invalid() {
        let err = deserialize::<GameChatMessage>(
            br#"{"message":"gg","username":"steve","timestamp":"t","server":"smp"}"#,
        )
        .expect_err("missing uuid");
        match err {
            DecodeError::Invalid(ValidationError::MissingField { field, .. }) => {
                assert_eq!(field, "uuid")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn deserialize_ignores_unknown_keys() {
        let record = deserialize::<GameChatMessage>(
            br#"{"message":"gg","username":"steve","uuid":"u","timestamp":"t","server":"smp","id":7}"#,
        )
        .expect("extra key tolerated");
        assert_eq!(record.username(), "steve");
    }
}
