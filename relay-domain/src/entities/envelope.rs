// Event envelope
// `{client_id, action, data}` frame; `action` selects the record decoder for `data`

use serde::Deserialize;
use serde_json::Value;

use super::{
    AdvancementEvent, BridgeChatMessage, GameChatMessage, PlayerDeathEvent, PlayerJoinEvent,
    PlayerKillEvent, PlayerLeaveEvent,
};
use crate::error::DecodeError;
use crate::services::codec::canonical_object;
use crate::services::{decode_value, EventRecord};
use crate::utils::present;
use crate::value_objects::RecordKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    GameChat(GameChatMessage),
    BridgeChat(BridgeChatMessage),
    Advancement(AdvancementEvent),
    PlayerJoin(PlayerJoinEvent),
    PlayerLeave(PlayerLeaveEvent),
    PlayerKill(PlayerKillEvent),
    PlayerDeath(PlayerDeathEvent),
}

macro_rules! bridge_event_from {
    ($($variant:ident => $record:ty),* $(,)?) => {
        $(
            impl From<$record> for BridgeEvent {
                fn from(record: $record) -> Self {
                    BridgeEvent::$variant(record)
                }
            }
        )*
    };
}

bridge_event_from!(
    GameChat => GameChatMessage,
    BridgeChat => BridgeChatMessage,
    Advancement => AdvancementEvent,
    PlayerJoin => PlayerJoinEvent,
    PlayerLeave => PlayerLeaveEvent,
    PlayerKill => PlayerKillEvent,
    PlayerDeath => PlayerDeathEvent,
);

impl BridgeEvent {
    pub fn kind(&self) -> RecordKind {
        match self {
            BridgeEvent::GameChat(_) => RecordKind::GameChatMessage,
            BridgeEvent::BridgeChat(_) => RecordKind::BridgeChatMessage,
            BridgeEvent::Advancement(_) => RecordKind::AdvancementEvent,
            BridgeEvent::PlayerJoin(_) => RecordKind::PlayerJoinEvent,
            BridgeEvent::PlayerLeave(_) => RecordKind::PlayerLeaveEvent,
            BridgeEvent::PlayerKill(_) => RecordKind::PlayerKillEvent,
            BridgeEvent::PlayerDeath(_) => RecordKind::PlayerDeathEvent,
        }
    }

    pub fn server(&self) -> &str {
        match self {
            BridgeEvent::GameChat(record) => record.server(),
            BridgeEvent::BridgeChat(record) => record.server(),
            BridgeEvent::Advancement(record) => record.server(),
            BridgeEvent::PlayerJoin(record) => record.server(),
            BridgeEvent::PlayerLeave(record) => record.server(),
            BridgeEvent::PlayerKill(record) => record.server(),
            BridgeEvent::PlayerDeath(record) => record.server(),
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            BridgeEvent::GameChat(record) => record.timestamp(),
            BridgeEvent::BridgeChat(record) => record.timestamp(),
            BridgeEvent::Advancement(record) => record.timestamp(),
            BridgeEvent::PlayerJoin(record) => record.timestamp(),
            BridgeEvent::PlayerLeave(record) => record.timestamp(),
            BridgeEvent::PlayerKill(record) => record.timestamp(),
            BridgeEvent::PlayerDeath(record) => record.timestamp(),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            BridgeEvent::GameChat(record) => record.to_value(),
            BridgeEvent::BridgeChat(record) => record.to_value(),
            BridgeEvent::Advancement(record) => record.to_value(),
            BridgeEvent::PlayerJoin(record) => record.to_value(),
            BridgeEvent::PlayerLeave(record) => record.to_value(),
            BridgeEvent::PlayerKill(record) => record.to_value(),
            BridgeEvent::PlayerDeath(record) => record.to_value(),
        }
    }

    pub fn decode(kind: RecordKind, data: Value) -> Result<Self, DecodeError> {
        let event = match kind {
            RecordKind::GameChatMessage => decode_value::<GameChatMessage>(data)?.into(),
            RecordKind::BridgeChatMessage => decode_value::<BridgeChatMessage>(data)?.into(),
            RecordKind::AdvancementEvent => decode_value::<AdvancementEvent>(data)?.into(),
            RecordKind::PlayerJoinEvent => decode_value::<PlayerJoinEvent>(data)?.into(),
            RecordKind::PlayerLeaveEvent => decode_value::<PlayerLeaveEvent>(data)?.into(),
            RecordKind::PlayerKillEvent => decode_value::<PlayerKillEvent>(data)?.into(),
            RecordKind::PlayerDeathEvent => decode_value::<PlayerDeathEvent>(data)?.into(),
        };
        Ok(event)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEnvelope {
    pub client_id: Option<String>,
    pub event: BridgeEvent,
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    client_id: Option<String>,
    action: String,
    data: Value,
}

impl EventEnvelope {
    pub fn new(event: impl Into<BridgeEvent>) -> Self {
        Self {
            client_id: None,
            event: event.into(),
        }
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = present(Some(client_id.into()));
        self
    }

    pub fn action(&self) -> &'static str {
        self.event.kind().action()
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let raw: RawEnvelope =
            serde_json::from_slice(bytes).map_err(|err| DecodeError::malformed("envelope", err))?;
        let kind = RecordKind::from_action(&raw.action)
            .ok_or_else(|| DecodeError::UnknownAction(raw.action.clone()))?;
        Ok(Self {
            client_id: present(raw.client_id),
            event: BridgeEvent::decode(kind, raw.data)?,
        })
    }

    pub fn to_value(&self) -> Value {
        let mut entries = vec![
            ("action", Value::String(self.action().to_string())),
            ("data", self.event.to_value()),
        ];
        if let Some(client_id) = &self.client_id {
            entries.push(("client_id", Value::String(client_id.clone())));
        }
        canonical_object(entries)
    }

    pub fn encode(&self) -> Vec<u8> {
        self.to_value().to_string().into_bytes()
    }
}
