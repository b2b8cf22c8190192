// Death entity
// On the wire a death is flat with a `type` discriminant; in memory the cause is a
// two-variant enum so a pve death can never carry a murderer.

use serde::{Deserialize, Serialize};

use super::kill::PlayerKillEvent;
use super::presence::PlayerStamp;
use crate::error::ValidationError;
use crate::services::EventRecord;
use crate::utils::{forbid_field, require_field};
use crate::value_objects::{DeathType, RecordKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeathCause {
    Pve,
    Pvp {
        murderer: String,
        murderer_uuid: String,
    },
}

impl DeathCause {
    pub fn death_type(&self) -> DeathType {
        match self {
            DeathCause::Pve => DeathType::Pve,
            DeathCause::Pvp { .. } => DeathType::Pvp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlayerDeathFields", into = "PlayerDeathFields")]
pub struct PlayerDeathEvent {
    timestamp: String,
    server: String,
    victim: String,
    victim_uuid: String,
    death_message: String,
    cause: DeathCause,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDeathFields {
    pub timestamp: Option<String>,
    pub server: Option<String>,
    pub victim: Option<String>,
    pub death_message: Option<String>,
    #[serde(rename = "type")]
    pub death_type: Option<DeathType>,
    #[serde(rename = "victimUUID")]
    pub victim_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub murderer: Option<String>,
    #[serde(rename = "murdererUUID", skip_serializing_if = "Option::is_none")]
    pub murderer_uuid: Option<String>,
}

impl PlayerDeathEvent {
    pub fn new(
        timestamp: impl Into<String>,
        server: impl Into<String>,
        victim: impl Into<String>,
        victim_uuid: impl Into<String>,
        death_message: impl Into<String>,
        cause: DeathCause,
    ) -> Result<Self, ValidationError> {
        let death_type = cause.death_type();
        let (murderer, murderer_uuid) = match cause {
            DeathCause::Pve => (None, None),
            DeathCause::Pvp {
                murderer,
                murderer_uuid,
            } => (Some(murderer), Some(murderer_uuid)),
        };
        Self::construct(PlayerDeathFields {
            timestamp: Some(timestamp.into()),
            server: Some(server.into()),
            victim: Some(victim.into()),
            death_message: Some(death_message.into()),
            death_type: Some(death_type),
            victim_uuid: Some(victim_uuid.into()),
            murderer,
            murderer_uuid,
        })
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn victim(&self) -> &str {
        &self.victim
    }

    pub fn victim_uuid(&self) -> &str {
        &self.victim_uuid
    }

    pub fn death_message(&self) -> &str {
        &self.death_message
    }

    pub fn cause(&self) -> &DeathCause {
        &self.cause
    }

    pub fn death_type(&self) -> DeathType {
        self.cause.death_type()
    }

    pub fn murderer(&self) -> Option<&str> {
        match &self.cause {
            DeathCause::Pve => None,
            DeathCause::Pvp { murderer, .. } => Some(murderer.as_str()),
        }
    }

    pub fn murderer_uuid(&self) -> Option<&str> {
        match &self.cause {
            DeathCause::Pve => None,
            DeathCause::Pvp { murderer_uuid, .. } => Some(murderer_uuid.as_str()),
        }
    }

    /// Kill credited to the murderer of a pvp death.
    pub fn kill_event(&self) -> Option<PlayerKillEvent> {
        match &self.cause {
            DeathCause::Pve => None,
            DeathCause::Pvp {
                murderer,
                murderer_uuid,
            } => Some(PlayerKillEvent::from_stamp(PlayerStamp {
                username: murderer.clone(),
                uuid: murderer_uuid.clone(),
                timestamp: self.timestamp.clone(),
                server: self.server.clone(),
            })),
        }
    }
}

impl EventRecord for PlayerDeathEvent {
    const KIND: RecordKind = RecordKind::PlayerDeathEvent;
    type Fields = PlayerDeathFields;

    fn construct(fields: PlayerDeathFields) -> Result<Self, ValidationError> {
        let kind = Self::KIND;
        let timestamp = require_field(kind, "timestamp", fields.timestamp)?;
        let server = require_field(kind, "server", fields.server)?;
        let victim = require_field(kind, "victim", fields.victim)?;
        let death_message = require_field(kind, "death_message", fields.death_message)?;
        let victim_uuid = require_field(kind, "victimUUID", fields.victim_uuid)?;
        let death_type = fields
            .death_type
            .ok_or(ValidationError::MissingField { kind, field: "type" })?;

        let cause = match death_type {
            DeathType::Pve => {
                forbid_field(kind, "murderer", death_type, fields.murderer)?;
                forbid_field(kind, "murdererUUID", death_type, fields.murderer_uuid)?;
                DeathCause::Pve
            }
            DeathType::Pvp => DeathCause::Pvp {
                murderer: require_field(kind, "murderer", fields.murderer)?,
                murderer_uuid: require_field(kind, "murdererUUID", fields.murderer_uuid)?,
            },
        };

        Ok(Self {
            timestamp,
            server,
            victim,
            victim_uuid,
            death_message,
            cause,
        })
    }

    fn wire_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("timestamp", self.timestamp.as_str()),
            ("server", self.server.as_str()),
            ("victim", self.victim.as_str()),
            ("death_message", self.death_message.as_str()),
            ("type", self.death_type().as_str()),
            ("victimUUID", self.victim_uuid.as_str()),
        ];
        if let DeathCause::Pvp {
            murderer,
            murderer_uuid,
        } = &self.cause
        {
            fields.push(("murderer", murderer.as_str()));
            fields.push(("murdererUUID", murderer_uuid.as_str()));
        }
        fields
    }
}

impl TryFrom<PlayerDeathFields> for PlayerDeathEvent {
    type Error = ValidationError;

    fn try_from(fields: PlayerDeathFields) -> Result<Self, Self::Error> {
        Self::construct(fields)
    }
}

impl From<PlayerDeathEvent> for PlayerDeathFields {
    fn from(event: PlayerDeathEvent) -> Self {
        let death_type = event.death_type();
        let (murderer, murderer_uuid) = match event.cause {
            DeathCause::Pve => (None, None),
            DeathCause::Pvp {
                murderer,
                murderer_uuid,
            } => (Some(murderer), Some(murderer_uuid)),
        };
        Self {
            timestamp: Some(event.timestamp),
            server: Some(event.server),
            victim: Some(event.victim),
            death_message: Some(event.death_message),
            death_type: Some(death_type),
            victim_uuid: Some(event.victim_uuid),
            murderer,
            murderer_uuid,
        }
    }
}
