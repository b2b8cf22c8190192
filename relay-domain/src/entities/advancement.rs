// Advancement entity
// A player unlocked an advancement

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::services::EventRecord;
use crate::utils::require_field;
use crate::value_objects::RecordKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AdvancementFields")]
pub struct AdvancementEvent {
    advancement: String,
    username: String,
    uuid: String,
    timestamp: String,
    server: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancementFields {
    pub advancement: Option<String>,
    pub username: Option<String>,
    pub uuid: Option<String>,
    pub timestamp: Option<String>,
    pub server: Option<String>,
}

impl AdvancementEvent {
    pub fn advancement(&self) -> &str {
        &self.advancement
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

impl EventRecord for AdvancementEvent {
    const KIND: RecordKind = RecordKind::AdvancementEvent;
    type Fields = AdvancementFields;

    fn construct(fields: AdvancementFields) -> Result<Self, ValidationError> {
        let kind = Self::KIND;
        Ok(Self {
            advancement: require_field(kind, "advancement", fields.advancement)?,
            username: require_field(kind, "username", fields.username)?,
            uuid: require_field(kind, "uuid", fields.uuid)?,
            timestamp: require_field(kind, "timestamp", fields.timestamp)?,
            server: require_field(kind, "server", fields.server)?,
        })
    }

    fn wire_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("advancement", self.advancement.as_str()),
            ("username", self.username.as_str()),
            ("uuid", self.uuid.as_str()),
            ("timestamp", self.timestamp.as_str()),
            ("server", self.server.as_str()),
        ]
    }
}

impl TryFrom<AdvancementFields> for AdvancementEvent {
    type Error = ValidationError;

    fn try_from(fields: AdvancementFields) -> Result<Self, Self::Error> {
        Self::construct(fields)
    }
}
