// Record kind value object
// The closed set of message shapes and the envelope action carrying each one

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    GameChatMessage,
    BridgeChatMessage,
    AdvancementEvent,
    PlayerJoinEvent,
    PlayerLeaveEvent,
    PlayerKillEvent,
    PlayerDeathEvent,
}

impl RecordKind {
    pub const COUNT: usize = 7;

    pub const ALL: [RecordKind; RecordKind::COUNT] = [
        RecordKind::GameChatMessage,
        RecordKind::BridgeChatMessage,
        RecordKind::AdvancementEvent,
        RecordKind::PlayerJoinEvent,
        RecordKind::PlayerLeaveEvent,
        RecordKind::PlayerKillEvent,
        RecordKind::PlayerDeathEvent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::GameChatMessage => "GameChatMessage",
            RecordKind::BridgeChatMessage => "BridgeChatMessage",
            RecordKind::AdvancementEvent => "AdvancementEvent",
            RecordKind::PlayerJoinEvent => "PlayerJoinEvent",
            RecordKind::PlayerLeaveEvent => "PlayerLeaveEvent",
            RecordKind::PlayerKillEvent => "PlayerKillEvent",
            RecordKind::PlayerDeathEvent => "PlayerDeathEvent",
        }
    }

    /// Envelope `action` value used on the wire for this kind.
    pub fn action(&self) -> &'static str {
        match self {
            RecordKind::GameChatMessage => "inbound_minecraft_chat",
            RecordKind::BridgeChatMessage => "inbound_discord_chat",
            RecordKind::AdvancementEvent => "minecraft_advancement",
            RecordKind::PlayerJoinEvent => "minecraft_player_join",
            RecordKind::PlayerLeaveEvent => "minecraft_player_leave",
            RecordKind::PlayerKillEvent => "minecraft_player_kill",
            RecordKind::PlayerDeathEvent => "minecraft_player_death",
        }
    }

    pub fn from_action(action: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.action() == action)
    }

    /// Position in [`RecordKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
