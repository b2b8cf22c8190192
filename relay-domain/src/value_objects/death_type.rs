// Death type value object
// Wire discriminant of a player death: environment (pve) or another player (pvp)

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeathType {
    Pve,
    Pvp,
}

impl DeathType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeathType::Pve => "pve",
            DeathType::Pvp => "pvp",
        }
    }
}

impl fmt::Display for DeathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
