//! Game mode selection.

use serde::{Deserialize, Serialize};

use crate::games::tictactoe::Mark;

/// Game mode - who is the opponent?
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    clap::ValueEnum,
)]
pub enum GameMode {
    /// Two humans sharing the board.
    #[default]
    #[value(name = "pvp")]
    #[serde(rename = "pvp")]
    PlayerVsPlayer,
    /// Human plays X, the CPU plays O.
    #[value(name = "pvc")]
    #[serde(rename = "pvc")]
    PlayerVsCpu,
}

impl GameMode {
    /// Mark played by the CPU in this mode.
    pub const CPU_MARK: Mark = Mark::O;

    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsCpu => "Player vs CPU",
        }
    }

    /// The mark the machine controls, if any.
    pub fn machine_mark(&self) -> Option<Mark> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsCpu => Some(Self::CPU_MARK),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
