//! Enumeration types used throughout the match lifecycle.

use serde::{Deserialize, Serialize};

/// Selected game mode for a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two human players, last tank standing wins the round.
    #[default]
    Versus,
    /// One human player against AI tanks, rounds end on a score target.
    SinglePlayerAI,
    /// Two human players against AI tanks, rounds end on a score target.
    CoopAI,
}

/// How a round is won under a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinCondition {
    /// Round ends when at most one combatant remains alive.
    LastAlive,
    /// Round ends when the accumulated score reaches the target,
    /// or when every human combatant is dead.
    ScoreTarget,
}

impl GameMode {
    /// The win condition this mode plays under.
    pub fn win_condition(self) -> WinCondition {
        match self {
            GameMode::Versus => WinCondition::LastAlive,
            GameMode::SinglePlayerAI | GameMode::CoopAI => WinCondition::ScoreTarget,
        }
    }

    /// Whether AI combatants participate in this mode.
    pub fn is_ai_mode(self) -> bool {
        matches!(self, GameMode::SinglePlayerAI | GameMode::CoopAI)
    }
}

/// Round/match lifecycle phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Round reset, combatants frozen, start countdown running.
    #[default]
    Starting,
    /// Combatants under control, end conditions evaluated each tick.
    Playing,
    /// Suspended overlay on Starting or Playing; no timers advance.
    Paused,
    /// Round decided, end countdown running before the next round
    /// or the end of the match.
    RoundEnding,
    /// Terminal: a combatant reached the win threshold.
    MatchEnding,
}

/// Who controls a combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Controller {
    /// Human player, numbered from 1.
    Human { player_number: u8 },
    /// AI-controlled tank, tagged for display.
    Ai { tag: u8 },
}

impl Controller {
    pub fn is_human(self) -> bool {
        matches!(self, Controller::Human { .. })
    }

    /// Display label ("PLAYER 1", "ENEMY 3").
    pub fn label(self) -> String {
        match self {
            Controller::Human { player_number } => format!("PLAYER {player_number}"),
            Controller::Ai { tag } => format!("ENEMY {tag}"),
        }
    }
}

/// Identifier for an externally-owned presentation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelId {
    Hud,
    RoundInfo,
    Pause,
    MatchEnd,
}

/// Scene transition requested from the surrounding host.
/// Emitted only at match end or explicit menu navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneRequest {
    /// Reload the current arena.
    Reload,
    /// Load a different scene by identifier.
    Load { scene: String },
}
