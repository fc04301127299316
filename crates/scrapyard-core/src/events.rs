//! Events emitted by the match engine for presentation and host hooks.
//!
//! Events are buffered during a tick and drained into that tick's
//! snapshot, mirroring how the engine's state is published.

use serde::{Deserialize, Serialize};

use crate::enums::{GameMode, SceneRequest};
use crate::types::CombatantId;

/// One lifecycle event. Consumers that only care about the latest
/// state can ignore these and read the snapshot fields directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// The match was set up and the first round is about to start.
    MatchStarted { mode: GameMode },
    /// A round entered its start freeze.
    RoundStarted { round: u32 },
    /// The start freeze elapsed; combatants are under control.
    RoundPlaying { round: u32 },
    /// The round was decided. `winner` is None on a draw.
    RoundEnded {
        round: u32,
        winner: Option<CombatantId>,
        match_winner: Option<CombatantId>,
    },
    /// Terminal: a combatant took the match.
    MatchEnded { winner: CombatantId },
    /// The lifecycle was suspended.
    Paused,
    /// The lifecycle resumed from pause.
    Resumed,
    /// The accumulated score changed.
    ScoreChanged { current: u32, target: u32 },
    /// The engine asks the surrounding host for a scene transition.
    /// Emitted only on entry to MatchEnding.
    SceneRequested { request: SceneRequest },
}
