//! Match state snapshot — the complete visible state published each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{Controller, Phase};
use crate::events::MatchEvent;
use crate::types::{CombatantId, SimTime};

/// Complete lifecycle state published by the engine after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: Phase,
    /// Round counter, 1-based once the first round has started.
    pub round: u32,
    pub combatants: Vec<CombatantView>,
    pub score: ScoreView,
    /// Outcome of the most recently decided round.
    pub outcome: RoundOutcome,
    /// Events emitted during this tick, in order.
    pub events: Vec<MatchEvent>,
}

/// One combatant as visible to presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantView {
    pub id: CombatantId,
    pub label: String,
    pub controller: Controller,
    pub wins: u32,
    /// Derived from the in-world instance each tick, never cached.
    pub alive: bool,
}

/// Accumulated/target score. Meaningful only in score-target modes;
/// zero target otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub current: u32,
    pub target: u32,
}

impl ScoreView {
    pub fn reached(&self) -> bool {
        self.target > 0 && self.current >= self.target
    }
}

/// Winner bookkeeping, recomputed on each entry to RoundEnding.
/// `match_winner` is immutable once set: MatchEnding is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Round winner, None for a draw.
    pub round_winner: Option<CombatantId>,
    /// First combatant to reach the win threshold, if any.
    pub match_winner: Option<CombatantId>,
}
