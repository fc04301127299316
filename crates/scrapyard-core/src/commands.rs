//! Commands sent from the host to the match engine.
//!
//! Commands are queued and drained at the next tick boundary, so a
//! host thread can hand them over without touching engine state.

use serde::{Deserialize, Serialize};

use crate::types::CombatantId;

/// All actions a host may request of the match engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchCommand {
    /// Suspend the lifecycle. Valid while Starting or Playing;
    /// a no-op otherwise (including while already paused).
    Pause,
    /// Resume from pause, restoring the suspended phase.
    Resume,
    /// Add to the accumulated score (AI modes).
    AddScore { amount: u32 },
    /// Report damage dealt to a combatant by the external combat
    /// layer. Death is derived: a combatant with zero hull is no
    /// longer alive.
    Damage { target: CombatantId, amount: f32 },
}
