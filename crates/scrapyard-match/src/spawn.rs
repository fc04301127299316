//! Spawn coordination — populates the roster from configured slots.
//!
//! Runs exactly once, inside `MatchEngine::new`, strictly before the
//! first tick. Invalid slots are logged and skipped so one bad
//! authoring entry does not take the whole match down; spawning fails
//! only when nothing at all could be placed.

use log::{info, warn};

use scrapyard_core::config::MatchConfig;
use scrapyard_core::enums::GameMode;
use scrapyard_core::error::SetupError;

use crate::host::CombatantHost;
use crate::roster::Roster;

/// Slot index reserved for player two, skipped in single-player mode.
const PLAYER_TWO_SLOT: usize = 1;

/// Spawn one combatant per configured slot and register each with the
/// roster, in slot order.
pub fn spawn_all<H: CombatantHost>(
    config: &MatchConfig,
    host: &mut H,
    roster: &mut Roster,
) -> Result<(), SetupError> {
    if config.slots.is_empty() {
        return Err(SetupError::NoSpawnPoints);
    }

    for (index, slot) in config.slots.iter().enumerate() {
        if config.mode == GameMode::SinglePlayerAI && index == PLAYER_TWO_SLOT {
            continue;
        }

        if !slot.point.is_finite() {
            warn!("skipping spawn slot {index}: non-finite spawn transform");
            continue;
        }

        let instance = host.spawn(&slot.point);
        let scaling = if slot.controller.is_human() {
            None
        } else {
            host.apply_difficulty(instance, config.ai_scaling);
            Some(config.ai_scaling)
        };

        // The engine locks the roster only after spawning completes,
        // so registration cannot fail here in practice.
        let id = roster.register(slot.controller, instance, scaling)?;
        info!(
            "spawned combatant {:?} ({}) at slot {index}",
            id,
            slot.controller.label()
        );
    }

    if roster.is_empty() {
        return Err(SetupError::NoCombatants);
    }
    Ok(())
}
