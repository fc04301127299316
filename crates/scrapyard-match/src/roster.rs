//! Roster registry — the ordered set of combatants for a match.
//!
//! Registration order is authoritative: round winner selection walks
//! the roster in order, so the first registered survivor takes a
//! simultaneous-death tie. The roster locks when the match starts;
//! late joins are unsupported.

use scrapyard_core::enums::Controller;
use scrapyard_core::error::SetupError;
use scrapyard_core::state::CombatantView;
use scrapyard_core::types::{CombatantId, DifficultyScaling, InstanceId};

use crate::host::CombatantHost;

/// One participating tank. Plain data; lifecycle logic lives in the
/// engine, world state in the host.
#[derive(Debug, Clone)]
pub struct Combatant {
    pub id: CombatantId,
    pub controller: Controller,
    pub label: String,
    /// Rounds won so far this match.
    pub wins: u32,
    /// Handle to the in-world instance.
    pub instance: InstanceId,
    /// Difficulty multipliers, present on AI-controlled combatants.
    pub scaling: Option<DifficultyScaling>,
}

/// Ordered combatant registry, fixed for the duration of a match.
#[derive(Debug, Default)]
pub struct Roster {
    combatants: Vec<Combatant>,
    locked: bool,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a combatant. Fails once the roster is locked.
    pub fn register(
        &mut self,
        controller: Controller,
        instance: InstanceId,
        scaling: Option<DifficultyScaling>,
    ) -> Result<CombatantId, SetupError> {
        if self.locked {
            return Err(SetupError::RosterLocked);
        }
        let id = CombatantId(self.combatants.len() as u32);
        self.combatants.push(Combatant {
            id,
            label: controller.label(),
            controller,
            wins: 0,
            instance,
            scaling,
        });
        Ok(id)
    }

    /// Lock registration. Called once by the engine after spawning.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter()
    }

    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.get_mut(id.0 as usize)
    }

    /// Combatants currently alive per the host, in roster order.
    /// Recomputed from live instance state on every call.
    pub fn alive_ids<'a, H: CombatantHost>(
        &'a self,
        host: &'a H,
    ) -> impl Iterator<Item = CombatantId> + 'a {
        self.combatants
            .iter()
            .filter(|c| host.is_alive(c.instance))
            .map(|c| c.id)
    }

    pub fn alive_count<H: CombatantHost>(&self, host: &H) -> usize {
        self.alive_ids(host).count()
    }

    /// First alive combatant in roster order — the round winner when a
    /// round ends with survivors, None on a draw.
    pub fn first_alive<H: CombatantHost>(&self, host: &H) -> Option<CombatantId> {
        self.alive_ids(host).next()
    }

    /// Whether any human-controlled combatant is still alive.
    pub fn any_human_alive<H: CombatantHost>(&self, host: &H) -> bool {
        self.combatants
            .iter()
            .any(|c| c.controller.is_human() && host.is_alive(c.instance))
    }

    /// First combatant with `wins >= threshold`, or None. With wins
    /// incremented one round at a time there is at most one.
    pub fn winner(&self, threshold: u32) -> Option<CombatantId> {
        self.combatants
            .iter()
            .find(|c| c.wins >= threshold)
            .map(|c| c.id)
    }

    /// Restore every combatant to spawn state for a new round.
    /// Win counters are untouched.
    pub fn reset_for_new_round<H: CombatantHost>(&self, host: &mut H) {
        for combatant in &self.combatants {
            host.reset_to_spawn(combatant.instance);
        }
    }

    /// Enable or disable control for every combatant.
    pub fn set_all_control<H: CombatantHost>(&self, host: &mut H, enabled: bool) {
        for combatant in &self.combatants {
            host.set_control_enabled(combatant.instance, enabled);
        }
    }

    /// Presentation views, in roster order.
    pub fn views<H: CombatantHost>(&self, host: &H) -> Vec<CombatantView> {
        self.combatants
            .iter()
            .map(|c| CombatantView {
                id: c.id,
                label: c.label.clone(),
                controller: c.controller,
                wins: c.wins,
                alive: host.is_alive(c.instance),
            })
            .collect()
    }
}
