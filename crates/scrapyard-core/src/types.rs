//! Fundamental identifier and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Index of a combatant in the match roster. Assigned at registration,
/// stable for the duration of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub u32);

/// Handle to an in-world combatant instance owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

/// A fixed spawn transform in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub position: Vec3,
    /// Facing in radians around the up axis.
    pub yaw: f32,
}

impl SpawnPoint {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }

    /// A spawn point is usable when its transform contains no NaN/inf
    /// left behind by bad authoring data.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.yaw.is_finite()
    }
}

/// Difficulty multipliers applied to AI-controlled combatants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyScaling {
    pub health: f32,
    pub damage: f32,
    pub attack_speed: f32,
}

impl Default for DifficultyScaling {
    fn default() -> Self {
        Self {
            health: 1.0,
            damage: 1.0,
            attack_speed: 1.0,
        }
    }
}

/// Simulation time tracking. Frozen while the match is paused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Ticks the machine has actually advanced (paused ticks excluded).
    pub tick: u64,
    /// Elapsed unpaused time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
