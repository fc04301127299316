//! Combatant instance host — the seam between the lifecycle engine and
//! whatever owns the in-world tank instances.
//!
//! The engine only ever talks to a `CombatantHost`. `ArenaWorld` is the
//! bundled implementation, a hecs world holding plain-data components;
//! an embedding with its own scene graph supplies its own host instead.

use glam::Vec3;
use hecs::World;

use scrapyard_core::constants::STARTING_HULL;
use scrapyard_core::types::{DifficultyScaling, InstanceId, SpawnPoint};

/// Call-level contract for in-world combatant instances.
pub trait CombatantHost {
    /// Create a combatant instance at a spawn point. Instances start
    /// at full hull with control disabled.
    fn spawn(&mut self, point: &SpawnPoint) -> InstanceId;

    /// Whether the instance is still in the fight. Derived from the
    /// instance itself, never cached by callers.
    fn is_alive(&self, id: InstanceId) -> bool;

    /// Apply AI difficulty multipliers. Hull is rescaled immediately;
    /// damage/attack-speed multipliers are stored for the combat layer
    /// to read.
    fn apply_difficulty(&mut self, id: InstanceId, scaling: DifficultyScaling);

    /// Restore the instance to its spawn transform at full hull.
    fn reset_to_spawn(&mut self, id: InstanceId);

    /// Enable or disable player/AI control of the instance.
    fn set_control_enabled(&mut self, id: InstanceId, enabled: bool);

    /// Report damage from the external combat layer. Hull is clamped
    /// at zero; a zero-hull instance is dead.
    fn apply_damage(&mut self, id: InstanceId, amount: f32);
}

/// Hull points. Zero hull = dead.
#[derive(Debug, Clone, Copy)]
pub struct Hull {
    pub health: f32,
    pub max_health: f32,
}

/// Whether the instance currently accepts control input.
#[derive(Debug, Clone, Copy)]
pub struct ControlState {
    pub enabled: bool,
}

/// The spawn transform this instance returns to on round reset.
#[derive(Debug, Clone, Copy)]
pub struct SpawnAnchor {
    pub point: SpawnPoint,
}

/// Current world transform.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub position: Vec3,
    pub yaw: f32,
}

/// Difficulty multipliers attached to scaled (AI) instances, read by
/// the external combat layer when resolving shots.
#[derive(Debug, Clone, Copy)]
pub struct Scaling(pub DifficultyScaling);

/// hecs-backed combatant world: the one required `CombatantHost`
/// implementation.
#[derive(Default)]
pub struct ArenaWorld {
    world: World,
    instances: Vec<hecs::Entity>,
}

impl ArenaWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of instances ever spawned (instances are never removed
    /// mid-match; the whole world is dropped at teardown).
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    fn entity(&self, id: InstanceId) -> Option<hecs::Entity> {
        self.instances.get(id.0 as usize).copied()
    }

    /// Current hull, if the instance exists.
    pub fn hull(&self, id: InstanceId) -> Option<Hull> {
        let entity = self.entity(id)?;
        self.world.get::<&Hull>(entity).ok().map(|h| *h)
    }

    /// Whether control is currently enabled for the instance.
    pub fn control_enabled(&self, id: InstanceId) -> bool {
        self.entity(id)
            .and_then(|e| self.world.get::<&ControlState>(e).ok().map(|c| c.enabled))
            .unwrap_or(false)
    }

    /// Stored difficulty multipliers, if this instance was scaled.
    pub fn scaling(&self, id: InstanceId) -> Option<DifficultyScaling> {
        let entity = self.entity(id)?;
        self.world.get::<&Scaling>(entity).ok().map(|s| s.0)
    }

    /// Current transform, for collaborators that place cameras or
    /// effects around combatants.
    pub fn transform(&self, id: InstanceId) -> Option<Transform> {
        let entity = self.entity(id)?;
        self.world.get::<&Transform>(entity).ok().map(|t| *t)
    }
}

impl CombatantHost for ArenaWorld {
    fn spawn(&mut self, point: &SpawnPoint) -> InstanceId {
        let entity = self.world.spawn((
            Hull {
                health: STARTING_HULL,
                max_health: STARTING_HULL,
            },
            ControlState { enabled: false },
            SpawnAnchor { point: *point },
            Transform {
                position: point.position,
                yaw: point.yaw,
            },
        ));
        let id = InstanceId(self.instances.len() as u32);
        self.instances.push(entity);
        id
    }

    fn is_alive(&self, id: InstanceId) -> bool {
        self.hull(id).map(|h| h.health > 0.0).unwrap_or(false)
    }

    fn apply_difficulty(&mut self, id: InstanceId, scaling: DifficultyScaling) {
        let Some(entity) = self.entity(id) else {
            return;
        };
        if let Ok(mut hull) = self.world.get::<&mut Hull>(entity) {
            hull.max_health *= scaling.health;
            hull.health = hull.max_health;
        }
        let _ = self.world.insert_one(entity, Scaling(scaling));
    }

    fn reset_to_spawn(&mut self, id: InstanceId) {
        let Some(entity) = self.entity(id) else {
            return;
        };
        let anchor = match self.world.get::<&SpawnAnchor>(entity) {
            Ok(anchor) => anchor.point,
            Err(_) => return,
        };
        if let Ok(mut transform) = self.world.get::<&mut Transform>(entity) {
            transform.position = anchor.position;
            transform.yaw = anchor.yaw;
        }
        if let Ok(mut hull) = self.world.get::<&mut Hull>(entity) {
            hull.health = hull.max_health;
        }
    }

    fn set_control_enabled(&mut self, id: InstanceId, enabled: bool) {
        let Some(entity) = self.entity(id) else {
            return;
        };
        if let Ok(mut control) = self.world.get::<&mut ControlState>(entity) {
            control.enabled = enabled;
        }
    }

    fn apply_damage(&mut self, id: InstanceId, amount: f32) {
        let Some(entity) = self.entity(id) else {
            return;
        };
        if let Ok(mut hull) = self.world.get::<&mut Hull>(entity) {
            hull.health = (hull.health - amount).max(0.0);
        }
    }
}
