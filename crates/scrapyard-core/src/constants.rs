//! Match tuning defaults and tick timing.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Match defaults ---

/// Round wins required to take the match.
pub const DEFAULT_ROUNDS_TO_WIN: u32 = 5;

/// Freeze time at the start of each round (seconds).
pub const DEFAULT_START_DELAY: f64 = 3.0;

/// Freeze time after a round is decided (seconds).
pub const DEFAULT_END_DELAY: f64 = 3.0;

/// Score target for AI modes.
pub const DEFAULT_TARGET_SCORE: u32 = 15;

// --- Combatants ---

/// Hull points a combatant spawns with before scaling.
pub const STARTING_HULL: f32 = 100.0;

/// Default AI hull multiplier.
pub const AI_HEALTH_MULTIPLIER: f32 = 1.5;

/// Default AI damage multiplier.
pub const AI_DAMAGE_MULTIPLIER: f32 = 1.7;

/// Default AI attack speed multiplier.
pub const AI_ATTACK_SPEED_MULTIPLIER: f32 = 1.3;
