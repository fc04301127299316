//! Match configuration supplied by the host before the first tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{Controller, GameMode, WinCondition};
use crate::error::SetupError;
use crate::types::{DifficultyScaling, SpawnPoint};

/// One combatant slot: where it spawns and who controls it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnSlot {
    pub point: SpawnPoint,
    pub controller: Controller,
}

/// Everything the match engine needs, fixed before the first tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub mode: GameMode,
    /// Round wins required to take the match.
    pub rounds_to_win: u32,
    /// Freeze time at round start (seconds).
    pub start_delay: f64,
    /// Freeze time after a round is decided (seconds).
    pub end_delay: f64,
    /// Score target, used only in AI modes.
    pub target_score: u32,
    /// Whether the accumulated score is zeroed on round start.
    pub reset_score_each_round: bool,
    /// Ordered combatant slots. Slot order is the authoritative
    /// tie-break order for round winner selection.
    pub slots: Vec<SpawnSlot>,
    /// Multipliers applied to every AI-controlled slot.
    pub ai_scaling: DifficultyScaling,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::versus()
    }
}

impl MatchConfig {
    fn base(mode: GameMode, slots: Vec<SpawnSlot>) -> Self {
        Self {
            mode,
            rounds_to_win: DEFAULT_ROUNDS_TO_WIN,
            start_delay: DEFAULT_START_DELAY,
            end_delay: DEFAULT_END_DELAY,
            target_score: DEFAULT_TARGET_SCORE,
            reset_score_each_round: true,
            slots,
            ai_scaling: DifficultyScaling {
                health: AI_HEALTH_MULTIPLIER,
                damage: AI_DAMAGE_MULTIPLIER,
                attack_speed: AI_ATTACK_SPEED_MULTIPLIER,
            },
        }
    }

    /// Two human players facing each other across the arena.
    pub fn versus() -> Self {
        Self::base(
            GameMode::Versus,
            vec![
                SpawnSlot {
                    point: SpawnPoint::new(Vec3::new(-20.0, 0.0, 0.0), 0.0),
                    controller: Controller::Human { player_number: 1 },
                },
                SpawnSlot {
                    point: SpawnPoint::new(Vec3::new(20.0, 0.0, 0.0), std::f32::consts::PI),
                    controller: Controller::Human { player_number: 2 },
                },
            ],
        )
    }

    /// One human player plus `ai_count` AI tanks around the arena edge.
    /// The player-two slot is still present; the spawn coordinator
    /// skips it in this mode.
    pub fn single_player(ai_count: u8) -> Self {
        let mut config = Self::versus();
        config.mode = GameMode::SinglePlayerAI;
        config.slots.extend(Self::ai_slots(ai_count));
        config
    }

    /// Two human players plus `ai_count` AI tanks.
    pub fn coop(ai_count: u8) -> Self {
        let mut config = Self::versus();
        config.mode = GameMode::CoopAI;
        config.slots.extend(Self::ai_slots(ai_count));
        config
    }

    fn ai_slots(count: u8) -> Vec<SpawnSlot> {
        (0..count)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / count.max(1) as f32;
                SpawnSlot {
                    point: SpawnPoint::new(
                        Vec3::new(35.0 * angle.cos(), 0.0, 35.0 * angle.sin()),
                        angle + std::f32::consts::PI,
                    ),
                    controller: Controller::Ai { tag: i + 1 },
                }
            })
            .collect()
    }

    /// Validate the configuration. Called once by the engine before
    /// anything spawns.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.slots.is_empty() {
            return Err(SetupError::NoSpawnPoints);
        }
        if self.rounds_to_win == 0 {
            return Err(SetupError::InvalidRoundsToWin);
        }
        for delay in [self.start_delay, self.end_delay] {
            if !delay.is_finite() || delay < 0.0 {
                return Err(SetupError::InvalidDelay);
            }
        }
        if self.mode.win_condition() == WinCondition::ScoreTarget && self.target_score == 0 {
            return Err(SetupError::ZeroTargetScore);
        }
        Ok(())
    }
}
