//! Exhibition driver — a scripted stand-in for the combat layer.
//!
//! Combat itself lives outside the lifecycle core; this driver deals
//! seeded-random damage (and score, in AI modes) so a headless match
//! runs to completion. Same seed, same match.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use scrapyard_core::commands::MatchCommand;
use scrapyard_core::enums::Phase;
use scrapyard_core::state::MatchSnapshot;

pub const DEFAULT_SEED: u64 = 42;

/// Chance per tick that some tank lands a hit.
const HIT_CHANCE: f64 = 0.08;

/// Chance per tick that the players score a point (AI modes).
const SCORE_CHANCE: f64 = 0.05;

pub struct ExhibitionDriver {
    rng: ChaCha8Rng,
}

impl ExhibitionDriver {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Commands to feed to the engine for the coming tick, based on
    /// the previous tick's snapshot.
    pub fn commands_for(&mut self, snapshot: &MatchSnapshot) -> Vec<MatchCommand> {
        if snapshot.phase != Phase::Playing {
            return Vec::new();
        }

        let mut commands = Vec::new();

        if self.rng.gen_bool(HIT_CHANCE) {
            let alive: Vec<_> = snapshot.combatants.iter().filter(|c| c.alive).collect();
            if let Some(victim) = alive.get(self.rng.gen_range(0..alive.len().max(1))) {
                commands.push(MatchCommand::Damage {
                    target: victim.id,
                    amount: self.rng.gen_range(10.0..35.0),
                });
            }
        }

        if snapshot.score.target > 0 && self.rng.gen_bool(SCORE_CHANCE) {
            commands.push(MatchCommand::AddScore { amount: 1 });
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrapyard_core::state::CombatantView;
    use scrapyard_core::types::CombatantId;

    fn playing_snapshot() -> MatchSnapshot {
        MatchSnapshot {
            phase: Phase::Playing,
            round: 1,
            combatants: vec![
                CombatantView {
                    id: CombatantId(0),
                    label: "PLAYER 1".into(),
                    controller: scrapyard_core::enums::Controller::Human { player_number: 1 },
                    wins: 0,
                    alive: true,
                },
                CombatantView {
                    id: CombatantId(1),
                    label: "PLAYER 2".into(),
                    controller: scrapyard_core::enums::Controller::Human { player_number: 2 },
                    wins: 0,
                    alive: true,
                },
            ],
            ..MatchSnapshot::default()
        }
    }

    #[test]
    fn test_driver_is_deterministic_per_seed() {
        let snapshot = playing_snapshot();
        let mut a = ExhibitionDriver::new(7);
        let mut b = ExhibitionDriver::new(7);
        for _ in 0..500 {
            assert_eq!(a.commands_for(&snapshot), b.commands_for(&snapshot));
        }
    }

    #[test]
    fn test_driver_idle_outside_playing() {
        let mut snapshot = playing_snapshot();
        snapshot.phase = Phase::Starting;
        let mut driver = ExhibitionDriver::new(1);
        for _ in 0..100 {
            assert!(driver.commands_for(&snapshot).is_empty());
        }
    }

    #[test]
    fn test_driver_eventually_deals_damage() {
        let snapshot = playing_snapshot();
        let mut driver = ExhibitionDriver::new(3);
        let mut hits = 0;
        for _ in 0..1000 {
            hits += driver
                .commands_for(&snapshot)
                .iter()
                .filter(|c| matches!(c, MatchCommand::Damage { .. }))
                .count();
        }
        assert!(hits > 10, "driver never fought: {hits} hits in 1000 ticks");
    }
}
