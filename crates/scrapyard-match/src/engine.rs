//! Match engine — the round/match lifecycle state machine.
//!
//! `MatchEngine` owns the phase, the roster, the score, and the
//! combatant host. The surrounding loop calls `tick(dt)` once per
//! frame; commands arrive through `queue_command` and drain at the
//! next tick boundary. Round-boundary waits are explicit countdown
//! timers checked each tick, never suspended control flow.

use std::collections::VecDeque;

use log::{debug, info, warn};

use scrapyard_core::commands::MatchCommand;
use scrapyard_core::config::MatchConfig;
use scrapyard_core::enums::{Phase, SceneRequest, WinCondition};
use scrapyard_core::error::SetupError;
use scrapyard_core::events::MatchEvent;
use scrapyard_core::state::{MatchSnapshot, RoundOutcome};
use scrapyard_core::types::{CombatantId, SimTime};

use crate::host::CombatantHost;
use crate::roster::Roster;
use crate::score::ScoreTracker;
use crate::spawn;

/// The lifecycle state machine. Owns all match state; the only mutator
/// of the roster and (via the host trait) of combatant instances once
/// spawning has completed.
pub struct MatchEngine<H: CombatantHost> {
    config: MatchConfig,
    host: H,
    roster: Roster,
    score: ScoreTracker,
    phase: Phase,
    /// Phase to restore on resume. Only meaningful while Paused.
    resume_phase: Phase,
    round: u32,
    /// Seconds remaining in the current Starting/RoundEnding freeze.
    phase_timer: f64,
    time: SimTime,
    outcome: RoundOutcome,
    command_queue: VecDeque<MatchCommand>,
    events: Vec<MatchEvent>,
}

impl<H: CombatantHost> MatchEngine<H> {
    /// Validate the config, spawn every combatant, lock the roster,
    /// and enter the first round's Starting phase.
    pub fn new(config: MatchConfig, mut host: H) -> Result<Self, SetupError> {
        config.validate()?;

        let mut roster = Roster::new();
        spawn::spawn_all(&config, &mut host, &mut roster)?;
        roster.lock();

        let score = ScoreTracker::new(if config.mode.is_ai_mode() {
            config.target_score
        } else {
            0
        });

        let mut engine = Self {
            host,
            roster,
            score,
            phase: Phase::Starting,
            resume_phase: Phase::Starting,
            round: 0,
            phase_timer: 0.0,
            time: SimTime::default(),
            outcome: RoundOutcome::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            config,
        };
        engine.events.push(MatchEvent::MatchStarted {
            mode: engine.config.mode,
        });
        engine.enter_starting();
        Ok(engine)
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: MatchCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = MatchCommand>) {
        self.command_queue.extend(commands);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Read-only access to the combatant host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Read-only access to the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Advance the lifecycle by one tick of `dt` elapsed seconds and
    /// return the resulting snapshot. While Paused, and once
    /// MatchEnding is reached, no timers or evaluation advance;
    /// commands are still drained so Resume works.
    pub fn tick(&mut self, dt: f64) -> MatchSnapshot {
        self.process_commands();

        match self.phase {
            Phase::Starting => {
                self.phase_timer -= dt;
                if self.phase_timer <= 0.0 {
                    self.enter_playing();
                }
            }
            Phase::Playing => {
                if self.round_over() {
                    self.enter_round_ending();
                }
            }
            Phase::RoundEnding => {
                self.phase_timer -= dt;
                if self.phase_timer <= 0.0 {
                    match self.outcome.match_winner {
                        Some(winner) => self.enter_match_ending(winner),
                        None => self.enter_starting(),
                    }
                }
            }
            // Suspended or terminal: nothing advances.
            Phase::Paused | Phase::MatchEnding => {}
        }

        if !matches!(self.phase, Phase::Paused | Phase::MatchEnding) {
            self.time.advance(dt);
        }

        self.build_snapshot()
    }

    /// Whether the current round is over, evaluated every Playing
    /// tick. An empty or fully-dead roster resolves as an immediate
    /// draw rather than waiting forever.
    fn round_over(&self) -> bool {
        match self.config.mode.win_condition() {
            WinCondition::LastAlive => self.roster.alive_count(&self.host) <= 1,
            WinCondition::ScoreTarget => {
                !self.roster.any_human_alive(&self.host) || self.score.reached()
            }
        }
    }

    fn enter_starting(&mut self) {
        self.round += 1;
        self.roster.reset_for_new_round(&mut self.host);
        self.roster.set_all_control(&mut self.host, false);
        if self.config.reset_score_each_round && self.score.current() != 0 {
            self.score.reset();
            self.events.push(MatchEvent::ScoreChanged {
                current: self.score.current(),
                target: self.score.target(),
            });
        }
        self.phase = Phase::Starting;
        self.phase_timer = self.config.start_delay;
        self.events.push(MatchEvent::RoundStarted { round: self.round });
        info!("round {} starting", self.round);
    }

    fn enter_playing(&mut self) {
        self.roster.set_all_control(&mut self.host, true);
        self.phase = Phase::Playing;
        self.events.push(MatchEvent::RoundPlaying { round: self.round });
        debug!("round {} playing", self.round);
    }

    fn enter_round_ending(&mut self) {
        self.roster.set_all_control(&mut self.host, false);

        // Roster order is the authoritative tie-break: the first
        // registered survivor wins; no survivors is a draw.
        let round_winner = self.roster.first_alive(&self.host);
        if let Some(id) = round_winner {
            if let Some(combatant) = self.roster.get_mut(id) {
                combatant.wins += 1;
            }
        }
        let match_winner = self.roster.winner(self.config.rounds_to_win);
        debug_assert!(
            self.outcome.match_winner.is_none(),
            "re-entered RoundEnding after a match winner was set"
        );
        self.outcome = RoundOutcome {
            round_winner,
            match_winner,
        };

        self.phase = Phase::RoundEnding;
        self.phase_timer = self.config.end_delay;
        self.events.push(MatchEvent::RoundEnded {
            round: self.round,
            winner: round_winner,
            match_winner,
        });
        info!(
            "round {} ended, winner {:?}, match winner {:?}",
            self.round, round_winner, match_winner
        );
    }

    fn enter_match_ending(&mut self, winner: CombatantId) {
        self.phase = Phase::MatchEnding;
        self.events.push(MatchEvent::MatchEnded { winner });
        self.events.push(MatchEvent::SceneRequested {
            request: SceneRequest::Reload,
        });
        info!("match ended, winner {:?}", winner);
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: MatchCommand) {
        match command {
            MatchCommand::Pause => {
                // Pause only overlays Starting or Playing; pausing
                // while already paused leaves the remembered phase
                // untouched.
                if matches!(self.phase, Phase::Starting | Phase::Playing) {
                    self.resume_phase = self.phase;
                    self.phase = Phase::Paused;
                    self.roster.set_all_control(&mut self.host, false);
                    self.events.push(MatchEvent::Paused);
                }
            }
            MatchCommand::Resume => {
                if self.phase == Phase::Paused {
                    self.phase = self.resume_phase;
                    // Control returns only when play was interrupted;
                    // a restored start freeze stays frozen.
                    if self.phase == Phase::Playing {
                        self.roster.set_all_control(&mut self.host, true);
                    }
                    self.events.push(MatchEvent::Resumed);
                }
            }
            MatchCommand::AddScore { amount } => {
                self.score.add(amount);
                self.events.push(MatchEvent::ScoreChanged {
                    current: self.score.current(),
                    target: self.score.target(),
                });
            }
            MatchCommand::Damage { target, amount } => match self.roster.get(target) {
                Some(combatant) => self.host.apply_damage(combatant.instance, amount),
                None => warn!("damage reported for unknown combatant {target:?}"),
            },
        }
    }

    fn build_snapshot(&mut self) -> MatchSnapshot {
        MatchSnapshot {
            time: self.time,
            phase: self.phase,
            round: self.round,
            combatants: self.roster.views(&self.host),
            score: self.score.view(),
            outcome: self.outcome,
            events: std::mem::take(&mut self.events),
        }
    }
}
