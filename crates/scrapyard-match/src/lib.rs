//! Match lifecycle engine for the SCRAPYARD arena game.
//!
//! `MatchEngine` owns the round/match state machine, the roster, and
//! the combatant world. Completely headless (no renderer or input
//! dependency), enabling deterministic testing: the host drives it by
//! calling `tick(dt)` and queuing commands.

pub mod engine;
pub mod host;
pub mod presentation;
pub mod roster;
pub mod score;
pub mod spawn;
