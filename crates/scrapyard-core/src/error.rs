//! Configuration errors surfaced once at match setup.
//!
//! Nothing in the lifecycle core fails per tick: bad authoring data is
//! rejected (or logged and skipped) before the first tick runs.

use thiserror::Error;

/// A problem with the match configuration, reported from
/// `MatchEngine::new` before any ticking starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The configuration names no spawn slots at all.
    #[error("no spawn slots configured")]
    NoSpawnPoints,

    /// Every spawn slot was skipped or invalid; a match needs at least
    /// one combatant.
    #[error("no combatants could be spawned from the configured slots")]
    NoCombatants,

    /// A round delay is negative or not finite.
    #[error("round delays must be finite, non-negative seconds")]
    InvalidDelay,

    /// The win threshold must be at least one round.
    #[error("rounds to win must be at least 1")]
    InvalidRoundsToWin,

    /// Score-target modes need a non-zero target.
    #[error("target score must be at least 1 in score-target modes")]
    ZeroTargetScore,

    /// Registration attempted after the roster was locked at match
    /// start. Late joins are unsupported; configure every combatant
    /// as a spawn slot instead.
    #[error("roster is locked once the match has started")]
    RosterLocked,
}
