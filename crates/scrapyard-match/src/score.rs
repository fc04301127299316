//! Running score state for score-target modes.

use scrapyard_core::state::ScoreView;

/// Accumulated score against a target. Monotonically non-decreasing
/// within a round; round-start reset is governed by match config.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreTracker {
    current: u32,
    target: u32,
}

impl ScoreTracker {
    pub fn new(target: u32) -> Self {
        Self { current: 0, target }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn add(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount);
    }

    /// Whether the target has been met. Always false with a zero
    /// target (score not in play).
    pub fn reached(&self) -> bool {
        self.target > 0 && self.current >= self.target
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            current: self.current,
            target: self.target,
        }
    }
}
