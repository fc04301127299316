//! Presentation bridge — translates engine events into sink calls.
//!
//! The bridge never originates game decisions; it formats messages,
//! toggles panels, and pushes score updates, suppressing writes that
//! would repeat the sink's current state. The sink is chosen at
//! composition time; there is no probing for optional text renderers.

use std::collections::HashMap;

use scrapyard_core::enums::{GameMode, PanelId};
use scrapyard_core::events::MatchEvent;
use scrapyard_core::state::{CombatantView, MatchSnapshot};
use scrapyard_core::types::CombatantId;

/// The externally-owned presentation surface.
pub trait PresentationSink {
    /// Replace the central message text. Empty string clears it.
    fn set_message(&mut self, text: &str);
    /// Set the persistent mode label shown on the HUD.
    fn set_mode_label(&mut self, text: &str);
    fn show_panel(&mut self, panel: PanelId);
    fn hide_panel(&mut self, panel: PanelId);
    fn update_score(&mut self, current: u32, target: u32);
}

/// Stateful adapter between snapshots and a `PresentationSink`.
/// Holds only what is needed to avoid redundant writes.
#[derive(Debug, Default)]
pub struct PresentationBridge {
    last_message: Option<String>,
    last_score: Option<(u32, u32)>,
    panel_visible: HashMap<PanelId, bool>,
}

impl PresentationBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one tick's snapshot to the sink.
    pub fn apply<S: PresentationSink>(&mut self, snapshot: &MatchSnapshot, sink: &mut S) {
        for event in &snapshot.events {
            match event {
                MatchEvent::MatchStarted { mode } => {
                    sink.set_mode_label(mode_label(*mode));
                    self.show(sink, PanelId::Hud);
                }
                MatchEvent::RoundStarted { round } => {
                    self.message(sink, &format!("ROUND {round}"));
                    self.show(sink, PanelId::RoundInfo);
                }
                MatchEvent::RoundPlaying { .. } => {
                    self.message(sink, "");
                    self.hide(sink, PanelId::RoundInfo);
                }
                MatchEvent::RoundEnded {
                    winner,
                    match_winner,
                    ..
                } => {
                    let text = end_message(snapshot, *winner, *match_winner);
                    self.message(sink, &text);
                    self.show(sink, PanelId::RoundInfo);
                }
                MatchEvent::MatchEnded { winner } => {
                    let label = combatant_label(&snapshot.combatants, *winner);
                    self.message(sink, &format!("{label} WINS THE GAME!"));
                    self.hide(sink, PanelId::Hud);
                    self.show(sink, PanelId::MatchEnd);
                }
                MatchEvent::Paused => self.show(sink, PanelId::Pause),
                MatchEvent::Resumed => self.hide(sink, PanelId::Pause),
                MatchEvent::ScoreChanged { current, target } => {
                    self.score(sink, *current, *target);
                }
                // Scene transitions belong to the surrounding host.
                MatchEvent::SceneRequested { .. } => {}
            }
        }
    }

    fn message<S: PresentationSink>(&mut self, sink: &mut S, text: &str) {
        if self.last_message.as_deref() != Some(text) {
            sink.set_message(text);
            self.last_message = Some(text.to_string());
        }
    }

    fn score<S: PresentationSink>(&mut self, sink: &mut S, current: u32, target: u32) {
        if self.last_score != Some((current, target)) {
            sink.update_score(current, target);
            self.last_score = Some((current, target));
        }
    }

    fn show<S: PresentationSink>(&mut self, sink: &mut S, panel: PanelId) {
        if self.panel_visible.insert(panel, true) != Some(true) {
            sink.show_panel(panel);
        }
    }

    fn hide<S: PresentationSink>(&mut self, sink: &mut S, panel: PanelId) {
        if self.panel_visible.insert(panel, false) != Some(false) {
            sink.hide_panel(panel);
        }
    }
}

/// Persistent HUD label for the selected mode.
pub fn mode_label(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Versus => "VERSUS",
        GameMode::SinglePlayerAI => "SINGLE PLAYER",
        GameMode::CoopAI => "CO-OP MULTIPLAYER",
    }
}

fn combatant_label(combatants: &[CombatantView], id: CombatantId) -> &str {
    combatants
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.label.as_str())
        .unwrap_or("UNKNOWN")
}

/// End-of-round message: winner or draw (mission result in AI modes),
/// a standings block, and a match-winner override.
fn end_message(
    snapshot: &MatchSnapshot,
    winner: Option<CombatantId>,
    match_winner: Option<CombatantId>,
) -> String {
    let mut message = match winner {
        Some(id) => format!(
            "{} WINS THE ROUND!",
            combatant_label(&snapshot.combatants, id)
        ),
        None => "DRAW!".to_string(),
    };

    if snapshot.score.target > 0 {
        message = if snapshot.score.reached() {
            format!("MISSION ACCOMPLISHED!\nSCORE: {}", snapshot.score.current)
        } else {
            format!("MISSION FAILED!\nSCORE: {}", snapshot.score.current)
        };
    }

    message.push_str("\n\n\n\n");
    for combatant in &snapshot.combatants {
        message.push_str(&format!("{}: {} WINS\n", combatant.label, combatant.wins));
    }

    if let Some(id) = match_winner {
        message = format!(
            "{} WINS THE GAME!",
            combatant_label(&snapshot.combatants, id)
        );
    }

    message
}
