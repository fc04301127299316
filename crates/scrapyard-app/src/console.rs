//! Console presentation sink — the terminal stands in for the HUD.

use log::info;

use scrapyard_core::enums::PanelId;
use scrapyard_match::presentation::PresentationSink;

/// Prints presentation writes to the terminal via the logger.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl PresentationSink for ConsoleSink {
    fn set_message(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        for line in text.lines().filter(|l| !l.is_empty()) {
            info!(">> {line}");
        }
    }

    fn set_mode_label(&mut self, text: &str) {
        info!("mode: {text}");
    }

    fn show_panel(&mut self, panel: PanelId) {
        info!("panel {panel:?} shown");
    }

    fn hide_panel(&mut self, panel: PanelId) {
        info!("panel {panel:?} hidden");
    }

    fn update_score(&mut self, current: u32, target: u32) {
        info!("score {current}/{target}");
    }
}
