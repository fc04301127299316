//! Game loop thread — drives the match engine at the fixed tick rate.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. External commands arrive via `mpsc`; the exhibition
//! driver supplies combat, and the presentation bridge renders each
//! snapshot to the console sink. The loop ends when the engine asks
//! for a scene transition at match end.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::info;

use scrapyard_core::commands::MatchCommand;
use scrapyard_core::config::MatchConfig;
use scrapyard_core::constants::{DT, TICK_RATE};
use scrapyard_core::events::MatchEvent;
use scrapyard_match::engine::MatchEngine;
use scrapyard_match::host::ArenaWorld;
use scrapyard_match::presentation::PresentationBridge;

use crate::console::ConsoleSink;
use crate::exhibition::ExhibitionDriver;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from outside into the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Forward a match command to the engine.
    Match(MatchCommand),
    /// Shut down the loop before the match finishes.
    Shutdown,
}

/// Spawn the game loop in a new thread. Returns the command sender
/// and the join handle.
pub fn spawn_game_loop(
    config: MatchConfig,
    seed: u64,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("scrapyard-game-loop".into())
        .spawn(move || run_game_loop(config, seed, cmd_rx))
        .expect("failed to spawn game loop thread");

    (cmd_tx, handle)
}

fn run_game_loop(config: MatchConfig, seed: u64, cmd_rx: mpsc::Receiver<GameLoopCommand>) {
    let engine = MatchEngine::new(config, ArenaWorld::new());
    let mut engine = match engine {
        Ok(engine) => engine,
        Err(err) => {
            log::error!("match setup failed: {err}");
            return;
        }
    };
    let mut driver = ExhibitionDriver::new(seed);
    let mut bridge = PresentationBridge::new();
    let mut sink = ConsoleSink;
    let mut last_snapshot = None;
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain external commands.
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Match(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    // Main thread is just waiting on the join handle;
                    // keep running the match.
                    break;
                }
            }
        }

        // 2. Scripted combat based on the previous snapshot.
        if let Some(snapshot) = &last_snapshot {
            engine.queue_commands(driver.commands_for(snapshot));
        }

        // 3. Advance one tick and render.
        let snapshot = engine.tick(DT);
        bridge.apply(&snapshot, &mut sink);

        let scene_requested = snapshot
            .events
            .iter()
            .any(|e| matches!(e, MatchEvent::SceneRequested { .. }));
        last_snapshot = Some(snapshot);
        if scene_requested {
            info!("scene transition requested, match over");
            return;
        }

        // 4. Sleep until the next tick boundary.
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }
}
