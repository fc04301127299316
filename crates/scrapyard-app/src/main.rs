//! Headless SCRAPYARD host: runs one exhibition match to completion
//! on a fixed-rate game loop and prints presentation output.
//!
//! Usage: scrapyard-app [versus|single|coop] [seed]

use scrapyard_core::config::MatchConfig;

mod console;
mod exhibition;
mod game_loop;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next().as_deref() {
        None | Some("versus") => MatchConfig::versus(),
        Some("single") => MatchConfig::single_player(3),
        Some("coop") => MatchConfig::coop(4),
        Some(other) => {
            eprintln!("unknown mode '{other}', expected versus|single|coop");
            std::process::exit(2);
        }
    };
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(exhibition::DEFAULT_SEED);

    let (_command_tx, handle) = game_loop::spawn_game_loop(config, seed);
    if handle.join().is_err() {
        eprintln!("game loop thread panicked");
        std::process::exit(1);
    }
}
