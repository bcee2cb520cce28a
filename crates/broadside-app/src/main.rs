//! Headless BROADSIDE host.
//!
//! Usage: `broadside-app [CONFIG.json] [SCORES.json]`
//!
//! Reads JSON `PlayerCommand`s from stdin (one per line), writes one JSON
//! snapshot per tick to stdout. EOF on stdin shuts the simulation down.
//! `BROADSIDE_SEED` fixes the RNG seed; logging follows `RUST_LOG`.

use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use broadside_app::input;
use broadside_app::state::AppState;
use broadside_core::config::GameConfig;
use broadside_core::state::GameStateSnapshot;
use broadside_sim::engine::SimConfig;
use broadside_sim::persistence::JsonFileStore;

const DEFAULT_STORE_PATH: &str = "broadside-scores.json";

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let game = match args.next() {
        Some(path) => GameConfig::load(Path::new(&path))?,
        None => GameConfig::default(),
    };
    let store_path = args.next().unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());
    let seed = seed_from_env()?;
    log::info!("Seed {}, score store {}", seed, store_path);

    let state = AppState::new();
    state.start(
        SimConfig { seed, game },
        Box::new(JsonFileStore::open(store_path)),
        Box::new(|snapshot: &GameStateSnapshot| {
            let mut out = io::stdout().lock();
            let written = serde_json::to_writer(&mut out, snapshot)
                .map_err(io::Error::from)
                .and_then(|()| writeln!(out));
            if let Err(e) = written {
                log::debug!("Snapshot not written: {}", e);
            }
        }),
    )?;

    let forwarded = input::pump_commands(io::stdin().lock(), &state);
    state.shutdown()?;
    log::info!("Forwarded {} commands", forwarded?);
    Ok(())
}

fn seed_from_env() -> Result<u64, String> {
    match std::env::var("BROADSIDE_SEED") {
        Ok(value) => value
            .parse()
            .map_err(|e| format!("Invalid BROADSIDE_SEED {:?}: {}", value, e)),
        Err(_) => Ok(SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)),
    }
}
