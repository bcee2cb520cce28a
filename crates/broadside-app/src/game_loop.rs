//! Game loop thread: runs the simulation engine at the tick rate and
//! publishes snapshots.
//!
//! The engine is created inside this thread so the thread owns it outright.
//! Commands arrive via an `mpsc` channel. Each snapshot is handed to the
//! sink and stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use broadside_core::constants::TICK_RATE;
use broadside_core::state::GameStateSnapshot;
use broadside_sim::engine::{SimConfig, SimulationEngine};
use broadside_sim::persistence::ScoreStore;

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Receives every snapshot the loop produces.
pub type SnapshotSink = Box<dyn FnMut(&GameStateSnapshot) + Send>;

/// Spawn the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    store: Box<dyn ScoreStore + Send>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    sink: SnapshotSink,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), String> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("broadside-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(config, store);
            run_game_loop(engine, cmd_rx, &latest_snapshot, sink);
        })
        .map_err(|e| format!("Failed to spawn game loop thread: {}", e))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown or channel disconnect, then tears
/// the engine down so no armed timer outlives the session.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    mut sink: SnapshotSink,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        let mut stop = false;
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    stop = true;
                    break;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }
        if stop {
            break;
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Publish
        sink(&snapshot);
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }

    engine.shutdown();
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(engine.peek());
    }
    log::info!("Game loop stopped");
}
