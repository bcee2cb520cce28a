//! Application state shared between the input side and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use broadside_core::commands::PlayerCommand;
use broadside_core::state::GameStateSnapshot;
use broadside_sim::engine::SimConfig;
use broadside_sim::persistence::ScoreStore;

use crate::game_loop::{self, SnapshotSink};

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Tear the engine down and stop the thread.
    Shutdown,
}

/// Shared application state.
///
/// Every field sits behind a `Mutex` so the state can be shared by
/// reference with any thread that feeds commands in.
pub struct AppState {
    /// `None` until `start` is called and again after `shutdown`.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.command_tx
            .lock()
            .map(|tx| tx.is_some())
            .unwrap_or(false)
    }

    /// Spawn the game loop thread. Fails if one is already running.
    pub fn start(
        &self,
        config: SimConfig,
        store: Box<dyn ScoreStore + Send>,
        sink: SnapshotSink,
    ) -> Result<(), String> {
        let mut tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;
        if tx_lock.is_some() {
            return Err("Simulation already running".into());
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(config, store, self.latest_snapshot.clone(), sink)?;

        *tx_lock = Some(cmd_tx);
        *self.loop_handle.lock().map_err(|e| e.to_string())? = Some(handle);
        log::info!("Game loop started");
        Ok(())
    }

    /// Forward a player command to the simulation.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), String> {
        let tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;

        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .map_err(|e| format!("Failed to send command: {}", e)),
            None => Err("Simulation not started".into()),
        }
    }

    /// Latest snapshot, if the loop has produced one.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>, String> {
        let lock = self.latest_snapshot.lock().map_err(|e| e.to_string())?;
        Ok(lock.clone())
    }

    /// Send `Shutdown` and wait for the loop thread to exit. A no-op when
    /// nothing is running.
    pub fn shutdown(&self) -> Result<(), String> {
        let tx = self.command_tx.lock().map_err(|e| e.to_string())?.take();
        let Some(tx) = tx else {
            return Ok(());
        };
        // A send error means the loop already exited.
        let _ = tx.send(GameLoopCommand::Shutdown);

        let handle = self.loop_handle.lock().map_err(|e| e.to_string())?.take();
        if let Some(handle) = handle {
            handle
                .join()
                .map_err(|_| "Game loop thread panicked".to_string())?;
        }
        Ok(())
    }
}
