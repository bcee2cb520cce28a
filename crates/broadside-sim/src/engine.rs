//! Simulation engine: the single driver of a session.
//!
//! `SimulationEngine` owns the `Session`, the current phase and the score
//! store. It processes queued player commands, runs the current phase's tick
//! and produces a `GameStateSnapshot`. Completely headless, so every test
//! can drive it deterministically.

use std::collections::VecDeque;

use broadside_core::commands::PlayerCommand;
use broadside_core::config::GameConfig;
use broadside_core::enums::{FireDirection, GamePhase};
use broadside_core::events::TransitionEvent;
use broadside_core::state::{GameStateSnapshot, ScoreView};
use broadside_core::types::SimTime;

use crate::persistence::ScoreStore;
use crate::phases::{self, PhaseContext};
use crate::registry::Registry;
use crate::session::Session;
use crate::systems;
use crate::systems::movement::AxisInput;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

pub struct SimulationEngine {
    session: Session,
    phase: GamePhase,
    store: Box<dyn ScoreStore + Send>,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<TransitionEvent>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig, store: Box<dyn ScoreStore + Send>) -> Self {
        let mut session = Session::new(config.game, config.seed);
        session.score.high_score =
            systems::scoring::load_high_score(store.as_ref(), &session.config.high_score_key);
        Self {
            session,
            phase: GamePhase::default(),
            store,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        let next = {
            let mut ctx = PhaseContext {
                session: &mut self.session,
                store: self.store.as_mut(),
                events: &mut self.events,
            };
            phases::handler(self.phase).tick(&mut ctx)
        };
        if let Some(next) = next {
            self.transition(next);
        }

        self.snapshot()
    }

    /// Current state without advancing. Transition events stay queued for
    /// the next `tick`.
    pub fn peek(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.session.registry,
            &self.session.time,
            self.phase,
            self.session.fire.direction(),
            self.session.score.view(),
            self.events.clone(),
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.session.time
    }

    pub fn registry(&self) -> &Registry {
        &self.session.registry
    }

    pub fn fire_direction(&self) -> FireDirection {
        self.session.fire.direction()
    }

    pub fn score(&self) -> ScoreView {
        self.session.score.view()
    }

    /// Raw playing-tick counter behind the displayed score.
    pub fn tick_counter(&self) -> u64 {
        self.session.score.tick_counter
    }

    /// Number of armed timers (spawns and delayed fire).
    pub fn pending_timers(&self) -> usize {
        self.session.queue.len()
    }

    pub fn config(&self) -> &GameConfig {
        &self.session.config
    }

    /// Tear the session down: every armed timer is cancelled, every entity
    /// dropped and the phase returns to Start. Queued commands are discarded.
    pub fn shutdown(&mut self) {
        self.session.teardown();
        self.command_queue.clear();
        self.events.clear();
        self.phase = GamePhase::Start;
        log::info!("Simulation shut down at tick {}", self.session.time.tick);
    }

    #[cfg(test)]
    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        if let PlayerCommand::MoveAxis {
            horizontal,
            vertical,
        } = command
        {
            self.session.axis = AxisInput::new(horizontal, vertical);
            return;
        }

        let next = {
            let mut ctx = PhaseContext {
                session: &mut self.session,
                store: self.store.as_mut(),
                events: &mut self.events,
            };
            phases::handler(self.phase).handle_command(&mut ctx, command)
        };
        if let Some(next) = next {
            self.transition(next);
        }
    }

    fn transition(&mut self, next: GamePhase) {
        log::debug!("Phase {:?} -> {:?}", self.phase, next);
        let mut ctx = PhaseContext {
            session: &mut self.session,
            store: self.store.as_mut(),
            events: &mut self.events,
        };
        phases::handler(self.phase).on_exit(&mut ctx);
        self.phase = next;
        phases::handler(next).on_enter(&mut ctx);
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.session.registry,
            &self.session.time,
            self.phase,
            self.session.fire.direction(),
            self.session.score.view(),
            events,
        )
    }
}
