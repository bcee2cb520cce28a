//! Simulation engine for BROADSIDE.
//!
//! Owns the entity registry and the scheduled-event queue, runs the phase
//! pipeline at a fixed tick rate, and produces GameStateSnapshots for
//! whatever host is rendering.

pub mod engine;
pub mod persistence;
pub mod phases;
pub mod registry;
pub mod schedule;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use broadside_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use persistence::{JsonFileStore, MemoryStore, ScoreStore, StoreError};
