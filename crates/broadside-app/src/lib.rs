//! BROADSIDE headless host.
//!
//! Runs the simulation on a game loop thread, feeds it commands read as
//! JSON lines and publishes a JSON snapshot per tick.

pub mod game_loop;
pub mod input;
pub mod state;

pub use broadside_core as core;
