//! Systems that run over the registry each tick.
//!
//! Systems are free functions over `Registry` plus whatever session state
//! they need passed in. They do not own state.

pub mod collision;
pub mod fire_control;
pub mod movement;
pub mod scoring;
pub mod snapshot;
pub mod spawner;
