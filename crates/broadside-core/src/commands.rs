//! Player commands sent from the input collaborator to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Edge
//! triggering and debouncing are the input collaborator's job.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Held movement axes, each in {-1, 0, 1}. Level-triggered: the latest
    /// value stays in effect until the next `MoveAxis`.
    MoveAxis { horizontal: i8, vertical: i8 },
    /// Fire one projectile in the current fire direction.
    Fire,
    /// Flip fire direction between up and down.
    ToggleVertical,
    /// Flip fire direction between left and right.
    ToggleHorizontal,
    /// Begin the first session from the title state.
    Start,
    /// Begin a fresh session after game over.
    Restart,
}
