//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

/// Phase transition events. The audio collaborator decides what to
/// play or stop; the UI decides what to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransitionEvent {
    /// A fresh session began (from Start or via restart).
    PlayingStarted { high_score: u64 },
    /// A terminal collision ended the session.
    GameOver {
        final_score: u64,
        /// High-score after reconciliation.
        high_score: u64,
        /// Whether `final_score` beat the previously persisted record.
        new_record: bool,
    },
}
