//! Scoring: the per-session tick counter and the persisted high-score.

use broadside_core::constants::SCORE_TICKS_PER_POINT;
use broadside_core::state::ScoreView;

use crate::persistence::ScoreStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    /// Playing ticks survived this session.
    pub tick_counter: u64,
    /// Best score known to the session (loaded at start, raised at game over).
    pub high_score: u64,
}

impl ScoreState {
    /// Fresh session: counter back to zero, high-score as persisted.
    pub fn reset(&mut self, high_score: u64) {
        self.tick_counter = 0;
        self.high_score = high_score;
    }

    pub fn advance(&mut self) {
        self.tick_counter += 1;
    }

    /// floor(counter / 10).
    pub fn displayed(&self) -> u64 {
        self.tick_counter / SCORE_TICKS_PER_POINT
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.displayed(),
            high_score: self.high_score,
        }
    }
}

/// Result of reconciling a final score against the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreOutcome {
    pub final_score: u64,
    pub previous: u64,
    pub high_score: u64,
    pub new_record: bool,
}

/// Stored high-score, 0 when absent.
pub fn load_high_score(store: &dyn ScoreStore, key: &str) -> u64 {
    store.get(key).unwrap_or(0)
}

/// Compare `final_score` with the stored record and write it if it is
/// strictly higher. A failed write is logged; the outcome still reports
/// the new record.
pub fn reconcile_high_score(
    store: &mut dyn ScoreStore,
    key: &str,
    final_score: u64,
) -> HighScoreOutcome {
    let previous = load_high_score(store, key);
    let new_record = final_score > previous;
    if new_record {
        match store.set(key, final_score) {
            Ok(()) => log::info!("New high score {final_score} (was {previous})"),
            Err(e) => log::warn!("High score {final_score} not saved: {e}"),
        }
    }
    HighScoreOutcome {
        final_score,
        previous,
        high_score: previous.max(final_score),
        new_record,
    }
}
