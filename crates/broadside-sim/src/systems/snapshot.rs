//! Snapshot system: builds the GameStateSnapshot renderers observe.
//!
//! Read-only; never modifies the registry.

use broadside_core::enums::*;
use broadside_core::events::TransitionEvent;
use broadside_core::state::*;
use broadside_core::types::SimTime;

use crate::registry::Registry;

pub fn build_snapshot(
    registry: &Registry,
    time: &SimTime,
    phase: GamePhase,
    fire_direction: FireDirection,
    score: ScoreView,
    events: Vec<TransitionEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        fire_direction,
        entities: build_entities(registry),
        score,
        events,
    }
}

fn build_entities(registry: &Registry) -> Vec<EntityView> {
    registry
        .entries()
        .into_iter()
        .map(|(id, kind, position, enemy)| EntityView {
            id,
            kind,
            position,
            variant: enemy.map(|e| e.variant),
        })
        .collect()
}
