//! Game state snapshot: the complete visible state published after each tick.
//!
//! Renderers read it and never write back.

use serde::{Deserialize, Serialize};

use crate::components::EntityId;
use crate::enums::*;
use crate::events::TransitionEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to collaborators after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub fire_direction: FireDirection,
    /// Live entities in registry insertion order.
    pub entities: Vec<EntityView>,
    pub score: ScoreView,
    /// Transition events raised since the previous snapshot.
    pub events: Vec<TransitionEvent>,
}

/// One live entity as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Position,
    /// Hull variant, enemy vessels only.
    pub variant: Option<HullVariant>,
}

/// Score line for the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    /// floor(tick counter / 10).
    pub score: u64,
    /// Persisted best as last loaded from or reconciled with the store.
    pub high_score: u64,
}
