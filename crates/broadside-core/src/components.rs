//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Stable registry identity. Allocated monotonically, never reused, so
/// ordering by id is insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Bounding shape used for overlap tests, centered on the entity position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collider {
    Circle { radius: f64 },
    Rect { half_width: f64, half_height: f64 },
}

/// Enemy vessel state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyState {
    /// Set once the delayed shot has been taken.
    pub has_fired: bool,
    pub side: SpawnSide,
    pub variant: HullVariant,
}

// Position and Velocity from types.rs are used as components too.
