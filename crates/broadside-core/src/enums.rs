//! Enumeration types used throughout the simulation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Entity category. Every registry entity carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    /// The player-controlled vessel.
    Vessel,
    /// Projectile fired by the vessel.
    PlayerProjectile,
    /// Projectile fired by an enemy vessel.
    EnemyProjectile,
    /// Drifting bomb, fatal on contact.
    Hazard,
    /// Hostile vessel that fires once after spawning.
    EnemyVessel,
}

impl EntityKind {
    /// Transient entities are dropped by `Registry::clear`.
    pub fn is_transient(self) -> bool {
        !matches!(self, EntityKind::Vessel)
    }
}

/// Cardinal fire direction for the vessel's cannon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FireDirection {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl FireDirection {
    /// Up <-> Down. Any horizontal direction enters `Up`.
    pub fn toggle_vertical(self) -> Self {
        match self {
            FireDirection::Up => FireDirection::Down,
            _ => FireDirection::Up,
        }
    }

    /// Right <-> Left. Any vertical direction enters `Right`.
    pub fn toggle_horizontal(self) -> Self {
        match self {
            FireDirection::Right => FireDirection::Left,
            _ => FireDirection::Right,
        }
    }

    /// Unit vector in screen axes (y grows downward).
    pub fn unit_vector(self) -> DVec2 {
        match self {
            FireDirection::Up => DVec2::NEG_Y,
            FireDirection::Down => DVec2::Y,
            FireDirection::Left => DVec2::NEG_X,
            FireDirection::Right => DVec2::X,
        }
    }
}

/// Play-field edge an enemy vessel enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnSide {
    Left,
    Right,
    Top,
}

/// Cosmetic hull variant for enemy vessels. No behavioral effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HullVariant {
    #[default]
    First,
    Second,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle title state, no session.
    #[default]
    Start,
    /// Full tick pipeline active.
    Playing,
    /// Frozen until restart.
    GameOver,
}
