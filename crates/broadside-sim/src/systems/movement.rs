//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Only the vessel is driven by input and clamped to the play-field.

use broadside_core::components::Collider;
use broadside_core::config::{FieldConfig, VesselConfig};
use broadside_core::constants::DT;
use broadside_core::types::{Position, Velocity};

use crate::registry::Registry;

/// Held movement axes, each in {-1, 0, 1}.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisInput {
    pub horizontal: i8,
    pub vertical: i8,
}

impl AxisInput {
    /// Out-of-range values collapse to their sign.
    pub fn new(horizontal: i8, vertical: i8) -> Self {
        Self {
            horizontal: horizontal.signum(),
            vertical: vertical.signum(),
        }
    }
}

/// Set the vessel's velocity from the held axes. Zero when nothing is held.
pub fn steer_vessel(registry: &mut Registry, axis: AxisInput, vessel: &VesselConfig) {
    let Some(body) = registry.vessel() else {
        return;
    };
    let velocity = Velocity::new(
        f64::from(axis.horizontal) * vessel.speed,
        f64::from(axis.vertical) * vessel.speed,
    );
    registry.update::<Velocity, _>(body.id, |v| *v = velocity);
}

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(registry: &mut Registry) {
    for (_entity, (pos, vel)) in registry.world_mut().query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }
}

/// Keep the vessel's hit box inside the play-field.
pub fn clamp_vessel(registry: &mut Registry, field: &FieldConfig) {
    let Some(body) = registry.vessel() else {
        return;
    };
    let (half_w, half_h) = match body.collider {
        Collider::Rect {
            half_width,
            half_height,
        } => (half_width, half_height),
        Collider::Circle { radius } => (radius, radius),
    };
    let clamped = Position::new(
        clamp_axis(body.position.x, half_w, field.width),
        clamp_axis(body.position.y, half_h, field.height),
    );
    registry.update::<Position, _>(body.id, |p| *p = clamped);
}

/// Clamp a center coordinate so [c - half, c + half] stays within [0, extent].
/// A box wider than the field is pinned to the middle.
fn clamp_axis(center: f64, half: f64, extent: f64) -> f64 {
    let (lo, hi) = (half, extent - half);
    if lo > hi {
        extent / 2.0
    } else {
        center.clamp(lo, hi)
    }
}
