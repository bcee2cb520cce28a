//! Entity spawn factories.
//!
//! Creates the vessel, projectiles, hazards and enemy vessels with the
//! component bundles the systems expect.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use broadside_core::components::{Collider, EnemyState, EntityId};
use broadside_core::config::{GameConfig, SpawnBand};
use broadside_core::enums::*;
use broadside_core::types::{Position, Velocity};

use crate::registry::Registry;

/// Replace any existing vessel with a fresh one at the start position.
pub fn reset_vessel(registry: &mut Registry, config: &GameConfig) -> EntityId {
    if let Some(old) = registry.vessel() {
        registry.remove(old.id);
    }
    registry.add(
        EntityKind::Vessel,
        config.vessel.start,
        Velocity::default(),
        Collider::Rect {
            half_width: config.vessel.half_width,
            half_height: config.vessel.half_height,
        },
    )
}

/// Spawn a player projectile at `origin` travelling along `direction`.
pub fn spawn_player_projectile(
    registry: &mut Registry,
    origin: Position,
    direction: FireDirection,
    config: &GameConfig,
) -> EntityId {
    let velocity = Velocity::from(direction.unit_vector() * config.projectile.player_speed);
    registry.add(
        EntityKind::PlayerProjectile,
        origin,
        velocity,
        Collider::Circle {
            radius: config.projectile.radius,
        },
    )
}

/// Spawn an enemy projectile at `origin` aimed at `target`.
pub fn spawn_enemy_projectile(
    registry: &mut Registry,
    origin: Position,
    target: Position,
    config: &GameConfig,
) -> EntityId {
    registry.add(
        EntityKind::EnemyProjectile,
        origin,
        Velocity::toward(&origin, &target, config.projectile.enemy_speed),
        Collider::Circle {
            radius: config.projectile.radius,
        },
    )
}

/// Spawn a hazard on the right edge, drifting left.
pub fn spawn_hazard(registry: &mut Registry, rng: &mut ChaCha8Rng, config: &GameConfig) -> EntityId {
    let y = sample(rng, config.hazard.band);
    registry.add(
        EntityKind::Hazard,
        Position::new(config.field.width, y),
        Velocity::new(-config.hazard.speed, 0.0),
        Collider::Circle {
            radius: config.hazard.radius,
        },
    )
}

/// Spawn an enemy vessel just outside a random edge, heading inward.
pub fn spawn_enemy(registry: &mut Registry, rng: &mut ChaCha8Rng, config: &GameConfig) -> EntityId {
    let enemy = &config.enemy;
    let side = match rng.gen_range(0..3) {
        0 => SpawnSide::Right,
        1 => SpawnSide::Left,
        _ => SpawnSide::Top,
    };
    let variant = if rng.gen_bool(0.5) {
        HullVariant::First
    } else {
        HullVariant::Second
    };

    let (position, velocity) = match side {
        SpawnSide::Right => (
            Position::new(config.field.width + enemy.spawn_margin, sample(rng, enemy.side_band)),
            Velocity::new(-enemy.speed, 0.0),
        ),
        SpawnSide::Left => (
            Position::new(-enemy.spawn_margin, sample(rng, enemy.side_band)),
            Velocity::new(enemy.speed, 0.0),
        ),
        SpawnSide::Top => (
            Position::new(sample(rng, enemy.top_band), -enemy.spawn_margin),
            Velocity::new(0.0, enemy.speed),
        ),
    };

    registry.add_with(
        EntityKind::EnemyVessel,
        position,
        velocity,
        Collider::Rect {
            half_width: enemy.half_width,
            half_height: enemy.half_height,
        },
        (EnemyState {
            has_fired: false,
            side,
            variant,
        },),
    )
}

/// Uniform draw from an inclusive band. A degenerate band yields its min.
fn sample(rng: &mut ChaCha8Rng, band: SpawnBand) -> f64 {
    if band.max > band.min {
        rng.gen_range(band.min..=band.max)
    } else {
        band.min
    }
}
