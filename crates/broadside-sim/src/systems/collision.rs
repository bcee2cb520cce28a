//! Collision resolution.
//!
//! `resolve` is a pure function of a `CollisionSnapshot`: it returns the
//! destroy/GameOver effects and never touches the registry. `apply` carries
//! them out. Rules run in a fixed order and an entity destroyed by an earlier
//! rule is skipped by every later one.

use std::collections::HashSet;

use glam::DVec2;

use broadside_core::components::{Collider, EntityId};
use broadside_core::enums::EntityKind;

use crate::registry::{Body, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEffect {
    Destroy(EntityId),
    /// Terminal collision. Emitted at most once per resolve.
    GameOver,
}

/// Live bodies grouped by category, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CollisionSnapshot {
    pub vessel: Option<Body>,
    pub player_projectiles: Vec<Body>,
    pub enemy_projectiles: Vec<Body>,
    pub hazards: Vec<Body>,
}

impl CollisionSnapshot {
    pub fn capture(registry: &Registry) -> Self {
        Self {
            vessel: registry.vessel(),
            player_projectiles: registry.bodies(EntityKind::PlayerProjectile),
            enemy_projectiles: registry.bodies(EntityKind::EnemyProjectile),
            hazards: registry.bodies(EntityKind::Hazard),
        }
    }
}

/// Evaluate every category pair against the snapshot.
pub fn resolve(snapshot: &CollisionSnapshot) -> Vec<CollisionEffect> {
    let mut destroyed: HashSet<EntityId> = HashSet::new();
    let mut effects = Vec::new();

    // Player shots against hazards, then against enemy shots.
    for targets in [&snapshot.hazards, &snapshot.enemy_projectiles] {
        for shot in &snapshot.player_projectiles {
            if destroyed.contains(&shot.id) {
                continue;
            }
            let hit = targets
                .iter()
                .find(|t| !destroyed.contains(&t.id) && overlaps(shot, t));
            if let Some(target) = hit {
                destroyed.insert(shot.id);
                destroyed.insert(target.id);
                effects.push(CollisionEffect::Destroy(shot.id));
                effects.push(CollisionEffect::Destroy(target.id));
            }
        }
    }

    let mut game_over = false;
    if let Some(vessel) = &snapshot.vessel {
        for threat in snapshot.hazards.iter().chain(&snapshot.enemy_projectiles) {
            if destroyed.contains(&threat.id) || !overlaps(threat, vessel) {
                continue;
            }
            destroyed.insert(threat.id);
            effects.push(CollisionEffect::Destroy(threat.id));
            game_over = true;
        }
    }
    if game_over {
        effects.push(CollisionEffect::GameOver);
    }
    effects
}

/// Apply resolved effects. Returns true if a terminal collision occurred.
pub fn apply(registry: &mut Registry, effects: &[CollisionEffect]) -> bool {
    let mut game_over = false;
    for effect in effects {
        match *effect {
            CollisionEffect::Destroy(id) => {
                if registry.remove(id) {
                    log::debug!("collision destroyed {id}");
                }
            }
            CollisionEffect::GameOver => game_over = true,
        }
    }
    game_over
}

/// Capture, resolve and apply in one step.
pub fn run(registry: &mut Registry) -> bool {
    let effects = resolve(&CollisionSnapshot::capture(registry));
    apply(registry, &effects)
}

/// Shape overlap test. Touching counts.
pub fn overlaps(a: &Body, b: &Body) -> bool {
    let (pa, pb) = (a.position.as_vec(), b.position.as_vec());
    match (a.collider, b.collider) {
        (Collider::Circle { radius: ra }, Collider::Circle { radius: rb }) => {
            pa.distance_squared(pb) <= (ra + rb) * (ra + rb)
        }
        (
            Collider::Rect {
                half_width: wa,
                half_height: ha,
            },
            Collider::Rect {
                half_width: wb,
                half_height: hb,
            },
        ) => (pa.x - pb.x).abs() <= wa + wb && (pa.y - pb.y).abs() <= ha + hb,
        (
            Collider::Circle { radius },
            Collider::Rect {
                half_width,
                half_height,
            },
        ) => circle_rect(pa, radius, pb, DVec2::new(half_width, half_height)),
        (
            Collider::Rect {
                half_width,
                half_height,
            },
            Collider::Circle { radius },
        ) => circle_rect(pb, radius, pa, DVec2::new(half_width, half_height)),
    }
}

fn circle_rect(center: DVec2, radius: f64, rect_center: DVec2, half: DVec2) -> bool {
    let nearest = center.clamp(rect_center - half, rect_center + half);
    center.distance_squared(nearest) <= radius * radius
}
