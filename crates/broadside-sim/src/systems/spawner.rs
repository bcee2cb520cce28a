//! Spawner: fixed-interval hazard and enemy timers, plus delayed enemy fire.

use rand_chacha::ChaCha8Rng;

use broadside_core::components::{EnemyState, EntityId};
use broadside_core::config::GameConfig;
use broadside_core::constants::ms_to_ticks;
use broadside_core::types::Position;

use crate::registry::Registry;
use crate::schedule::{EventQueue, ScheduledEvent};
use crate::world_setup;

/// Arm both spawn timers relative to `now`. The first spawn of each
/// happens one full period later.
pub fn arm(queue: &mut EventQueue, config: &GameConfig, now: u64) {
    queue.schedule(now.saturating_add(hazard_period(config)), ScheduledEvent::SpawnHazard);
    queue.schedule(now.saturating_add(enemy_period(config)), ScheduledEvent::SpawnEnemy);
}

fn hazard_period(config: &GameConfig) -> u64 {
    ms_to_ticks(config.hazard.interval_ms).max(1)
}

fn enemy_period(config: &GameConfig) -> u64 {
    ms_to_ticks(config.enemy.interval_ms).max(1)
}

/// Fire every timer due at `now`.
pub fn run(
    registry: &mut Registry,
    queue: &mut EventQueue,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    now: u64,
) {
    while let Some((due, event)) = queue.pop_due(now) {
        match event {
            ScheduledEvent::SpawnHazard => {
                let id = world_setup::spawn_hazard(registry, rng, config);
                log::debug!("tick {now}: hazard {id} spawned");
                queue.schedule(due.saturating_add(hazard_period(config)), ScheduledEvent::SpawnHazard);
            }
            ScheduledEvent::SpawnEnemy => {
                let id = world_setup::spawn_enemy(registry, rng, config);
                log::debug!("tick {now}: enemy {id} spawned");
                queue.schedule(
                    now.saturating_add(ms_to_ticks(config.enemy.fire_delay_ms)),
                    ScheduledEvent::EnemyFire { enemy: id },
                );
                queue.schedule(due.saturating_add(enemy_period(config)), ScheduledEvent::SpawnEnemy);
            }
            ScheduledEvent::EnemyFire { enemy } => {
                fire_enemy_shot(registry, enemy, config);
            }
        }
    }
}

/// Take the enemy's one shot at the vessel's current position.
/// Dropped silently if the enemy or vessel is gone, or it already fired.
pub fn fire_enemy_shot(
    registry: &mut Registry,
    enemy: EntityId,
    config: &GameConfig,
) -> Option<EntityId> {
    let Some(state) = registry.get::<EnemyState>(enemy) else {
        log::debug!("enemy {enemy} gone before firing, shot dropped");
        return None;
    };
    if state.has_fired {
        return None;
    }
    let origin = registry.get::<Position>(enemy)?;
    let target = registry.vessel()?.position;

    registry.update::<EnemyState, _>(enemy, |s| s.has_fired = true);
    let shot = world_setup::spawn_enemy_projectile(registry, origin, target, config);
    log::debug!("enemy {enemy} fired {shot}");
    Some(shot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadside_core::enums::EntityKind;
    use rand::SeedableRng;

    fn setup() -> (Registry, EventQueue, ChaCha8Rng, GameConfig) {
        let config = GameConfig::default();
        let mut registry = Registry::new();
        world_setup::reset_vessel(&mut registry, &config);
        (registry, EventQueue::new(), ChaCha8Rng::seed_from_u64(7), config)
    }

    #[test]
    fn hazards_spawn_every_period() {
        let (mut registry, mut queue, mut rng, config) = setup();
        arm(&mut queue, &config, 0);

        for tick in 0..=360 {
            run(&mut registry, &mut queue, &mut rng, &config, tick);
        }
        // 2000 ms at 60 Hz = 120 ticks: spawns at 120, 240, 360.
        assert_eq!(registry.count(EntityKind::Hazard), 3);
        // 4000 ms = 240 ticks: one enemy at 240.
        assert_eq!(registry.count(EntityKind::EnemyVessel), 1);
    }

    #[test]
    fn hazard_spawns_on_right_edge_in_band() {
        let (mut registry, _, mut rng, config) = setup();
        for _ in 0..50 {
            world_setup::spawn_hazard(&mut registry, &mut rng, &config);
        }
        registry.for_each(EntityKind::Hazard, |h| {
            assert_eq!(h.position.x, config.field.width);
            assert!(h.position.y >= config.hazard.band.min);
            assert!(h.position.y <= config.hazard.band.max);
            assert_eq!(h.velocity.x, -config.hazard.speed);
            assert_eq!(h.velocity.y, 0.0);
        });
    }

    #[test]
    fn enemies_head_inward_from_their_side() {
        let (mut registry, _, mut rng, config) = setup();
        for _ in 0..60 {
            world_setup::spawn_enemy(&mut registry, &mut rng, &config);
        }
        let mut sides = Vec::new();
        registry.for_each(EntityKind::EnemyVessel, |e| {
            let state = registry.get::<EnemyState>(e.id).unwrap();
            assert!(!state.has_fired);
            match state.side {
                broadside_core::enums::SpawnSide::Left => {
                    assert!(e.position.x < 0.0);
                    assert!(e.velocity.x > 0.0);
                }
                broadside_core::enums::SpawnSide::Right => {
                    assert!(e.position.x > config.field.width);
                    assert!(e.velocity.x < 0.0);
                }
                broadside_core::enums::SpawnSide::Top => {
                    assert!(e.position.y < 0.0);
                    assert!(e.velocity.y > 0.0);
                }
            }
            sides.push(state.side);
        });
        assert!(sides.contains(&broadside_core::enums::SpawnSide::Left));
        assert!(sides.contains(&broadside_core::enums::SpawnSide::Right));
        assert!(sides.contains(&broadside_core::enums::SpawnSide::Top));
    }

    #[test]
    fn enemy_fire_scheduled_one_second_after_spawn() {
        let (mut registry, mut queue, mut rng, config) = setup();
        queue.schedule(10, ScheduledEvent::SpawnEnemy);
        run(&mut registry, &mut queue, &mut rng, &config, 10);

        let enemy = registry.bodies(EntityKind::EnemyVessel)[0].id;
        assert_eq!(
            queue.due_tick_of(ScheduledEvent::EnemyFire { enemy }),
            Some(10 + 60)
        );
    }

    #[test]
    fn enemy_shot_aims_at_vessel_at_fire_time() {
        let (mut registry, _, mut rng, config) = setup();
        let enemy = world_setup::spawn_enemy(&mut registry, &mut rng, &config);
        registry.update::<Position, _>(enemy, |p| *p = Position::new(400.0, 100.0));

        // Vessel moves after the enemy spawned.
        let vessel = registry.vessel().unwrap().id;
        registry.update::<Position, _>(vessel, |p| *p = Position::new(400.0, 500.0));

        let shot = fire_enemy_shot(&mut registry, enemy, &config).unwrap();
        let body = registry.body(shot).unwrap();
        assert_eq!(body.kind, EntityKind::EnemyProjectile);
        assert_eq!(body.position, Position::new(400.0, 100.0));
        assert!(body.velocity.x.abs() < 1e-9);
        assert!((body.velocity.y - config.projectile.enemy_speed).abs() < 1e-9);
        assert!(registry.get::<EnemyState>(enemy).unwrap().has_fired);
    }

    #[test]
    fn enemy_fires_at_most_once() {
        let (mut registry, _, mut rng, config) = setup();
        let enemy = world_setup::spawn_enemy(&mut registry, &mut rng, &config);
        assert!(fire_enemy_shot(&mut registry, enemy, &config).is_some());
        assert!(fire_enemy_shot(&mut registry, enemy, &config).is_none());
        assert_eq!(registry.count(EntityKind::EnemyProjectile), 1);
    }

    #[test]
    fn removed_enemy_never_fires() {
        let (mut registry, mut queue, mut rng, config) = setup();
        queue.schedule(0, ScheduledEvent::SpawnEnemy);
        run(&mut registry, &mut queue, &mut rng, &config, 0);
        let enemy = registry.bodies(EntityKind::EnemyVessel)[0].id;

        registry.remove(enemy);
        for tick in 1..=120 {
            run(&mut registry, &mut queue, &mut rng, &config, tick);
        }
        assert_eq!(registry.count(EntityKind::EnemyProjectile), 0);
        assert_eq!(queue.due_tick_of(ScheduledEvent::EnemyFire { enemy }), None);
    }

    #[test]
    fn huge_timers_saturate() {
        let (mut registry, mut queue, mut rng, mut config) = setup();
        config.hazard.interval_ms = u64::MAX;
        config.enemy.interval_ms = u64::MAX;
        config.enemy.fire_delay_ms = u64::MAX;
        arm(&mut queue, &config, 5);
        assert_eq!(queue.due_tick_of(ScheduledEvent::SpawnHazard), Some(u64::MAX / 1000 + 1 + 5));

        let mut queue = EventQueue::new();
        queue.schedule(u64::MAX - 1, ScheduledEvent::SpawnEnemy);
        run(&mut registry, &mut queue, &mut rng, &config, u64::MAX - 1);
        let enemy = registry.bodies(EntityKind::EnemyVessel)[0].id;
        assert_eq!(queue.due_tick_of(ScheduledEvent::EnemyFire { enemy }), Some(u64::MAX));
        assert_eq!(queue.due_tick_of(ScheduledEvent::SpawnEnemy), Some(u64::MAX));
    }
}
