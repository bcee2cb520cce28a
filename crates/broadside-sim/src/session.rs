//! Session: all mutable state of one simulation run, in one place.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use broadside_core::config::GameConfig;
use broadside_core::types::SimTime;

use crate::registry::Registry;
use crate::schedule::EventQueue;
use crate::systems::fire_control::FireController;
use crate::systems::movement::AxisInput;
use crate::systems::scoring::ScoreState;
use crate::systems::spawner;
use crate::world_setup;

pub struct Session {
    pub registry: Registry,
    pub queue: EventQueue,
    pub fire: FireController,
    pub score: ScoreState,
    /// Last held movement axes. Input state, so it survives phase changes.
    pub axis: AxisInput,
    pub time: SimTime,
    pub rng: ChaCha8Rng,
    pub config: GameConfig,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            registry: Registry::new(),
            queue: EventQueue::new(),
            fire: FireController::new(),
            score: ScoreState::default(),
            axis: AxisInput::default(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
        }
    }

    /// Reinitialize for a fresh Playing session. Start and restart both
    /// go through here.
    pub fn begin(&mut self, high_score: u64) {
        self.registry.clear();
        world_setup::reset_vessel(&mut self.registry, &self.config);
        self.score.reset(high_score);
        self.fire.reset();
        self.time = SimTime::default();
        self.queue.cancel_all();
        spawner::arm(&mut self.queue, &self.config, self.time.tick);
    }

    /// Cancel every timer and drop every entity.
    pub fn teardown(&mut self) {
        self.queue.cancel_all();
        self.registry.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadside_core::enums::{EntityKind, FireDirection};
    use broadside_core::types::{Position, Velocity};
    use broadside_core::components::Collider;

    #[test]
    fn begin_resets_everything_but_input() {
        let mut session = Session::new(GameConfig::default(), 1);
        session.begin(0);
        session.registry.add(
            EntityKind::Hazard,
            Position::new(400.0, 200.0),
            Velocity::new(-200.0, 0.0),
            Collider::Circle { radius: 16.0 },
        );
        session.fire.toggle_vertical();
        session.score.advance();
        session.time.advance();
        session.axis = AxisInput::new(1, 0);

        session.begin(7);

        assert_eq!(session.registry.len(), 1);
        assert_eq!(
            session.registry.vessel().map(|v| v.position),
            Some(session.config.vessel.start)
        );
        assert_eq!(session.fire.direction(), FireDirection::Right);
        assert_eq!(session.score.tick_counter, 0);
        assert_eq!(session.score.high_score, 7);
        assert_eq!(session.time.tick, 0);
        assert_eq!(session.queue.len(), 2);
        assert_eq!(session.axis, AxisInput::new(1, 0));
    }

    #[test]
    fn teardown_leaves_nothing_armed() {
        let mut session = Session::new(GameConfig::default(), 1);
        session.begin(0);
        session.teardown();
        assert!(session.queue.is_empty());
        assert!(session.registry.is_empty());
    }
}
