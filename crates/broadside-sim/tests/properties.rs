//! Property tests over arbitrary command streams, driven through the public
//! engine API only.

use proptest::prelude::*;

use broadside_sim::core::commands::PlayerCommand;
use broadside_sim::core::enums::{FireDirection, GamePhase};
use broadside_sim::core::events::TransitionEvent;
use broadside_sim::{MemoryStore, SimConfig, SimulationEngine};

fn command() -> impl Strategy<Value = PlayerCommand> {
    prop_oneof![
        Just(PlayerCommand::Fire),
        Just(PlayerCommand::ToggleVertical),
        Just(PlayerCommand::ToggleHorizontal),
        Just(PlayerCommand::Start),
        Just(PlayerCommand::Restart),
        (-1i8..=1, -1i8..=1).prop_map(|(horizontal, vertical)| PlayerCommand::MoveAxis {
            horizontal,
            vertical,
        }),
    ]
}

/// One step: an optional command, then one tick.
fn script() -> impl Strategy<Value = Vec<Option<PlayerCommand>>> {
    prop::collection::vec(prop::option::weighted(0.2, command()), 1..700)
}

fn engine(seed: u64) -> SimulationEngine {
    SimulationEngine::new(
        SimConfig {
            seed,
            ..Default::default()
        },
        Box::new(MemoryStore::new()),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn displayed_score_follows_counter(seed in any::<u64>(), steps in script()) {
        let mut engine = engine(seed);
        engine.queue_command(PlayerCommand::Start);
        let mut last: Option<u64> = None;

        for step in steps {
            if let Some(cmd) = step {
                engine.queue_command(cmd);
            }
            let snap = engine.tick();
            prop_assert_eq!(snap.score.score, engine.tick_counter() / 10);

            let restarted = snap
                .events
                .iter()
                .any(|e| matches!(e, TransitionEvent::PlayingStarted { .. }));
            if snap.phase == GamePhase::Playing && !restarted {
                if let Some(prev) = last {
                    prop_assert!(snap.score.score >= prev);
                }
            }
            last = Some(snap.score.score);
        }
    }

    #[test]
    fn at_most_one_game_over_per_tick(seed in any::<u64>(), steps in script()) {
        let mut engine = engine(seed);
        engine.queue_command(PlayerCommand::Start);

        for step in steps {
            if let Some(cmd) = step {
                engine.queue_command(cmd);
            }
            let snap = engine.tick();
            let game_overs = snap
                .events
                .iter()
                .filter(|e| matches!(e, TransitionEvent::GameOver { .. }))
                .count();
            prop_assert!(game_overs <= 1);
            if game_overs == 1 {
                prop_assert_eq!(snap.phase, GamePhase::GameOver);
            }
        }
    }

    #[test]
    fn fire_direction_is_right_after_every_start(seed in any::<u64>(), steps in script()) {
        let mut engine = engine(seed);
        engine.queue_command(PlayerCommand::Start);

        for step in steps {
            if let Some(cmd) = step {
                engine.queue_command(cmd);
            }
            let snap = engine.tick();
            let started = snap
                .events
                .iter()
                .any(|e| matches!(e, TransitionEvent::PlayingStarted { .. }));
            let toggled = matches!(
                step,
                Some(PlayerCommand::ToggleVertical | PlayerCommand::ToggleHorizontal)
            );
            if started && !toggled {
                prop_assert_eq!(snap.fire_direction, FireDirection::Right);
            }
        }
    }

    #[test]
    fn double_toggle_is_identity(toggles in prop::collection::vec(any::<bool>(), 0..20), vertical in any::<bool>()) {
        let mut engine = engine(1);
        engine.queue_command(PlayerCommand::Start);
        engine.tick();

        let toggle = |v: bool| if v { PlayerCommand::ToggleVertical } else { PlayerCommand::ToggleHorizontal };
        engine.queue_commands(toggles.into_iter().map(toggle));
        engine.queue_command(toggle(vertical));
        let before = engine.tick().fire_direction;

        engine.queue_commands([toggle(vertical), toggle(vertical)]);
        let after = engine.tick().fire_direction;
        prop_assert_eq!(before, after);
    }
}
