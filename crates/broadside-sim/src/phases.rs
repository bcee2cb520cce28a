//! Game phase handlers.
//!
//! Each `GamePhase` has a stateless handler with `on_enter`, `handle_command`,
//! `tick` and `on_exit` hooks. The engine owns the current phase and is the
//! only caller; a hook that returns `Some(next)` asks the engine to transition.

use broadside_core::commands::PlayerCommand;
use broadside_core::enums::GamePhase;
use broadside_core::events::TransitionEvent;

use crate::persistence::ScoreStore;
use crate::session::Session;
use crate::systems::{collision, movement, scoring, spawner};

/// Everything a phase hook may touch.
pub struct PhaseContext<'a> {
    pub session: &'a mut Session,
    pub store: &'a mut dyn ScoreStore,
    /// Transition events for the next snapshot.
    pub events: &'a mut Vec<TransitionEvent>,
}

pub trait PhaseHandler {
    fn on_enter(&self, _ctx: &mut PhaseContext<'_>) {}

    /// Edge-triggered commands. Movement axes never reach here.
    fn handle_command(
        &self,
        _ctx: &mut PhaseContext<'_>,
        _command: PlayerCommand,
    ) -> Option<GamePhase> {
        None
    }

    fn tick(&self, _ctx: &mut PhaseContext<'_>) -> Option<GamePhase> {
        None
    }

    fn on_exit(&self, _ctx: &mut PhaseContext<'_>) {}
}

/// Idle until the first `Start`.
pub struct StartPhase;

pub struct PlayingPhase;

/// Frozen until `Restart`.
pub struct GameOverPhase;

pub fn handler(phase: GamePhase) -> &'static dyn PhaseHandler {
    match phase {
        GamePhase::Start => &StartPhase,
        GamePhase::Playing => &PlayingPhase,
        GamePhase::GameOver => &GameOverPhase,
    }
}

impl PhaseHandler for StartPhase {
    fn handle_command(
        &self,
        _ctx: &mut PhaseContext<'_>,
        command: PlayerCommand,
    ) -> Option<GamePhase> {
        matches!(command, PlayerCommand::Start).then_some(GamePhase::Playing)
    }
}

impl PhaseHandler for PlayingPhase {
    fn on_enter(&self, ctx: &mut PhaseContext<'_>) {
        let key = ctx.session.config.high_score_key.clone();
        let high_score = scoring::load_high_score(ctx.store, &key);
        ctx.session.begin(high_score);
        ctx.events.push(TransitionEvent::PlayingStarted { high_score });
        log::info!("Session started (high score {high_score})");
    }

    fn handle_command(
        &self,
        ctx: &mut PhaseContext<'_>,
        command: PlayerCommand,
    ) -> Option<GamePhase> {
        let session = &mut *ctx.session;
        match command {
            PlayerCommand::Fire => {
                if let Some(vessel) = session.registry.vessel() {
                    session
                        .fire
                        .fire(&mut session.registry, vessel.position, &session.config);
                }
            }
            PlayerCommand::ToggleVertical => {
                session.fire.toggle_vertical();
            }
            PlayerCommand::ToggleHorizontal => {
                session.fire.toggle_horizontal();
            }
            // Start and Restart are no-ops mid-session.
            PlayerCommand::Start | PlayerCommand::Restart | PlayerCommand::MoveAxis { .. } => {}
        }
        None
    }

    fn tick(&self, ctx: &mut PhaseContext<'_>) -> Option<GamePhase> {
        let session = &mut *ctx.session;
        let now = session.time.tick;

        movement::steer_vessel(&mut session.registry, session.axis, &session.config.vessel);
        spawner::run(
            &mut session.registry,
            &mut session.queue,
            &mut session.rng,
            &session.config,
            now,
        );
        movement::run(&mut session.registry);
        movement::clamp_vessel(&mut session.registry, &session.config.field);

        let game_over = collision::run(&mut session.registry);
        if !game_over {
            session.score.advance();
        }
        session.time.advance();

        game_over.then_some(GamePhase::GameOver)
    }

    fn on_exit(&self, ctx: &mut PhaseContext<'_>) {
        ctx.session.queue.cancel_all();
    }
}

impl PhaseHandler for GameOverPhase {
    fn on_enter(&self, ctx: &mut PhaseContext<'_>) {
        let key = ctx.session.config.high_score_key.clone();
        let final_score = ctx.session.score.displayed();
        let outcome = scoring::reconcile_high_score(ctx.store, &key, final_score);
        ctx.session.score.high_score = outcome.high_score;
        ctx.events.push(TransitionEvent::GameOver {
            final_score: outcome.final_score,
            high_score: outcome.high_score,
            new_record: outcome.new_record,
        });
        log::info!(
            "Game over at tick {}: score {}, high score {}",
            ctx.session.time.tick,
            outcome.final_score,
            outcome.high_score
        );
    }

    fn handle_command(
        &self,
        _ctx: &mut PhaseContext<'_>,
        command: PlayerCommand,
    ) -> Option<GamePhase> {
        matches!(command, PlayerCommand::Restart).then_some(GamePhase::Playing)
    }
}
