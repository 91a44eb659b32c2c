//! Run lifecycle transitions: Idle -> Running -> GameOver -> Running
//!
//! Start guarding and world replacement live in [`crate::game::Game`]; the
//! transitions on a single world live here.

use super::state::{GameEvent, GamePhase, World};

/// Put a freshly built world into play and reset the HUD values
pub fn enter_running(world: &mut World) -> Vec<GameEvent> {
    world.session.phase = GamePhase::Running;
    world.physics_paused = false;
    log::info!("Run started (seed {})", world.seed);

    vec![
        GameEvent::RunStarted,
        GameEvent::ScoreChanged {
            score: world.session.score,
        },
        GameEvent::RingsChanged {
            rings: world.session.ring_count,
        },
    ]
}

/// End the run after an obstacle hit.
///
/// Only a running world can end; repeated calls return no events so the
/// leaderboard save and banner happen once.
pub fn enter_game_over(world: &mut World) -> Vec<GameEvent> {
    if world.session.phase != GamePhase::Running {
        log::trace!("Game over ignored in phase {:?}", world.session.phase);
        return Vec::new();
    }

    world.session.phase = GamePhase::GameOver;
    world.player.vel_x = 0.0;
    world.player.damaged = true;
    world.physics_paused = true;

    log::info!(
        "Game over: score {}, rings {}, speed multiplier {:.2}",
        world.session.score,
        world.session.ring_count,
        world.session.speed_multiplier
    );

    vec![GameEvent::GameOver {
        score: world.session.score,
        rings: world.session.ring_count,
        speed_multiplier: world.session.speed_multiplier,
    }]
}
