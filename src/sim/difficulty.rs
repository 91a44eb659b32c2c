//! Difficulty scaling on score milestones

use super::pool::EntityPool;
use super::state::{GameEvent, GameSession};

/// Grow a scroll speed by `growth`, flooring to keep it an integer.
///
/// Speeds are negative, so flooring rounds away from zero: -337.5 becomes -338.
pub fn scaled_speed(speed: i32, growth: f64) -> i32 {
    (speed as f64 * growth).floor() as i32
}

/// Raise the difficulty and retime every live entity to the new speed.
///
/// The rescale happens here, synchronously, so entities already on screen
/// speed up in the same tick as the milestone.
pub fn on_milestone(session: &mut GameSession, pool: &mut EntityPool, growth: f64) -> GameEvent {
    session.speed_multiplier *= growth;
    session.speed = scaled_speed(session.speed, growth);

    let rescaled = pool.set_all_velocity(session.speed as f32);
    log::info!(
        "Milestone at score {}: speed {} (x{:.2}), {} entities rescaled",
        session.score,
        session.speed,
        session.speed_multiplier,
        rescaled
    );

    GameEvent::Milestone {
        speed: session.speed,
        speed_multiplier: session.speed_multiplier,
    }
}
