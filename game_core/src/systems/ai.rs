use hecs::World;

use crate::{Ball, Config, Paddle, Side};

/// Move the AI paddle a fraction of the distance toward the ball's
/// vertical position.
///
/// Proportional control only: the paddle center closes `tracking_gain` of
/// the gap per tick, which gives smooth pursuit with a deliberately
/// imperfect reaction. The AI paddle is intentionally not clamped to the
/// surface bounds.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_e, ball)) => ball.pos.y,
            None => return,
        }
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Ai {
            paddle.y += (ball_y - paddle.center_y(config)) * config.ai_tracking_gain;
        }
    }
}
