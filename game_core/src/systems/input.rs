use hecs::World;

use crate::{Config, InputState, Paddle, Side};

/// Apply held-key input to the player paddle.
///
/// At most one direction is applied per tick; up wins when both keys are
/// held. The result is clamped so the paddle stays fully on the surface.
pub fn move_player(world: &mut World, input: &InputState, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }

        if input.up_held && paddle.y > 0.0 {
            paddle.y = config.clamp_paddle_y(paddle.y - config.paddle_step);
        } else if input.down_held && paddle.y < config.surface_height - config.paddle_height {
            paddle.y = config.clamp_paddle_y(paddle.y + config.paddle_step);
        }
    }
}
