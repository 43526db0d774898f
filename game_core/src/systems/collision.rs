use hecs::World;

use crate::geometry::intersects;
use crate::{Ball, Config, Events, GameEvent, Paddle, Params, Side};

/// Bounce the ball off the top and bottom walls.
///
/// The vertical velocity is inverted at most once per tick, so a
/// (physically impossible) simultaneous top-and-bottom contact would
/// still invert only once. The position is left untouched.
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let top = ball.pos.y - config.ball_radius;
        let bottom = ball.pos.y + config.ball_radius;
        if bottom >= config.surface_height || top <= 0.0 {
            ball.vel.y = -ball.vel.y;
            events.push(GameEvent::WallContact);
        }
    }
}

/// Test the ball against the candidate paddle and apply the rebound.
///
/// The candidate is the player paddle while the ball is left of the
/// surface midpoint, the AI paddle otherwise; only the candidate is
/// tested. On contact the bounce angle is picked from {-45, 0, +45}
/// degrees by where the ball center sits relative to the paddle center,
/// the velocity is rebuilt from the current speed, and the speed grows by
/// a fixed increment so rallies get progressively faster.
pub fn paddle_collision(world: &mut World, config: &Config, events: &mut Events) {
    let ball_data = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| *ball)
    };
    let ball_snapshot = match ball_data {
        Some(ball) => ball,
        None => return,
    };

    let candidate_side = if ball_snapshot.pos.x < config.surface_width / 2.0 {
        Side::Player
    } else {
        Side::Ai
    };

    let candidate = {
        let mut query = world.query::<&Paddle>();
        query
            .iter()
            .find(|(_e, p)| p.side == candidate_side)
            .map(|(_e, p)| *p)
    };
    let paddle = match candidate {
        Some(paddle) => paddle,
        None => return,
    };

    if !intersects(&paddle, &ball_snapshot, config) {
        return;
    }

    events.push(GameEvent::PaddleHit(candidate_side));

    let paddle_center = paddle.center_y(config);
    let angle = if ball_snapshot.pos.y < paddle_center {
        -Params::BOUNCE_ANGLE
    } else if ball_snapshot.pos.y > paddle_center {
        Params::BOUNCE_ANGLE
    } else {
        0.0
    };

    let direction = match candidate_side {
        Side::Player => 1.0,
        Side::Ai => -1.0,
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel.x = direction * ball.speed * angle.cos();
        ball.vel.y = ball.speed * angle.sin();
        ball.speed += config.ball_speed_increment;
    }
}
