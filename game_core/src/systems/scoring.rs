use hecs::World;

use crate::{Ball, Config, Events, GameEvent, Score, Side};

/// Award a point when the ball reaches a side wall and reset the rally.
///
/// The right wall scores for the player, the left wall for the AI. The
/// two cases are mutually exclusive within a tick because the ball cannot
/// span the whole surface.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x + config.ball_radius >= config.surface_width {
            events.push(GameEvent::ScorePoint(Side::Player));
            score.increment(Side::Player);
            ball.reset(config);
        } else if ball.pos.x - config.ball_radius <= 0.0 {
            events.push(GameEvent::ScorePoint(Side::Ai));
            score.increment(Side::Ai);
            ball.reset(config);
        }
    }
}
