use hecs::World;

use crate::Ball;

/// Advance the ball by its per-tick velocity
pub fn advance_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Config};
    use glam::Vec2;

    #[test]
    fn test_ball_advances_by_velocity() {
        let mut world = World::new();
        let config = Config::new();
        create_ball(&mut world, &config);

        let before = world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| (b.pos, b.vel))
            .unwrap();

        advance_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, before.0 + before.1);
            assert_eq!(ball.vel, before.1, "Velocity is unchanged by movement");
        }
    }

    #[test]
    fn test_stationary_ball_stays_put() {
        let mut world = World::new();
        world.spawn((Ball::new(Vec2::new(300.0, 200.0), Vec2::ZERO, 7.0),));

        advance_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(300.0, 200.0));
        }
    }
}
