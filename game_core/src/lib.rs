//! Deterministic Pong simulation.
//!
//! All gameplay logic lives here: paddle movement, ball physics,
//! collision resolution, scoring, and the computer opponent. The crate
//! has no rendering, audio, or platform dependencies; side effects are
//! surfaced as [`GameEvent`]s for the host to dispatch.

pub mod components;
pub mod config;
pub mod geometry;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use geometry::{intersects, Aabb};
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the game by one logical tick.
///
/// The update order is fixed: player movement, wall bounce, scoring,
/// ball advance, AI tracking, then paddle collision. Events emitted
/// during the previous tick are cleared first, so after this returns
/// `events` holds exactly the events of this tick.
pub fn step(
    world: &mut World,
    config: &Config,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
) {
    events.clear();

    // 1. Player paddle movement from the input latch
    move_player(world, input, config);

    // 2. Top/bottom wall bounce
    bounce_walls(world, config, events);

    // 3-4. Side wall scoring and rally reset
    check_scoring(world, config, score, events);

    // 5. Ball advance
    advance_ball(world);

    // 6. AI paddle tracking
    track_ball(world, config);

    // 7-8. Candidate paddle selection and rebound
    paddle_collision(world, config, events);
}

/// Helper to create a paddle entity at its spawn position
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config.paddle_x(side), config.paddle_spawn_y()),))
}

/// Helper to create the ball entity with the initial serve
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    let (vx, vy) = Params::BALL_SERVE_VELOCITY;
    world.spawn((Ball::new(
        config.surface_center(),
        glam::Vec2::new(vx, vy),
        config.ball_speed_initial,
    ),))
}

/// Helper to create the decorative net entity
pub fn create_net(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Net::new(config),))
}

/// Spawn the full set of game entities: both paddles, the ball, the net
pub fn spawn_entities(world: &mut World, config: &Config) {
    create_paddle(world, Side::Player, config);
    create_paddle(world, Side::Ai, config);
    create_ball(world, config);
    create_net(world, config);
}
