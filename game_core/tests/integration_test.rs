use game_core::*;
use glam::Vec2;
use hecs::World;

fn setup() -> (World, Config, InputState, Score, Events) {
    (
        World::new(),
        Config::new(),
        InputState::new(),
        Score::new(),
        Events::new(),
    )
}

fn ball_state(world: &World) -> Ball {
    world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, b)| *b)
        .expect("world has a ball")
}

fn paddle_state(world: &World, side: Side) -> Paddle {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p)
        .expect("world has the paddle")
}

#[test]
fn test_player_paddle_stays_in_bounds() {
    let (mut world, config, mut input, mut score, mut events) = setup();
    spawn_entities(&mut world, &config);

    // Hold up long past the wall, then down long past the other wall
    input.set_key_state(MoveAction::Up, true);
    for _ in 0..120 {
        step(&mut world, &config, &input, &mut score, &mut events);
        let y = paddle_state(&world, Side::Player).y;
        assert!(y >= 0.0 && y <= config.surface_height - config.paddle_height);
    }

    input.set_key_state(MoveAction::Up, false);
    input.set_key_state(MoveAction::Down, true);
    for _ in 0..120 {
        step(&mut world, &config, &input, &mut score, &mut events);
        let y = paddle_state(&world, Side::Player).y;
        assert!(y >= 0.0 && y <= config.surface_height - config.paddle_height);
    }
}

#[test]
fn test_right_wall_scores_for_player_and_resets() {
    let (mut world, config, input, mut score, mut events) = setup();
    create_paddle(&mut world, Side::Player, &config);
    create_paddle(&mut world, Side::Ai, &config);
    world.spawn((Ball::new(
        Vec2::new(config.surface_width - 1.0, config.surface_height / 2.0),
        Vec2::new(5.0, 0.0),
        7.0,
    ),));

    step(&mut world, &config, &input, &mut score, &mut events);

    assert_eq!(score.player, 1, "Player score goes 0 -> 1");
    assert!(events.contains(GameEvent::ScorePoint(Side::Player)));

    let ball = ball_state(&world);
    // The reset re-centered the ball, then the advance moved it one
    // reversed serve step away from the center.
    assert_eq!(ball.pos, config.surface_center() + Vec2::new(-5.0, 0.0));
    assert_eq!(ball.vel, Vec2::new(-5.0, 0.0), "Both components flip sign");
    assert_eq!(ball.speed, config.ball_speed_initial);
}

#[test]
fn test_top_wall_bounce_flips_vertical_velocity() {
    let (mut world, config, input, mut score, mut events) = setup();
    create_paddle(&mut world, Side::Player, &config);
    create_paddle(&mut world, Side::Ai, &config);
    world.spawn((Ball::new(Vec2::new(300.0, 0.0), Vec2::new(0.0, -5.0), 7.0),));

    step(&mut world, &config, &input, &mut score, &mut events);

    let ball = ball_state(&world);
    assert!(events.contains(GameEvent::WallContact));
    assert_eq!(ball.vel.y, 5.0, "Velocity flips from -5 to +5");
    // The bounce itself left the position alone; only the advance moved it.
    assert_eq!(ball.pos.y, 5.0);
}

#[test]
fn test_centered_paddle_hit_leaves_flat() {
    let (mut world, config, input, mut score, mut events) = setup();
    create_paddle(&mut world, Side::Player, &config);
    create_paddle(&mut world, Side::Ai, &config);

    let paddle = paddle_state(&world, Side::Player);
    let center_y = paddle.center_y(&config);
    // One advance ahead of overlapping the paddle, dead level with its center
    world.spawn((Ball::new(
        Vec2::new(paddle.x + config.paddle_width + 5.0, center_y),
        Vec2::new(-5.0, 0.0),
        7.0,
    ),));

    step(&mut world, &config, &input, &mut score, &mut events);

    let ball = ball_state(&world);
    assert!(events.contains(GameEvent::PaddleHit(Side::Player)));
    assert_eq!(ball.vel.y, 0.0, "Angle zero on a centered hit");
    assert_eq!(ball.vel.x, 7.0, "Full speed, toward the AI side");
}

#[test]
fn test_ai_tracking_formula_through_step() {
    let (mut world, config, input, mut score, mut events) = setup();
    create_paddle(&mut world, Side::Player, &config);
    let ai = world.spawn((Paddle::new(Side::Ai, config.paddle_x(Side::Ai), 0.0),));
    // Stationary ball so the advance step does not disturb the inputs
    world.spawn((Ball::new(Vec2::new(300.0, 300.0), Vec2::ZERO, 7.0),));

    step(&mut world, &config, &input, &mut score, &mut events);

    let ai_y = world.get::<&Paddle>(ai).unwrap().y;
    assert!((ai_y - 22.5).abs() < 1e-5, "(300 - 50) * 0.09 = 22.5, got {}", ai_y);
}

#[test]
fn test_speed_monotonic_within_rally_and_resets_on_score() {
    let (mut world, config, input, mut score, mut events) = setup();
    // Player paddle only: the return shot sails past the empty AI side
    create_paddle(&mut world, Side::Player, &config);
    let spawn_y = config.paddle_spawn_y() + config.paddle_height / 2.0;
    world.spawn((Ball::new(Vec2::new(300.0, spawn_y), Vec2::new(-5.0, 0.0), 7.0),));

    let mut last_speed = ball_state(&world).speed;
    let mut saw_hit = false;
    let mut saw_score = false;

    for _ in 0..400 {
        step(&mut world, &config, &input, &mut score, &mut events);
        let ball = ball_state(&world);

        if events.contains(GameEvent::ScorePoint(Side::Player)) {
            saw_score = true;
            assert_eq!(ball.speed, 7.0, "Speed resets exactly on a score");
            break;
        }

        assert!(ball.speed >= last_speed, "Speed never decreases mid-rally");
        if events.contains(GameEvent::PaddleHit(Side::Player)) {
            saw_hit = true;
            assert!(ball.speed > last_speed, "Paddle hit raises the speed");
        }
        last_speed = ball.speed;
    }

    assert!(saw_hit, "Rally included a paddle hit");
    assert!(saw_score, "Rally ended with a score");
    assert_eq!(score.player, 1);
}

#[test]
fn test_events_are_per_tick() {
    let (mut world, config, input, mut score, mut events) = setup();
    create_paddle(&mut world, Side::Player, &config);
    create_paddle(&mut world, Side::Ai, &config);
    world.spawn((Ball::new(Vec2::new(300.0, 0.0), Vec2::new(0.0, -8.0), 7.0),));

    step(&mut world, &config, &input, &mut score, &mut events);
    assert!(events.contains(GameEvent::WallContact));

    // Next tick the ball is clear of the wall: the old event must be gone
    step(&mut world, &config, &input, &mut score, &mut events);
    assert!(!events.contains(GameEvent::WallContact));
}

#[test]
fn test_long_run_stays_numeric() {
    let (mut world, config, mut input, mut score, mut events) = setup();
    spawn_entities(&mut world, &config);

    for tick in 0..3600 {
        // Wiggle the player paddle to vary the rallies
        let up = (tick / 30) % 2 == 0;
        input.set_key_state(MoveAction::Up, up);
        input.set_key_state(MoveAction::Down, !up);

        step(&mut world, &config, &input, &mut score, &mut events);

        let ball = ball_state(&world);
        assert!(ball.pos.x.is_finite() && ball.pos.y.is_finite());
        assert!(ball.vel.x.is_finite() && ball.vel.y.is_finite());
        assert!(ball.speed >= config.ball_speed_initial);

        let player = paddle_state(&world, Side::Player);
        assert!(player.y >= 0.0 && player.y <= config.surface_height - config.paddle_height);
    }
}
