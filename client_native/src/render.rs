//! Frame presentation.
//!
//! Draws the simulation state once per frame in a fixed order: clear,
//! net, player score, AI score, player paddle, AI paddle, ball.

use ggez::graphics::{self, DrawMode, DrawParam, Rect, Scale, Text, TextFragment};
use ggez::nalgebra as na;
use ggez::{Context, GameResult};
use hecs::World;

use game_core::{Ball, Config, Net, Paddle, Score, Side};

type Point2 = na::Point2<f32>;

const SCORE_SCALE: f32 = 35.0;

pub fn draw_frame(ctx: &mut Context, world: &World, config: &Config, score: &Score) -> GameResult {
    graphics::clear(ctx, graphics::BLACK);

    for (_entity, net) in world.query::<&Net>().iter() {
        draw_net(ctx, net)?;
    }

    draw_score(ctx, config.surface_width / 4.0, config.surface_height / 6.0, score.player)?;
    draw_score(
        ctx,
        3.0 * config.surface_width / 4.0,
        config.surface_height / 6.0,
        score.ai,
    )?;

    draw_paddle_for_side(ctx, world, config, Side::Player)?;
    draw_paddle_for_side(ctx, world, config, Side::Ai)?;

    for (_entity, ball) in world.query::<&Ball>().iter() {
        draw_ball(ctx, ball, config)?;
    }

    graphics::present(ctx)
}

fn draw_net(ctx: &mut Context, net: &Net) -> GameResult {
    let mesh = graphics::Mesh::new_rectangle(
        ctx,
        DrawMode::fill(),
        Rect::new(net.x, net.y, net.width, net.height),
        graphics::WHITE,
    )?;
    graphics::draw(ctx, &mesh, DrawParam::default())
}

fn draw_score(ctx: &mut Context, x: f32, y: f32, score: u32) -> GameResult {
    let text = Text::new(TextFragment::new(score.to_string()).scale(Scale::uniform(SCORE_SCALE)));
    graphics::draw(ctx, &text, (Point2::new(x, y), graphics::WHITE))
}

fn draw_paddle_for_side(
    ctx: &mut Context,
    world: &World,
    config: &Config,
    side: Side,
) -> GameResult {
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        if paddle.side == side {
            draw_paddle(ctx, paddle, config)?;
        }
    }
    Ok(())
}

fn draw_paddle(ctx: &mut Context, paddle: &Paddle, config: &Config) -> GameResult {
    let mesh = graphics::Mesh::new_rectangle(
        ctx,
        DrawMode::fill(),
        Rect::new(paddle.x, paddle.y, config.paddle_width, config.paddle_height),
        graphics::WHITE,
    )?;
    graphics::draw(ctx, &mesh, DrawParam::default())
}

fn draw_ball(ctx: &mut Context, ball: &Ball, config: &Config) -> GameResult {
    let mesh = graphics::Mesh::new_circle(
        ctx,
        DrawMode::fill(),
        Point2::new(ball.pos.x, ball.pos.y),
        config.ball_radius,
        0.1,
        graphics::Color::from_rgb(0x05, 0xed, 0xff),
    )?;
    graphics::draw(ctx, &mesh, DrawParam::default())
}
