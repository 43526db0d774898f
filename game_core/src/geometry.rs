use glam::Vec2;

use crate::{Ball, Config, Paddle};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Bounding box of a paddle (top-left corner plus configured dimensions)
    pub fn from_paddle(paddle: &Paddle, config: &Config) -> Self {
        Self::new(
            Vec2::new(paddle.x, paddle.y),
            Vec2::new(paddle.x + config.paddle_width, paddle.y + config.paddle_height),
        )
    }

    /// Bounding box of the ball (center plus or minus its radius)
    pub fn from_ball(ball: &Ball, config: &Config) -> Self {
        Self::from_center_size(ball.pos, Vec2::splat(config.ball_radius * 2.0))
    }

    /// Check if two boxes overlap. Strict inequalities on all four axes,
    /// so boxes that merely touch do not count as overlapping.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// AABB overlap test between a paddle and the ball
pub fn intersects(paddle: &Paddle, ball: &Ball, config: &Config) -> bool {
    Aabb::from_paddle(paddle, config).overlaps(&Aabb::from_ball(ball, config))
}
