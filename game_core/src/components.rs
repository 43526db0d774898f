use glam::Vec2;

use crate::Config;

/// Which side of the net an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left paddle, driven by the keyboard
    Player,
    /// Right paddle, driven by the tracking controller
    Ai,
}

/// Paddle component - position is the top-left corner, dimensions live in Config
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self { side, x, y }
    }

    /// Vertical center of the paddle
    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// Ball component - `pos` is the center, `vel` is displacement per tick.
///
/// `speed` is the scalar magnitude used when the ball rebounds off a
/// paddle; it only ever grows within a rally and snaps back to the
/// initial value when a point is scored.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, speed: f32) -> Self {
        Self { pos, vel, speed }
    }

    /// Reset the ball for a new rally: re-center, restore the initial
    /// speed, and reverse the serve direction relative to the previous
    /// heading (both velocity components flip sign, magnitudes kept).
    pub fn reset(&mut self, config: &Config) {
        self.pos = config.surface_center();
        self.speed = config.ball_speed_initial;
        self.vel = -self.vel;
    }
}

/// Net component - static decorative divider, no behavioral role
#[derive(Debug, Clone, Copy)]
pub struct Net {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Net {
    pub fn new(config: &Config) -> Self {
        Self {
            x: config.surface_width / 2.0 - config.net_width / 2.0,
            y: 0.0,
            width: config.net_width,
            height: config.surface_height,
        }
    }
}
