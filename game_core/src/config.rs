/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 600.0;
    pub const SURFACE_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0;
    pub const PADDLE_STEP: f32 = 8.0; // units per tick

    // Ball
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_SPEED_INITIAL: f32 = 7.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.1; // added on every paddle hit
    pub const BALL_SERVE_VELOCITY: (f32, f32) = (5.0, 5.0); // first serve, per tick

    // Bounce angle off a paddle: 0 or +/- 45 degrees
    pub const BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    // AI
    pub const AI_TRACKING_GAIN: f32 = 0.09;

    // Net (decorative)
    pub const NET_WIDTH: f32 = 4.0;

    // Timing
    pub const TICK_RATE: u32 = 60; // logical ticks per second
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_step: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increment: f32,
    pub ai_tracking_gain: f32,
    pub net_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_step: Params::PADDLE_STEP,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            ai_tracking_gain: Params::AI_TRACKING_GAIN,
            net_width: Params::NET_WIDTH,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a paddle based on its side
    pub fn paddle_x(&self, side: crate::Side) -> f32 {
        match side {
            crate::Side::Player => self.paddle_margin,
            crate::Side::Ai => self.surface_width - (self.paddle_width + self.paddle_margin),
        }
    }

    /// Y position that vertically centers a paddle on the surface
    pub fn paddle_spawn_y(&self) -> f32 {
        self.surface_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp a paddle Y so the paddle stays fully on the surface
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.surface_height - self.paddle_height)
    }

    /// Center of the surface (ball spawn point)
    pub fn surface_center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.surface_width / 2.0, self.surface_height / 2.0)
    }
}
