use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }
}

/// Discrete events emitted by the simulation during one tick.
///
/// The host drains these after stepping and maps them to sound clips;
/// the simulation itself never touches I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallContact,
    /// Ball rebounded off a paddle
    PaddleHit(Side),
    /// A point was scored by the given side
    ScorePoint(Side),
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    events: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    pub fn contains(&self, event: GameEvent) -> bool {
        self.events.contains(&event)
    }
}

/// Logical movement actions for the player paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAction {
    Up,
    Down,
}

/// Held-key state for paddle control.
///
/// Each flag is written only by the host's key press/release handlers and
/// read only by the simulation step, so the step always sees a consistent
/// snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up_held: bool,
    pub down_held: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key_state(&mut self, action: MoveAction, pressed: bool) {
        match action {
            MoveAction::Up => self.up_held = pressed,
            MoveAction::Down => self.down_held = pressed,
        }
    }
}
