//! Audio dispatch.
//!
//! Maps simulation events to sound clips. Audio is strictly
//! fire-and-forget: a clip that fails to load or play is logged and
//! skipped, and the game carries on without it.

use ggez::audio::{self, SoundSource};
use ggez::Context;

use game_core::{Events, GameEvent};

pub struct Sounds {
    wall: Option<audio::Source>,
    score: Option<audio::Source>,
    hit: Option<audio::Source>,
}

impl Sounds {
    pub fn load(ctx: &mut Context) -> Self {
        Self {
            wall: load_clip(ctx, "/wall.ogg"),
            score: load_clip(ctx, "/score.ogg"),
            hit: load_clip(ctx, "/hit.ogg"),
        }
    }

    /// Play the clips for this tick's events
    pub fn dispatch(&mut self, events: &Events) {
        for event in events.iter() {
            let clip = match event {
                GameEvent::WallContact => self.wall.as_mut(),
                GameEvent::ScorePoint(_) => self.score.as_mut(),
                GameEvent::PaddleHit(_) => self.hit.as_mut(),
            };
            if let Some(source) = clip {
                if let Err(err) = source.play() {
                    log::warn!("Sound playback failed: {}", err);
                }
            }
        }
    }
}

fn load_clip(ctx: &mut Context, path: &str) -> Option<audio::Source> {
    match audio::Source::new(ctx, path) {
        Ok(source) => Some(source),
        Err(err) => {
            log::warn!("Could not load sound clip {}: {}", path, err);
            None
        }
    }
}
