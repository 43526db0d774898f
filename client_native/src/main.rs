//! Native Pong client.
//!
//! Owns the window and the fixed-rate loop: every logical tick it steps
//! the simulation, dispatches the emitted events to the audio layer, and
//! draws the resulting state.

mod render;
mod sound;

use std::env;
use std::path;

use ggez::conf;
use ggez::event::{self, EventHandler, KeyCode, KeyMods};
use ggez::timer;
use ggez::{Context, ContextBuilder, GameResult};
use hecs::World;

use game_core::{
    spawn_entities, step, Config, Events, InputState, MoveAction, Params, Score,
};

struct MainState {
    world: World,
    config: Config,
    input: InputState,
    score: Score,
    events: Events,
    sounds: sound::Sounds,
}

impl MainState {
    fn new(ctx: &mut Context) -> GameResult<MainState> {
        let config = Config::new();
        let mut world = World::new();
        spawn_entities(&mut world, &config);

        let sounds = sound::Sounds::load(ctx);

        Ok(MainState {
            world,
            config,
            input: InputState::new(),
            score: Score::new(),
            events: Events::new(),
            sounds,
        })
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while timer::check_update_time(ctx, Params::TICK_RATE) {
            step(
                &mut self.world,
                &self.config,
                &self.input,
                &mut self.score,
                &mut self.events,
            );
            self.sounds.dispatch(&self.events);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        render::draw_frame(ctx, &self.world, &self.config, &self.score)?;
        timer::yield_now();
        Ok(())
    }

    fn key_down_event(
        &mut self,
        ctx: &mut Context,
        keycode: KeyCode,
        _keymod: KeyMods,
        _repeat: bool,
    ) {
        match keycode {
            KeyCode::Up => self.input.set_key_state(MoveAction::Up, true),
            KeyCode::Down => self.input.set_key_state(MoveAction::Down, true),
            KeyCode::Escape => event::quit(ctx),
            _ => (),
        }
    }

    fn key_up_event(&mut self, _ctx: &mut Context, keycode: KeyCode, _keymod: KeyMods) {
        match keycode {
            KeyCode::Up => self.input.set_key_state(MoveAction::Up, false),
            KeyCode::Down => self.input.set_key_state(MoveAction::Down, false),
            _ => (),
        }
    }
}

pub fn main() -> GameResult {
    env_logger::init();

    // Look for sound clips under CARGO_MANIFEST_DIR/resources when run
    // from the workspace, ./resources otherwise.
    let resource_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        let mut path = path::PathBuf::from(manifest_dir);
        path.push("resources");
        path
    } else {
        path::PathBuf::from("./resources")
    };

    let cb = ContextBuilder::new("pong", "rgilks")
        .window_setup(conf::WindowSetup::default().title("Pong"))
        .window_mode(
            conf::WindowMode::default().dimensions(Params::SURFACE_WIDTH, Params::SURFACE_HEIGHT),
        )
        .add_resource_path(resource_dir);

    let (ctx, events_loop) = &mut cb.build()?;

    log::info!(
        "Pong starting: {}x{} surface, {} ticks/s",
        Params::SURFACE_WIDTH,
        Params::SURFACE_HEIGHT,
        Params::TICK_RATE
    );

    let game = &mut MainState::new(ctx)?;
    event::run(ctx, events_loop, game)
}
