//! Pac Maze headless runner
//!
//! Runs the simulation in demo mode with no window: the autopilot plays the
//! level until it is cleared, the player is caught, or the time limit hits.
//!
//! Usage: `pac-maze [LEVEL.json] [SECONDS]`

use std::path::Path;
use std::process::ExitCode;

use pac_maze::consts::*;
use pac_maze::hud::HudSnapshot;
use pac_maze::level::{LevelDef, MeshBounds};
use pac_maze::renderer::build_scene;
use pac_maze::settings::Settings;
use pac_maze::sim::{GameEvent, GameState, TickInput, tick};

/// Simulated display refresh
const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_SECONDS: f32 = 120.0;

/// Game instance holding all state
struct Game {
    state: GameState,
    accumulator: f32,
    input: TickInput,
    cherries: u32,
}

impl Game {
    fn new(state: GameState) -> Self {
        Self {
            state,
            accumulator: 0.0,
            input: TickInput {
                idle_mode: true,
                ..Default::default()
            },
            cherries: 0,
        }
    }

    /// Run simulation ticks for one displayed frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        for event in self.state.drain_events() {
            match event {
                GameEvent::CherryEaten => self.cherries += 1,
                GameEvent::IntroFinished => log::info!("Player landed, autopilot engaged"),
                _ => {}
            }
        }
    }
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Pac Maze (headless) starting...");

    let mut args = std::env::args().skip(1);
    let level = match args.next() {
        Some(path) => match LevelDef::load(Path::new(&path)) {
            Ok(level) => level,
            Err(e) => {
                log::error!("Failed to load level {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => LevelDef::classic(),
    };
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let settings = Settings::load(Path::new(Settings::FILE_NAME));
    let state = match GameState::new(level, &MeshBounds::classic(), settings) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to build level: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut game = Game::new(state);
    let frames = (seconds / FRAME_DT) as u32;
    for _ in 0..frames {
        game.update(FRAME_DT);
        if game.state.session.game_over {
            break;
        }
    }

    let hud = HudSnapshot::from_state(&game.state);
    let draw_calls = build_scene(&game.state).len();
    log::info!(
        "Finished after {:.1}s simulated: {} pellets eaten, {} left, {} cherries, {} draw calls",
        game.state.time_ticks as f32 * SIM_DT,
        hud.eaten,
        hud.remaining,
        game.cherries,
        draw_calls
    );
    match hud.overlay {
        Some(overlay) => log::info!("{}", overlay.message()),
        None => log::info!("Time limit reached"),
    }
    ExitCode::SUCCESS
}
