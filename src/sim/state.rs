//! Game state and core simulation types
//!
//! Everything the update loop mutates lives in `GameState`, which is passed by
//! reference to each step of the tick. Nothing is global.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::camera::FreeCamera;
use super::geometry::{Aabb, Sphere};
use super::ghost::Ghost;
use super::pickups::{Cherry, Pellet, SpeedBoost};
use super::player::{IntroFlight, Player};
use super::walls::{Wall, build_walls};
use crate::consts::*;
use crate::error::LevelError;
use crate::level::{LevelDef, MeshBounds};
use crate::settings::Settings;

/// Object type identifier the renderer keys draw calls and shading on
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Sphere = 0,
    Labyrinth1 = 1,
    Labyrinth2 = 2,
    Labyrinth3 = 3,
    Plane = 4,
    Background = 5,
    Pacman = 6,
    Cherry = 7,
    Count1 = 8,
    Count2 = 9,
    Count3 = 10,
    Ghost = 11,
    Ghost2 = 12,
}

impl ObjectKind {
    #[inline]
    pub fn id(self) -> u32 {
        self as u32
    }
}

/// Camera mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Fixed camera looking down on the maze
    #[default]
    LookAt,
    /// Camera flies freely inside the sky box
    FreeCam,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::LookAt => CameraMode::FreeCam,
            CameraMode::FreeCam => CameraMode::LookAt,
        }
    }
}

/// Per-level progress flags read by the HUD
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Pellets eaten this level
    pub eaten: u32,
    pub game_over: bool,
    /// Every pellet eaten
    pub won: bool,
    /// Restart requested; the next tick rebuilds the level
    pub should_restart: bool,
}

/// Discrete events for audio and HUD layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PelletsEaten { count: u32 },
    CherryEaten,
    SpeedBoostEnded,
    CaughtByGhost { ghost: usize },
    LevelCleared,
    IntroFinished,
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub level: LevelDef,
    /// Static maze walls, built once
    pub walls: Vec<Wall>,
    pub pellets: Vec<Pellet>,
    pub cherries: Vec<Cherry>,
    pub ghosts: Vec<Ghost>,
    pub player: Player,
    /// Active cherry boost
    pub boost: Option<SpeedBoost>,
    pub camera_mode: CameraMode,
    pub camera: FreeCamera,
    pub session: Session,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Contacts gathered this tick, reused between ticks
    pub contacts: Vec<Vec3>,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a level. Fails on invalid level data or missing mesh bounds.
    pub fn new(level: LevelDef, meshes: &MeshBounds, settings: Settings) -> Result<Self, LevelError> {
        level.validate()?;
        let walls = build_walls(&level.walls, meshes, &level.bounds)?;

        let mut state = Self {
            camera_mode: settings.camera_mode,
            walls,
            pellets: Vec::new(),
            cherries: Vec::new(),
            ghosts: Vec::new(),
            player: Player::new(level.player_start, None),
            boost: None,
            camera: FreeCamera::default(),
            session: Session::default(),
            time_ticks: 0,
            contacts: Vec::new(),
            events: Vec::new(),
            settings,
            level,
        };
        state.populate();

        log::info!(
            "Level '{}' ready: {} walls, {} pellets, {} cherries, {} ghosts",
            state.level.name,
            state.walls.len(),
            state.pellets.len(),
            state.cherries.len(),
            state.ghosts.len()
        );
        Ok(state)
    }

    /// Classic maze with default mesh bounds
    pub fn classic(settings: Settings) -> Result<Self, LevelError> {
        Self::new(LevelDef::classic(), &MeshBounds::classic(), settings)
    }

    /// Reset everything that moves or gets eaten. Walls are kept.
    fn populate(&mut self) {
        let level = &self.level;
        self.pellets = level
            .pellets
            .iter()
            .map(|&position| Pellet {
                position,
                radius: level.pellet_radius,
            })
            .collect();
        self.cherries = level
            .cherries
            .iter()
            .map(|&position| Cherry {
                position,
                radius: level.cherry_radius,
            })
            .collect();

        let ghost_speed = self.settings.effective_ghost_speed();
        self.ghosts = level.ghosts.iter().map(|def| Ghost::new(def, ghost_speed)).collect();

        let intro = self
            .settings
            .intro
            .then(|| IntroFlight::new(level.intro_path, level.player_start, INTRO_DURATION));
        self.player = Player::new(level.player_start, intro);

        self.boost = None;
        self.camera = FreeCamera::default();
        self.session = Session::default();
        self.contacts.clear();
    }

    /// Start the level over
    pub fn restart(&mut self) {
        self.populate();
        self.events.push(GameEvent::Restarted);
        log::info!("Level '{}' restarted", self.level.name);
    }

    /// Player collision sphere for the current camera mode
    pub fn player_sphere(&self) -> Sphere {
        self.player
            .sphere(self.camera_mode, self.settings.collision_margin)
    }

    /// Current player speed, boosted while a cherry boost is active
    pub fn player_speed(&self) -> f32 {
        self.boost
            .map_or(self.settings.player_speed, |boost| boost.speed)
    }

    pub fn toggle_camera_mode(&mut self) {
        self.camera_mode = self.camera_mode.toggled();
        log::debug!("Camera mode: {:?}", self.camera_mode);
    }

    pub fn bounds(&self) -> &Aabb {
        &self.level.bounds
    }

    /// Take all events since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
