//! Pac-Maze - a 3D Pac-Man style maze game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collision tests, movement, ghosts, game state)
//! - `level`: Level definitions and mesh bounds supplied by the loader
//! - `renderer`: Draw list handed to an external graphics layer
//! - `hud`: Counter digits and overlay flags for the HUD layer
//! - `settings`: Data-driven game configuration

pub mod error;
pub mod hud;
pub mod level;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{LevelError, SettingsError};
pub use hud::HudSnapshot;
pub use level::{LevelDef, MeshBounds};
pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 2.5;
    pub const PLAYER_BOOST_SPEED: f32 = 4.0;
    /// Seconds the cherry speed boost lasts
    pub const SPEED_BOOST_DURATION: f32 = 1.5;
    /// Render scale of the player in each camera mode
    pub const PLAYER_LOOKAT_SIZE: f32 = 0.3;
    pub const PLAYER_FREE_CAM_SIZE: f32 = 0.1;
    /// Added to the render scale so contacts register just before visual overlap
    pub const COLLISION_MARGIN: f32 = 0.05;

    /// Ghost defaults
    pub const GHOST_SPEED: f32 = 5.0;
    pub const GHOST_LOOKAT_SIZE: f32 = 0.4;
    pub const GHOST_FREE_CAM_SIZE: f32 = 0.2;
    /// Ghosts are harder to sneak past when the camera is free
    pub const GHOST_FREE_CAM_COLLISION_RADIUS: f32 = 0.55;
    /// Freeze countdown set when a cherry is eaten
    pub const GHOST_FREEZE_COUNTDOWN: f32 = 3.0;
    /// Subtracted from the freeze countdown every tick
    pub const FREEZE_DECREMENT: f32 = 0.01;
    /// Tolerance for "ghost is at waypoint" checks
    pub const WAYPOINT_EPSILON: f32 = 1e-4;

    /// Level geometry
    pub const FLOOR_Y: f32 = -1.0;
    pub const LEVEL_BOUNDARY: f32 = 9.0;
    pub const SKY_HALF_EXTENT: f32 = 10.0;
    pub const SKY_HALF_HEIGHT: f32 = 40.0;

    /// Collectibles
    pub const PELLET_RADIUS: f32 = 0.1;
    pub const PELLET_Y: f32 = -0.8;
    pub const CHERRY_RADIUS: f32 = 0.5;
    pub const CHERRY_Y: f32 = -0.5;

    /// Free camera
    pub const CAMERA_SPEED: f32 = 3.0;
    pub const CAMERA_HALF_EXTENT: f32 = 0.2;

    /// Seconds the intro flight takes to land the player
    pub const INTRO_DURATION: f32 = 2.0;
}

/// Tolerant float comparison
#[inline]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
