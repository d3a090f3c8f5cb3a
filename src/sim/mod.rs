//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (walls, pellets and ghosts keep level order)
//! - No rendering or platform dependencies
//! - Degenerate geometry resolves to zero vectors, never NaN

pub mod camera;
pub mod collision;
pub mod geometry;
pub mod ghost;
pub mod movement;
pub mod pickups;
pub mod player;
pub mod state;
pub mod tick;
pub mod walls;

pub use camera::FreeCamera;
pub use collision::{
    aabb_overlap, boundary_penetration, closest_point_on_box, sphere_aabb_collision_direction,
    sphere_box_penetration, sphere_sphere_overlap,
};
pub use geometry::{Aabb, Sphere};
pub use ghost::{Direction, Ghost};
pub use movement::{Intent, MoveBasis, MoveIntents, cancel_collision_movement};
pub use pickups::{Cherry, Collectible, Pellet, SpeedBoost, consume_overlapping};
pub use player::{IntroFlight, Player};
pub use state::{CameraMode, GameEvent, GameState, ObjectKind, Session};
pub use tick::{TickInput, autopilot, tick};
pub use walls::{Wall, collect_wall_contacts};
