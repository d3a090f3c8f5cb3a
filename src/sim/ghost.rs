//! Ghost patrol state machine
//!
//! A ghost walks the edge of the rectangle spanned by two waypoints:
//! `initial` (larger x and z) and `final_position` (smaller x and z).
//! Starting at `initial` the legs run Left, Forward, Right, Backward and repeat.
//!
//! - Waypoint checks are epsilon-tolerant, so a leg that lands a hair off the
//!   corner still turns
//! - Every step is clamped to the opposite waypoint; a ghost never leaves its
//!   rectangle whatever the timestep
//! - While frozen a ghost neither moves nor catches the player

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::sphere_sphere_overlap;
use super::geometry::Sphere;
use super::state::{CameraMode, ObjectKind};
use crate::approx_eq;
use crate::consts::*;
use crate::level::GhostDef;

/// Current patrol leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Toward final z
    Forward,
    /// Toward initial z
    Backward,
    /// Toward final x
    Left,
    /// Toward initial x
    Right,
    None,
}

/// A patrolling ghost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ghost {
    pub kind: ObjectKind,
    pub position: Vec3,
    pub initial: Vec3,
    pub final_position: Vec3,
    pub direction: Direction,
    /// Facing angle about the vertical axis (radians)
    pub rotation: f32,
    pub speed: f32,
    pub freeze_countdown: f32,
}

impl Ghost {
    pub fn new(def: &GhostDef, speed: f32) -> Self {
        Self {
            kind: def.kind,
            position: def.initial,
            initial: def.initial,
            final_position: def.final_position,
            direction: Direction::None,
            rotation: 0.0,
            speed,
            freeze_countdown: 0.0,
        }
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.freeze_countdown > 0.0
    }

    pub fn freeze(&mut self, countdown: f32) {
        self.freeze_countdown = countdown;
    }

    /// Render scale for the current camera mode
    pub fn size(camera_mode: CameraMode) -> f32 {
        match camera_mode {
            CameraMode::LookAt => GHOST_LOOKAT_SIZE,
            CameraMode::FreeCam => GHOST_FREE_CAM_SIZE,
        }
    }

    /// Collision sphere for the current camera mode
    pub fn sphere(&self, camera_mode: CameraMode) -> Sphere {
        let radius = match camera_mode {
            CameraMode::LookAt => GHOST_LOOKAT_SIZE,
            CameraMode::FreeCam => GHOST_FREE_CAM_COLLISION_RADIUS,
        };
        Sphere::new(self.position, radius)
    }

    /// Leg to walk from the current position
    pub fn next_direction(&self) -> Direction {
        let eq = |a: f32, b: f32| approx_eq(a, b, WAYPOINT_EPSILON);
        let p = self.position;
        let at_initial_x = eq(p.x, self.initial.x);
        let at_initial_z = eq(p.z, self.initial.z);
        let at_final_x = eq(p.x, self.final_position.x);
        let at_final_z = eq(p.z, self.final_position.z);

        if at_initial_x && !at_initial_z {
            Direction::Backward
        } else if at_final_x && !at_final_z {
            Direction::Forward
        } else if at_initial_x && at_initial_z {
            Direction::Left
        } else if at_final_x && at_final_z {
            Direction::Right
        } else {
            self.direction
        }
    }

    /// One patrol tick.
    ///
    /// The freeze countdown ticks down even on frames where the ghost stands
    /// still, so a frozen ghost thaws after a fixed number of ticks.
    pub fn update(&mut self, dt: f32, game_over: bool) {
        let frozen = self.is_frozen();
        self.freeze_countdown = (self.freeze_countdown - FREEZE_DECREMENT).max(0.0);
        if frozen || game_over {
            return;
        }

        self.direction = self.next_direction();
        let step = self.speed * dt;
        match self.direction {
            Direction::Forward => {
                self.position.z = (self.position.z - step).max(self.final_position.z);
                self.rotation = PI;
            }
            Direction::Backward => {
                self.position.z = (self.position.z + step).min(self.initial.z);
                self.rotation = 0.0;
            }
            Direction::Right => {
                self.position.x = (self.position.x + step).min(self.initial.x);
                self.rotation = FRAC_PI_2;
            }
            Direction::Left => {
                self.position.x = (self.position.x - step).max(self.final_position.x);
                self.rotation = -FRAC_PI_2;
            }
            Direction::None => {}
        }
    }

    /// True when this ghost catches `player`; never while frozen
    pub fn collided(&self, player: &Sphere, camera_mode: CameraMode) -> bool {
        if self.is_frozen() {
            return false;
        }
        sphere_sphere_overlap(&self.sphere(camera_mode), player)
    }
}
