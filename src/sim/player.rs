//! The player sphere
//!
//! Movement is one displacement per held intent, each resolved against the
//! contacts gathered this tick before it is applied.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::geometry::Sphere;
use super::movement::{Intent, MoveBasis, MoveIntents, cancel_collision_movement};
use super::state::CameraMode;
use crate::consts::*;
use crate::normalize_angle;

/// Point on a cubic Bézier curve at `t` in [0, 1]
pub fn bezier_point(control: &[Vec3; 4], t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    control[0] * (u * u * u)
        + control[1] * (3.0 * u * u * t)
        + control[2] * (3.0 * u * t * t)
        + control[3] * (t * t * t)
}

/// Level-start flight that drops the player into the maze
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntroFlight {
    pub control: [Vec3; 4],
    pub elapsed: f32,
    pub duration: f32,
}

impl IntroFlight {
    pub fn new(path: [Vec3; 3], landing: Vec3, duration: f32) -> Self {
        Self {
            control: [path[0], path[1], path[2], landing],
            elapsed: 0.0,
            duration,
        }
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }

    pub fn position(&self) -> Vec3 {
        bezier_point(&self.control, self.progress())
    }

    /// Advance the flight. Returns true once it has landed.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.progress() >= 1.0
    }
}

/// Facing angle for an intent in the top-down view
pub fn facing(intent: Intent) -> f32 {
    let angle = match intent {
        Intent::Forward => FRAC_PI_2,
        Intent::Backward => -FRAC_PI_2,
        Intent::Right => 0.0,
        Intent::Left => PI,
    };
    normalize_angle(angle)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
    pub start: Vec3,
    /// Facing angle about the vertical axis (radians)
    pub rotation: f32,
    pub intro: Option<IntroFlight>,
}

impl Player {
    pub fn new(start: Vec3, intro: Option<IntroFlight>) -> Self {
        let position = intro.map_or(start, |flight| flight.position());
        Self {
            position,
            start,
            rotation: 0.0,
            intro,
        }
    }

    /// Render scale for the current camera mode
    pub fn size(camera_mode: CameraMode) -> f32 {
        match camera_mode {
            CameraMode::LookAt => PLAYER_LOOKAT_SIZE,
            CameraMode::FreeCam => PLAYER_FREE_CAM_SIZE,
        }
    }

    /// Collision sphere: render size plus `margin`
    pub fn sphere(&self, camera_mode: CameraMode, margin: f32) -> Sphere {
        Sphere::new(self.position, Self::size(camera_mode) + margin)
    }

    pub fn in_intro(&self) -> bool {
        self.intro.is_some()
    }

    /// Fly the intro. Returns true on the tick the player lands.
    pub fn advance_intro(&mut self, dt: f32) -> bool {
        let Some(flight) = self.intro.as_mut() else {
            return false;
        };
        let landed = flight.advance(dt);
        self.position = flight.position();
        if landed {
            self.position = self.start;
            self.intro = None;
        }
        landed
    }

    /// Move once per held intent, cancelling motion into any contact
    pub fn apply_intents(
        &mut self,
        intents: &MoveIntents,
        basis: &MoveBasis,
        speed: f32,
        dt: f32,
        contacts: &[Vec3],
        camera_mode: CameraMode,
    ) {
        for intent in intents.held() {
            let movement = basis.direction(intent) * speed * dt;
            self.position += cancel_collision_movement(movement, contacts);
            if camera_mode == CameraMode::LookAt {
                self.rotation = facing(intent);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_intro() -> IntroFlight {
        IntroFlight::new(
            [
                Vec3::new(1.0, 10.0, 3.0),
                Vec3::new(6.0, 7.0, 6.0),
                Vec3::new(-6.0, 3.0, 2.0),
            ],
            Vec3::new(0.0, -1.0, -1.0),
            INTRO_DURATION,
        )
    }

    #[test]
    fn test_bezier_endpoints() {
        let flight = classic_intro();
        assert_eq!(bezier_point(&flight.control, 0.0), Vec3::new(1.0, 10.0, 3.0));
        assert!((bezier_point(&flight.control, 1.0) - Vec3::new(0.0, -1.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_intro_lands_on_start() {
        let start = Vec3::new(0.0, -1.0, -1.0);
        let mut player = Player::new(start, Some(classic_intro()));
        assert_eq!(player.position, Vec3::new(1.0, 10.0, 3.0));

        let mut ticks = 0;
        while !player.advance_intro(SIM_DT) {
            ticks += 1;
            assert!(ticks < 1000);
        }
        assert_eq!(player.position, start);
        assert!(!player.in_intro());
        assert!(!player.advance_intro(SIM_DT));
    }

    #[test]
    fn test_free_movement() {
        let mut player = Player::new(Vec3::ZERO, None);
        let intents = MoveIntents {
            right: true,
            ..Default::default()
        };
        player.apply_intents(&intents, &MoveBasis::top_down(), 2.4, 0.5, &[], CameraMode::LookAt);
        assert!((player.position - Vec3::new(1.2, 0.0, 0.0)).length() < 1e-6);
        assert_eq!(player.rotation, 0.0);
    }

    #[test]
    fn test_diagonal_slides_along_wall() {
        let mut player = Player::new(Vec3::ZERO, None);
        let intents = MoveIntents {
            forward: true,
            right: true,
            ..Default::default()
        };
        player.apply_intents(
            &intents,
            &MoveBasis::top_down(),
            1.0,
            1.0,
            &[Vec3::X],
            CameraMode::LookAt,
        );
        // Right is blocked, forward (-z) keeps its full length
        assert!((player.position - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
        assert_eq!(player.rotation, 0.0);
    }

    #[test]
    fn test_facing_by_intent() {
        assert_eq!(facing(Intent::Forward), FRAC_PI_2);
        assert_eq!(facing(Intent::Backward), -FRAC_PI_2);
        assert_eq!(facing(Intent::Right), 0.0);
        assert!((facing(Intent::Left).abs() - PI).abs() < 1e-6);
    }

    #[test]
    fn test_free_cam_keeps_rotation() {
        let mut player = Player::new(Vec3::ZERO, None);
        let intents = MoveIntents {
            left: true,
            ..Default::default()
        };
        player.apply_intents(&intents, &MoveBasis::top_down(), 1.0, 0.1, &[], CameraMode::FreeCam);
        assert_eq!(player.rotation, 0.0);
        assert!(player.position.x < 0.0);
    }

    #[test]
    fn test_sphere_radius_per_mode() {
        let player = Player::new(Vec3::ZERO, None);
        assert!((player.sphere(CameraMode::LookAt, COLLISION_MARGIN).radius - 0.35).abs() < 1e-6);
        assert!((player.sphere(CameraMode::FreeCam, COLLISION_MARGIN).radius - 0.15).abs() < 1e-6);
    }
}
