//! Free-flying camera
//!
//! In free-cam mode the camera moves along its own view vector. It is treated
//! as a small box and pushed back inside the sky box every tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::boundary_penetration;
use super::geometry::Aabb;
use super::movement::{Intent, MoveIntents};
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeCamera {
    pub position: Vec3,
    /// Unit view direction
    pub front: Vec3,
    pub speed: f32,
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 8.0, 8.0),
            front: Vec3::new(0.0, -1.0, -1.0).normalize(),
            speed: CAMERA_SPEED,
        }
    }
}

impl FreeCamera {
    /// Point the camera along `view`; a zero vector is ignored
    pub fn look(&mut self, view: Vec3) {
        if let Some(front) = view.try_normalize() {
            self.front = front;
        }
    }

    fn direction(&self, intent: Intent) -> Vec3 {
        let right = self.front.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X);
        match intent {
            Intent::Forward => self.front,
            Intent::Backward => -self.front,
            Intent::Right => right,
            Intent::Left => -right,
        }
    }

    pub fn step(&mut self, intents: &MoveIntents, dt: f32) {
        for intent in intents.held() {
            self.position += self.direction(intent) * self.speed * dt;
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_half_extents(self.position, Vec3::splat(CAMERA_HALF_EXTENT))
    }

    /// Push the camera back inside `sky`. Returns the applied offset.
    pub fn confine(&mut self, sky: &Aabb) -> Vec3 {
        let offset = boundary_penetration(&self.bounds(), sky);
        self.position += offset;
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sky() -> Aabb {
        Aabb::new(Vec3::new(-10.0, -40.0, -10.0), Vec3::new(10.0, 40.0, 10.0))
    }

    #[test]
    fn test_confine_inside_untouched() {
        let mut camera = FreeCamera::default();
        let before = camera.position;
        assert_eq!(camera.confine(&sky()), Vec3::ZERO);
        assert_eq!(camera.position, before);
    }

    #[test]
    fn test_confine_pushes_back() {
        let mut camera = FreeCamera {
            position: Vec3::new(11.0, 0.0, -12.0),
            ..Default::default()
        };
        let offset = camera.confine(&sky());
        assert!(offset.x < 0.0 && offset.z > 0.0 && offset.y == 0.0);
        assert!(camera.bounds().max.x <= 10.0 + 1e-5);
        assert!(camera.bounds().min.z >= -10.0 - 1e-5);
    }

    #[test]
    fn test_step_follows_view() {
        let mut camera = FreeCamera {
            position: Vec3::ZERO,
            ..Default::default()
        };
        camera.look(Vec3::new(0.0, 0.0, -2.0));
        let intents = MoveIntents {
            forward: true,
            ..Default::default()
        };
        camera.step(&intents, 1.0);
        assert!((camera.position - Vec3::new(0.0, 0.0, -CAMERA_SPEED)).length() < 1e-6);

        // Zero view keeps the old front
        camera.look(Vec3::ZERO);
        assert_eq!(camera.front, Vec3::NEG_Z);
    }
}
