//! Movement cancellation against active contacts
//!
//! A candidate displacement is checked against every contact direction found
//! this tick. Axes that would push further into an obstacle are zeroed; the
//! rest of the motion is kept at full length, which is what lets the player
//! slide along walls.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Zero every axis of `movement` that would increase penetration along any contact.
///
/// Contacts point from the mover toward the obstacle. Each check uses the
/// original movement, and once an axis is cancelled it stays cancelled.
/// The result is never renormalized.
pub fn cancel_collision_movement(movement: Vec3, contacts: &[Vec3]) -> Vec3 {
    let mut resolved = movement;
    for contact in contacts {
        if contact.dot(movement) <= 0.0 {
            continue;
        }
        for axis in 0..3 {
            if contact[axis] != 0.0 {
                resolved[axis] = 0.0;
            }
        }
    }
    resolved
}

/// Boolean movement intents from the input layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntents {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntents {
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Held intents in application order
    pub fn held(&self) -> impl Iterator<Item = Intent> {
        [
            (self.backward, Intent::Backward),
            (self.forward, Intent::Forward),
            (self.right, Intent::Right),
            (self.left, Intent::Left),
        ]
        .into_iter()
        .filter_map(|(held, intent)| held.then_some(intent))
    }
}

/// One held intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Backward,
    Forward,
    Right,
    Left,
}

/// Horizontal directions that "forward" and "right" map to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl Default for MoveBasis {
    fn default() -> Self {
        Self::top_down()
    }
}

impl MoveBasis {
    /// Top-down camera: screen up is world -z
    pub fn top_down() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
        }
    }

    /// Derive from a camera view vector, flattened onto the floor plane.
    ///
    /// A view looking straight down has no horizontal part and falls back to
    /// the top-down basis.
    pub fn from_view(view: Vec3) -> Self {
        let flat = Vec3::new(view.x, 0.0, view.z);
        if flat.length_squared() < 1e-8 {
            return Self::top_down();
        }
        let forward = flat.normalize();
        Self {
            forward,
            right: forward.cross(Vec3::Y),
        }
    }

    /// Unit direction for an intent
    pub fn direction(&self, intent: Intent) -> Vec3 {
        match intent {
            Intent::Forward => self.forward,
            Intent::Backward => -self.forward,
            Intent::Right => self.right,
            Intent::Left => -self.right,
        }
    }
}
