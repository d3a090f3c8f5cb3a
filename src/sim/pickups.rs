//! Pellets and cherries
//!
//! Both are spheres the player eats on contact. A scan removes every
//! overlapping item in a single `retain` pass and reports how many went.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::sphere_sphere_overlap;
use super::geometry::Sphere;

/// Anything the player can eat
pub trait Collectible {
    fn sphere(&self) -> Sphere;
}

/// Regular pellet; eating all of them clears the level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pellet {
    pub position: Vec3,
    pub radius: f32,
}

impl Collectible for Pellet {
    fn sphere(&self) -> Sphere {
        Sphere::new(self.position, self.radius)
    }
}

/// Bonus item: speed boost plus ghost freeze
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cherry {
    pub position: Vec3,
    pub radius: f32,
}

impl Collectible for Cherry {
    fn sphere(&self) -> Sphere {
        Sphere::new(self.position, self.radius)
    }
}

/// Remove every item overlapping `player`, returning how many were removed
pub fn consume_overlapping<T: Collectible>(items: &mut Vec<T>, player: &Sphere) -> usize {
    let before = items.len();
    items.retain(|item| !sphere_sphere_overlap(player, &item.sphere()));
    before - items.len()
}

/// Speed boost granted by a cherry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedBoost {
    pub elapsed: f32,
    pub duration: f32,
    pub speed: f32,
}

impl SpeedBoost {
    pub fn new(duration: f32, speed: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
            speed,
        }
    }

    /// Advance the boost timer. Returns true once it has run out.
    pub fn update(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed > self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(count: usize) -> Vec<Pellet> {
        (0..count)
            .map(|i| Pellet {
                position: Vec3::new(i as f32 * 0.5, 0.0, 0.0),
                radius: 0.1,
            })
            .collect()
    }

    #[test]
    fn test_consume_exactly_overlapping() {
        let mut pellets = row(10);
        // Reaches pellets at x = 0, 0.5 and 1.0 but not 1.5
        let player = Sphere::new(Vec3::new(0.5, 0.0, 0.0), 0.7);
        assert_eq!(consume_overlapping(&mut pellets, &player), 3);
        assert_eq!(pellets.len(), 7);
        assert!(pellets.iter().all(|p| p.position.x >= 1.5));

        // Nothing left in reach
        assert_eq!(consume_overlapping(&mut pellets, &player), 0);
        assert_eq!(pellets.len(), 7);
    }

    #[test]
    fn test_adjacent_items_not_skipped() {
        let mut pellets = row(4);
        let player = Sphere::new(Vec3::new(0.75, 0.0, 0.0), 5.0);
        assert_eq!(consume_overlapping(&mut pellets, &player), 4);
        assert!(pellets.is_empty());
    }

    #[test]
    fn test_touching_is_not_eating() {
        let mut cherries = vec![Cherry {
            position: Vec3::new(1.0, 0.0, 0.0),
            radius: 0.5,
        }];
        let player = Sphere::new(Vec3::ZERO, 0.5);
        assert_eq!(consume_overlapping(&mut cherries, &player), 0);
    }

    #[test]
    fn test_boost_expires_after_duration() {
        let mut boost = SpeedBoost::new(1.5, 4.0);
        let dt = 1.0 / 120.0;
        let mut ticks = 0;
        while !boost.update(dt) {
            ticks += 1;
            assert!(ticks < 1000);
        }
        assert!((ticks as f32 * dt - 1.5).abs() < 0.05);
    }
}
