//! Bounding volumes used for every collision test
//!
//! - `Aabb`: elementwise min/max corners, faces parallel to the world axes
//! - `Sphere`: center + radius, used for the player, ghosts and collectibles

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Build from two arbitrary corners (sorted per axis so min <= max holds)
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Bound a model-space box after it has been placed by `model`.
    ///
    /// All eight corners are transformed, so rotated meshes still get a box
    /// that encloses them.
    pub fn transformed(&self, model: &Mat4) -> Self {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for corner in self.corners() {
            let p = model.transform_point3(corner);
            min = min.min(p);
            max = max.max(p);
        }
        Self { min, max }
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    #[inline]
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// Bounding sphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_new_sorts_corners() {
        let aabb = Aabb::new(Vec3::new(1.0, -1.0, 2.0), Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(aabb.min, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_transformed_translate_scale() {
        let unit = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let model = Mat4::from_translation(Vec3::new(3.5, -1.0, 2.9))
            * Mat4::from_scale(Vec3::new(0.6, 0.5, 0.2));
        let bbox = unit.transformed(&model);
        assert!((bbox.min - Vec3::new(2.9, -1.5, 2.7)).length() < 1e-5);
        assert!((bbox.max - Vec3::new(4.1, -0.5, 3.1)).length() < 1e-5);
    }

    #[test]
    fn test_transformed_rotation_keeps_min_below_max() {
        let unit = Aabb::new(Vec3::new(-2.0, -1.0, -0.5), Vec3::new(2.0, 1.0, 0.5));
        let bbox = unit.transformed(&Mat4::from_rotation_y(FRAC_PI_2));
        assert!(bbox.min.cmple(bbox.max).all());
        // Long side now runs along z
        assert!((bbox.half_extents().z - 2.0).abs() < 1e-5);
        assert!((bbox.half_extents().x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_contains_point_inclusive() {
        let aabb = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::ONE);
        assert!(aabb.contains_point(Vec3::new(1.0, 0.0, -1.0)));
        assert!(!aabb.contains_point(Vec3::new(1.01, 0.0, 0.0)));
        assert_eq!(aabb.center(), Vec3::ZERO);
    }
}
