//! Collision tests between boxes and spheres
//!
//! The tricky part of the maze: turning a sphere-vs-wall contact into a clean,
//! axis-aligned direction the movement resolver can cancel against. All
//! functions here are pure and never produce NaN; a zero vector means
//! "no collision".
//!
//! Sign conventions:
//! - Contact directions (`sphere_aabb_collision_direction`) point from the
//!   sphere toward the obstacle.
//! - Penetration offsets (`boundary_penetration`, `sphere_box_offset`,
//!   `sphere_box_penetration`) point toward the valid region, i.e. the way the
//!   penetrating volume has to move to get back inside.

use glam::Vec3;

use super::geometry::{Aabb, Sphere};

/// Squared length below which a vector counts as zero
const ZERO_LENGTH_SQ: f32 = 1e-12;

/// True iff the boxes overlap on all three axes (touching counts)
#[inline]
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.min.x <= b.max.x
        && a.max.x >= b.min.x
        && a.min.y <= b.max.y
        && a.max.y >= b.min.y
        && a.min.z <= b.max.z
        && a.max.z >= b.min.z
}

/// Offset that moves `inner` back inside `outer`, per axis.
///
/// Zero on an axis means `inner` is fully inside on that axis.
pub fn boundary_penetration(inner: &Aabb, outer: &Aabb) -> Vec3 {
    let mut offset = Vec3::ZERO;
    for axis in 0..3 {
        if inner.min[axis] < outer.min[axis] {
            offset[axis] = outer.min[axis] - inner.min[axis];
        } else if inner.max[axis] > outer.max[axis] {
            offset[axis] = outer.max[axis] - inner.max[axis];
        }
    }
    offset
}

/// Raw offset that moves a sphere poking out of `bounds` back inside
pub fn sphere_box_offset(bounds: &Aabb, sphere: &Sphere) -> Vec3 {
    let mut offset = Vec3::ZERO;
    for axis in 0..3 {
        let below = bounds.min[axis] - (sphere.center[axis] - sphere.radius);
        let above = (sphere.center[axis] + sphere.radius) - bounds.max[axis];
        if below > 0.0 {
            offset[axis] = below;
        } else if above > 0.0 {
            offset[axis] = -above;
        }
    }
    offset
}

/// Unit push direction for a sphere leaving `bounds`, each component in {-1, 0, 1}.
///
/// Components are rounded independently, so a sphere poking out of a corner
/// by similar depths gets pushed back on both axes.
pub fn sphere_box_penetration(bounds: &Aabb, sphere: &Sphere) -> Vec3 {
    let offset = sphere_box_offset(bounds, sphere);
    if offset.length_squared() <= ZERO_LENGTH_SQ {
        return Vec3::ZERO;
    }
    offset.normalize().round()
}

/// Point of `bounds` closest to the sphere center
#[inline]
pub fn closest_point_on_box(bounds: &Aabb, sphere: &Sphere) -> Vec3 {
    sphere.center.min(bounds.max).max(bounds.min)
}

/// Contact direction of a sphere touching a wall box.
///
/// Returns the axis-aligned unit vector pointing from the sphere toward the
/// box, or zero when they don't touch. Near edges and corners the axis with
/// the largest component wins (ties go x, then y, then z). A center inside the
/// box has no defined direction and reports no collision.
pub fn sphere_aabb_collision_direction(bounds: &Aabb, sphere: &Sphere) -> Vec3 {
    let closest = closest_point_on_box(bounds, sphere);
    let to_box = closest - sphere.center;
    if to_box.length() > sphere.radius {
        return Vec3::ZERO;
    }
    snap_to_dominant_axis(to_box)
}

/// True iff the spheres overlap (touching doesn't count)
#[inline]
pub fn sphere_sphere_overlap(a: &Sphere, b: &Sphere) -> bool {
    a.center.distance(b.center) < a.radius + b.radius
}

/// Keep only the largest component of `v`, as ±1
pub fn snap_to_dominant_axis(v: Vec3) -> Vec3 {
    if v.length_squared() <= ZERO_LENGTH_SQ || !v.is_finite() {
        return Vec3::ZERO;
    }
    let a = v.abs();
    let axis = if a.x >= a.y && a.x >= a.z {
        0
    } else if a.y >= a.z {
        1
    } else {
        2
    };
    let mut snapped = Vec3::ZERO;
    snapped[axis] = v[axis].signum();
    snapped
}
