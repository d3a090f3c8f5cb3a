//! Maze walls
//!
//! Walls are static boxes built once at level init from their placement and
//! the model-space bounds of their mesh. Every tick each wall is tested against
//! the player sphere and any contacts are queued for the movement resolver.

use glam::{Mat4, Quat, Vec3};

use super::collision::{aabb_overlap, sphere_aabb_collision_direction};
use super::geometry::{Aabb, Sphere};
use super::state::ObjectKind;
use crate::error::LevelError;
use crate::level::{MeshBounds, WallDef};

/// A placed wall
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub id: u32,
    pub kind: ObjectKind,
    pub mesh: String,
    pub model: Mat4,
    pub bbox: Aabb,
}

impl Wall {
    /// Place `mesh_bounds` with the wall's translate-rotate-scale model
    pub fn new(id: u32, def: &WallDef, translation: Vec3, mesh_bounds: &Aabb) -> Self {
        let model = Mat4::from_scale_rotation_translation(
            def.scale,
            Quat::from_rotation_y(def.rotation_y),
            translation,
        );
        Self {
            id,
            kind: def.kind,
            mesh: def.mesh.clone(),
            model,
            bbox: mesh_bounds.transformed(&model),
        }
    }
}

/// Translations a wall is placed at, the original first.
///
/// Mirrored walls are reflected across x = 0 and z = 0; a reflection that
/// would land on the same spot is skipped.
pub fn mirrored_translations(def: &WallDef) -> Vec<Vec3> {
    let t = def.translation;
    let mut out = vec![t];
    if !def.mirrored {
        return out;
    }
    if t.x != 0.0 {
        out.push(Vec3::new(-t.x, t.y, t.z));
    }
    if t.z != 0.0 {
        out.push(Vec3::new(t.x, t.y, -t.z));
    }
    if t.x != 0.0 && t.z != 0.0 {
        out.push(Vec3::new(-t.x, t.y, -t.z));
    }
    out
}

/// Build every wall of a level.
///
/// Walls lying entirely outside `level_bounds` can never be touched and are
/// dropped with a warning.
pub fn build_walls(
    defs: &[WallDef],
    meshes: &MeshBounds,
    level_bounds: &Aabb,
) -> Result<Vec<Wall>, LevelError> {
    let mut walls = Vec::new();
    let mut next_id = 0;
    for def in defs {
        let mesh_bounds = meshes.get(&def.mesh)?;
        for translation in mirrored_translations(def) {
            let wall = Wall::new(next_id, def, translation, mesh_bounds);
            next_id += 1;
            if !aabb_overlap(&wall.bbox, level_bounds) {
                log::warn!(
                    "Dropping wall {} ({}) at {:?}: outside level bounds",
                    wall.id,
                    wall.mesh,
                    translation
                );
                continue;
            }
            walls.push(wall);
        }
    }
    log::debug!("Built {} walls from {} definitions", walls.len(), defs.len());
    Ok(walls)
}

/// Append the contact direction of every wall touching `player`
pub fn collect_wall_contacts(walls: &[Wall], player: &Sphere, contacts: &mut Vec<Vec3>) {
    contacts.extend(
        walls
            .iter()
            .map(|wall| sphere_aabb_collision_direction(&wall.bbox, player))
            .filter(|direction| *direction != Vec3::ZERO),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelDef;

    fn def(x: f32, z: f32, mirrored: bool) -> WallDef {
        WallDef {
            translation: Vec3::new(x, -1.0, z),
            scale: Vec3::new(0.2, 0.5, 0.2),
            rotation_y: 0.0,
            mesh: "p2".to_string(),
            kind: ObjectKind::Labyrinth2,
            mirrored,
        }
    }

    #[test]
    fn test_mirror_copies() {
        assert_eq!(mirrored_translations(&def(3.0, 2.0, true)).len(), 4);
        assert_eq!(mirrored_translations(&def(0.0, 2.0, true)).len(), 2);
        assert_eq!(mirrored_translations(&def(3.0, 0.0, true)).len(), 2);
        assert_eq!(mirrored_translations(&def(3.0, 2.0, false)).len(), 1);
    }

    #[test]
    fn test_classic_wall_count() {
        let level = LevelDef::classic();
        let walls = build_walls(&level.walls, &MeshBounds::classic(), &level.bounds).unwrap();
        // 10 quadrant walls x4, 5 on an axis x2, 5 center walls
        assert_eq!(walls.len(), 10 * 4 + 5 * 2 + 5);
    }

    #[test]
    fn test_out_of_bounds_wall_dropped() {
        let bounds = Aabb::new(Vec3::splat(-9.0), Vec3::splat(9.0));
        let defs = [def(3.0, 2.0, false), def(20.0, 0.0, false)];
        let walls = build_walls(&defs, &MeshBounds::classic(), &bounds).unwrap();
        assert_eq!(walls.len(), 1);
        assert_eq!(walls[0].id, 0);
    }

    #[test]
    fn test_unknown_mesh() {
        let mut wall = def(1.0, 1.0, false);
        wall.mesh = "torus".to_string();
        let bounds = Aabb::new(Vec3::splat(-9.0), Vec3::splat(9.0));
        assert!(matches!(
            build_walls(&[wall], &MeshBounds::classic(), &bounds),
            Err(LevelError::UnknownMesh(_))
        ));
    }

    #[test]
    fn test_wall_bbox_from_model() {
        let wall = Wall::new(
            0,
            &def(3.0, 2.0, false),
            Vec3::new(3.0, -1.0, 2.0),
            &Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0)),
        );
        assert!((wall.bbox.min - Vec3::new(2.8, -1.5, 1.8)).length() < 1e-5);
        assert!((wall.bbox.max - Vec3::new(3.2, -0.5, 2.2)).length() < 1e-5);
    }

    #[test]
    fn test_contacts_only_for_touching_walls() {
        let unit = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let walls = [
            Wall::new(0, &def(1.0, 0.0, false), Vec3::new(1.0, -1.0, 0.0), &unit),
            Wall::new(1, &def(-5.0, 0.0, false), Vec3::new(-5.0, -1.0, 0.0), &unit),
        ];
        // Left face of wall 0 is at x = 0.8
        let player = Sphere::new(Vec3::new(0.5, -1.0, 0.0), 0.35);
        let mut contacts = Vec::new();
        collect_wall_contacts(&walls, &player, &mut contacts);
        assert_eq!(contacts, vec![Vec3::X]);
    }
}
