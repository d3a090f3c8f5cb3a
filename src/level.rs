//! Level definitions
//!
//! A level is plain data: wall placements, ghost patrol rectangles, pellet and
//! cherry positions, and the boundary boxes. The classic maze is built in; other
//! levels can be supplied as JSON by an external level-definition step.
//!
//! Wall AABBs come from the model-space bounds of each wall mesh, which only the
//! model loader knows. Those bounds are handed over in a `MeshBounds` table.

use std::collections::HashMap;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::LevelError;
use crate::sim::geometry::Aabb;
use crate::sim::state::ObjectKind;

/// Wall placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallDef {
    pub translation: Vec3,
    pub scale: Vec3,
    /// Rotation about the vertical axis (radians)
    #[serde(default)]
    pub rotation_y: f32,
    /// Mesh whose model-space bounds give the wall its box
    pub mesh: String,
    pub kind: ObjectKind,
    /// Also place copies reflected across x = 0 and z = 0
    #[serde(default)]
    pub mirrored: bool,
}

impl WallDef {
    fn maze(x: f32, z: f32, sx: f32, sz: f32, mesh: &str, kind: ObjectKind, mirrored: bool) -> Self {
        Self {
            translation: Vec3::new(x, FLOOR_Y, z),
            scale: Vec3::new(sx, 0.5, sz),
            rotation_y: 0.0,
            mesh: mesh.to_string(),
            kind,
            mirrored,
        }
    }
}

/// Ghost patrol rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhostDef {
    pub kind: ObjectKind,
    /// Corner with the larger x and z
    pub initial: Vec3,
    /// Corner with the smaller x and z
    pub final_position: Vec3,
}

/// Complete level description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub name: String,
    /// Region the player sphere must stay inside
    pub bounds: Aabb,
    /// Region the free camera box must stay inside
    pub sky: Aabb,
    pub player_start: Vec3,
    /// First three control points of the intro flight (the fourth is `player_start`)
    pub intro_path: [Vec3; 3],
    pub walls: Vec<WallDef>,
    pub ghosts: Vec<GhostDef>,
    pub pellets: Vec<Vec3>,
    pub pellet_radius: f32,
    pub cherries: Vec<Vec3>,
    pub cherry_radius: f32,
}

impl Default for LevelDef {
    fn default() -> Self {
        Self::classic()
    }
}

impl LevelDef {
    /// The classic maze
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            bounds: Aabb::new(
                Vec3::new(-LEVEL_BOUNDARY, -5.0, -LEVEL_BOUNDARY),
                Vec3::new(LEVEL_BOUNDARY, 5.0, LEVEL_BOUNDARY),
            ),
            sky: Aabb::new(
                Vec3::new(-SKY_HALF_EXTENT, -SKY_HALF_HEIGHT, -SKY_HALF_EXTENT),
                Vec3::new(SKY_HALF_EXTENT, SKY_HALF_HEIGHT, SKY_HALF_EXTENT),
            ),
            player_start: Vec3::new(0.0, FLOOR_Y, -1.0),
            intro_path: [
                Vec3::new(1.0, 10.0, 3.0),
                Vec3::new(6.0, 7.0, 6.0),
                Vec3::new(-6.0, 3.0, 2.0),
            ],
            walls: classic_walls(),
            ghosts: vec![
                GhostDef {
                    kind: ObjectKind::Ghost,
                    initial: Vec3::new(8.5, -1.4, 8.5),
                    final_position: Vec3::new(-8.5, -1.4, -8.5),
                },
                GhostDef {
                    kind: ObjectKind::Ghost2,
                    initial: Vec3::new(3.2, -1.4, 2.0),
                    final_position: Vec3::new(-3.35, -1.4, -2.0),
                },
            ],
            pellets: classic_pellets(),
            pellet_radius: PELLET_RADIUS,
            cherries: classic_cherries(),
            cherry_radius: CHERRY_RADIUS,
        }
    }

    /// Parse and validate a JSON level
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: Self = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Read, parse and validate a JSON level file
    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path)?;
        let level = Self::from_json(&json)?;
        log::info!(
            "Loaded level '{}' from {} ({} walls, {} pellets)",
            level.name,
            path.display(),
            level.walls.len(),
            level.pellets.len()
        );
        Ok(level)
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.pellets.is_empty() {
            return Err(LevelError::EmptyLevel);
        }
        // Deserialized boxes skip the corner sort in `Aabb::new`
        for (name, aabb) in [("bounds", &self.bounds), ("sky", &self.sky)] {
            if !aabb.min.cmple(aabb.max).all() {
                return Err(LevelError::InvertedBox(name));
            }
        }
        for (index, ghost) in self.ghosts.iter().enumerate() {
            if ghost.initial.x < ghost.final_position.x || ghost.initial.z < ghost.final_position.z
            {
                return Err(LevelError::InvalidPatrol { index });
            }
        }
        Ok(())
    }
}

fn classic_walls() -> Vec<WallDef> {
    use ObjectKind::{Labyrinth2, Labyrinth3};

    // (x, z, scale x, scale z, mesh), mirrored into all four quadrants
    let quadrant = [
        (3.5, 2.9, 0.6, 0.2, "p22"),
        (3.0, 4.3, 0.4, 0.2, "p22"),
        (5.7, 6.5, 0.2, 0.4, "p2"),
        (3.3, 6.3, 0.2, 0.25, "p2"),
        (4.5, 5.0, 0.2, 0.25, "p2"),
        (2.2, 7.0, 0.3, 0.2, "p22"),
        (7.0, 4.0, 0.2, 0.3, "p2"),
        (6.5, 6.8, 0.2, 0.2, "p22"),
        (6.4, 4.0, 0.1, 0.2, "p22"),
        (4.5, 2.0, 0.2, 0.2, "p2"),
        (0.0, 7.0, 0.2, 0.1, "p2"),
        (0.0, 5.5, 0.6, 0.2, "p22"),
        (0.0, 4.0, 0.2, 0.4, "p2"),
        (6.4, 0.0, 0.2, 0.5, "p2"),
        (7.0, 0.0, 0.2, 0.2, "p22"),
    ];
    let center = [
        (0.0, 1.0, 0.4, 0.3, "p3"),
        (2.1, -0.2, 0.3, 0.2, "p33"),
        (-2.1, -0.2, 0.3, 0.2, "p33"),
        (1.5, -1.1, 0.125, 0.3, "p3"),
        (-1.5, -1.1, 0.125, 0.3, "p3"),
    ];

    quadrant
        .iter()
        .map(|&(x, z, sx, sz, mesh)| WallDef::maze(x, z, sx, sz, mesh, Labyrinth2, true))
        .chain(
            center
                .iter()
                .map(|&(x, z, sx, sz, mesh)| WallDef::maze(x, z, sx, sz, mesh, Labyrinth3, false)),
        )
        .collect()
}

fn classic_pellets() -> Vec<Vec3> {
    let pellet = |x: f32, z: f32| Vec3::new(x, PELLET_Y, z);
    let mut pellets = Vec::new();

    // Outer square: 33 per side, 0.5 apart, corners added separately
    for i in 0..33 {
        let along = 8.0 - 0.5 * i as f32;
        pellets.push(pellet(8.5, along));
        pellets.push(pellet(-8.5, along));
        pellets.push(pellet(along, 8.5));
        pellets.push(pellet(along, -8.5));
    }
    for (x, z) in [(8.5, 8.5), (-8.5, 8.5), (8.5, -8.5), (-8.5, -8.5)] {
        pellets.push(pellet(x, z));
    }

    // Inner rectangle around the ghost house
    for i in 0..7 {
        let z = -1.5 + 0.5 * i as f32;
        pellets.push(pellet(3.2, z));
        pellets.push(pellet(-3.35, z));
    }
    for i in 0..12 {
        let x = -2.85 + 0.5 * i as f32;
        pellets.push(pellet(x, -2.0));
        pellets.push(pellet(x, 2.0));
    }
    for (x, z) in [(-3.35, -2.0), (-3.35, 2.0), (3.2, -2.0), (3.2, 2.0)] {
        pellets.push(pellet(x, z));
    }

    pellets
}

fn classic_cherries() -> Vec<Vec3> {
    [(-4.5, -7.0), (4.5, 7.0), (4.5, -7.0), (-4.5, 7.0)]
        .into_iter()
        .map(|(x, z)| Vec3::new(x, CHERRY_Y, z))
        .collect()
}

/// Model-space bounds of each mesh, as reported by the model loader
#[derive(Debug, Clone, Default)]
pub struct MeshBounds {
    bounds: HashMap<String, Aabb>,
}

impl MeshBounds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds for the classic maze meshes, all spanning [-1, 1] on every axis
    pub fn classic() -> Self {
        Self::with_unit_cubes(&["p2", "p22", "p3", "p33"])
    }

    pub fn with_unit_cubes(names: &[&str]) -> Self {
        let mut table = Self::new();
        for name in names {
            table.insert(name, Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0)));
        }
        table
    }

    pub fn insert(&mut self, mesh: &str, bounds: Aabb) {
        self.bounds.insert(mesh.to_string(), bounds);
    }

    pub fn get(&self, mesh: &str) -> Result<&Aabb, LevelError> {
        self.bounds
            .get(mesh)
            .ok_or_else(|| LevelError::UnknownMesh(mesh.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_counts() {
        let level = LevelDef::classic();
        // 132 outer + 4 corners + 14 + 24 inner + 4 corners
        assert_eq!(level.pellets.len(), 178);
        assert_eq!(level.cherries.len(), 4);
        assert_eq!(level.ghosts.len(), 2);
        assert_eq!(level.walls.len(), 20);
        assert!(level.validate().is_ok());
    }

    #[test]
    fn test_classic_pellets_inside_bounds() {
        let level = LevelDef::classic();
        assert!(level.pellets.iter().all(|p| level.bounds.contains_point(*p)));
    }

    #[test]
    fn test_json_round_trip_keeps_layout() {
        let level = LevelDef::classic();
        let json = level.to_json().unwrap();
        let parsed = LevelDef::from_json(&json).unwrap();
        assert_eq!(parsed, level);
    }

    #[test]
    fn test_invalid_patrol_rejected() {
        let mut level = LevelDef::classic();
        level.ghosts[1].initial.x = -5.0;
        assert!(matches!(
            level.validate(),
            Err(LevelError::InvalidPatrol { index: 1 })
        ));
    }

    #[test]
    fn test_empty_level_rejected() {
        let mut level = LevelDef::classic();
        level.pellets.clear();
        assert!(matches!(level.validate(), Err(LevelError::EmptyLevel)));
    }

    #[test]
    fn test_inverted_boxes_rejected() {
        let mut level = LevelDef::classic();
        std::mem::swap(&mut level.bounds.min, &mut level.bounds.max);
        assert!(matches!(level.validate(), Err(LevelError::InvertedBox("bounds"))));

        let mut level = LevelDef::classic();
        level.sky.max.y = level.sky.min.y - 1.0;
        assert!(matches!(level.validate(), Err(LevelError::InvertedBox("sky"))));

        // Same check on the JSON path
        let mut level = LevelDef::classic();
        std::mem::swap(&mut level.bounds.min.x, &mut level.bounds.max.x);
        let json = serde_json::to_string(&level).unwrap();
        assert!(matches!(
            LevelDef::from_json(&json),
            Err(LevelError::InvertedBox("bounds"))
        ));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(
            LevelDef::from_json("{ not json"),
            Err(LevelError::Parse(_))
        ));
    }

    #[test]
    fn test_wall_defaults_from_json() {
        let json = r#"{"translation":[1.0,-1.0,2.0],"scale":[0.2,0.5,0.2],"mesh":"p2","kind":"Labyrinth2"}"#;
        let wall: WallDef = serde_json::from_str(json).unwrap();
        assert_eq!(wall.rotation_y, 0.0);
        assert!(!wall.mirrored);
    }

    #[test]
    fn test_mesh_bounds_lookup() {
        let meshes = MeshBounds::classic();
        assert!(meshes.get("p33").is_ok());
        assert!(matches!(meshes.get("p9"), Err(LevelError::UnknownMesh(name)) if name == "p9"));
    }
}
