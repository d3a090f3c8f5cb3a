//! Per-object draw records

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

use crate::sim::state::ObjectKind;

/// One draw call: which mesh, which shading path, where
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInstance {
    pub kind: ObjectKind,
    pub mesh: String,
    pub model: Mat4,
}

impl RenderInstance {
    pub fn new(kind: ObjectKind, mesh: &str, model: Mat4) -> Self {
        Self {
            kind,
            mesh: mesh.to_string(),
            model,
        }
    }

    /// Translate, then rotate about y, then scale
    pub fn placed(kind: ObjectKind, mesh: &str, position: Vec3, rotation_y: f32, scale: Vec3) -> Self {
        Self::new(
            kind,
            mesh,
            Mat4::from_scale_rotation_translation(scale, Quat::from_rotation_y(rotation_y), position),
        )
    }

    pub fn position(&self) -> Vec3 {
        self.model.w_axis.truncate()
    }

    pub fn to_raw(&self) -> InstanceRaw {
        InstanceRaw {
            model: self.model,
            color: colors::for_kind(self.kind),
            object_id: self.kind.id(),
            _pad: [0; 3],
        }
    }
}

/// GPU instance record, ready for a vertex buffer
///
/// `model` is column-major, the same bytes as `Mat4::to_cols_array`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: Mat4,
    pub color: [f32; 4],
    pub object_id: u32,
    pub _pad: [u32; 3],
}

/// Flat colors for untextured shading
pub mod colors {
    use crate::sim::state::ObjectKind;

    pub const WALL: [f32; 4] = [0.1, 0.2, 0.9, 1.0];
    pub const WALL_CENTER: [f32; 4] = [0.3, 0.3, 0.95, 1.0];
    pub const FLOOR: [f32; 4] = [0.05, 0.05, 0.08, 1.0];
    pub const SKY: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
    pub const PELLET: [f32; 4] = [1.0, 0.9, 0.7, 1.0];
    pub const PACMAN: [f32; 4] = [1.0, 0.9, 0.1, 1.0];
    pub const CHERRY: [f32; 4] = [0.9, 0.1, 0.15, 1.0];
    pub const DIGIT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GHOST: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
    pub const GHOST2: [f32; 4] = [1.0, 0.6, 0.8, 1.0];

    pub fn for_kind(kind: ObjectKind) -> [f32; 4] {
        match kind {
            ObjectKind::Sphere => PELLET,
            ObjectKind::Labyrinth1 | ObjectKind::Labyrinth2 => WALL,
            ObjectKind::Labyrinth3 => WALL_CENTER,
            ObjectKind::Plane => FLOOR,
            ObjectKind::Background => SKY,
            ObjectKind::Pacman => PACMAN,
            ObjectKind::Cherry => CHERRY,
            ObjectKind::Count1 | ObjectKind::Count2 | ObjectKind::Count3 => DIGIT,
            ObjectKind::Ghost => GHOST,
            ObjectKind::Ghost2 => GHOST2,
        }
    }
}
