//! Scene draw list
//!
//! Turns the current `GameState` into the ordered list of draw calls the
//! external renderer issues each frame: sky, floor, walls, collectibles,
//! player, ghosts, HUD counter.

use glam::Vec3;

use super::instance::RenderInstance;
use crate::consts::*;
use crate::hud::HudSnapshot;
use crate::normalize_angle;
use crate::sim::ghost::Ghost;
use crate::sim::player::Player;
use crate::sim::state::{GameState, ObjectKind};

/// Where the three HUD digits hang above the maze, ones first
const COUNTER_ORIGIN: Vec3 = Vec3::new(1.0, 2.0, -9.5);
const COUNTER_SPACING: f32 = 1.0;
const COUNTER_SCALE: f32 = 0.5;

/// Build this frame's draw list
pub fn build(state: &GameState) -> Vec<RenderInstance> {
    let mut instances = Vec::with_capacity(
        2 + state.walls.len() + state.pellets.len() + state.cherries.len() + state.ghosts.len() + 4,
    );

    let sky = &state.level.sky;
    instances.push(RenderInstance::placed(
        ObjectKind::Background,
        "cube",
        sky.center(),
        0.0,
        sky.half_extents(),
    ));
    let floor = &state.level.bounds;
    instances.push(RenderInstance::placed(
        ObjectKind::Plane,
        "the_plane",
        Vec3::new(floor.center().x, FLOOR_Y, floor.center().z),
        0.0,
        Vec3::new(floor.half_extents().x, 1.0, floor.half_extents().z),
    ));

    instances.extend(
        state
            .walls
            .iter()
            .map(|wall| RenderInstance::new(wall.kind, &wall.mesh, wall.model)),
    );
    instances.extend(state.pellets.iter().map(|pellet| {
        RenderInstance::placed(
            ObjectKind::Sphere,
            "sphere",
            pellet.position,
            0.0,
            Vec3::splat(pellet.radius),
        )
    }));
    instances.extend(state.cherries.iter().map(|cherry| {
        RenderInstance::placed(
            ObjectKind::Cherry,
            "cherry",
            cherry.position,
            0.0,
            Vec3::splat(cherry.radius),
        )
    }));

    instances.push(RenderInstance::placed(
        ObjectKind::Pacman,
        "pacman",
        state.player.position,
        normalize_angle(state.player.rotation),
        Vec3::splat(Player::size(state.camera_mode)),
    ));

    let ghost_scale = Vec3::splat(Ghost::size(state.camera_mode));
    instances.extend(state.ghosts.iter().map(|ghost| {
        RenderInstance::placed(
            ghost.kind,
            "ghost",
            ghost.position,
            normalize_angle(ghost.rotation),
            ghost_scale,
        )
    }));

    let hud = HudSnapshot::from_state(state);
    for (slot, (kind, mesh)) in hud.counter_meshes().into_iter().enumerate() {
        // Ones sit rightmost
        let offset = Vec3::new(-(slot as f32) * COUNTER_SPACING, 0.0, 0.0);
        instances.push(RenderInstance::placed(
            kind,
            &mesh,
            COUNTER_ORIGIN + offset,
            0.0,
            Vec3::splat(COUNTER_SCALE),
        ));
    }

    instances
}
