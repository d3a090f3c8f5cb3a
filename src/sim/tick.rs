//! Fixed timestep simulation tick
//!
//! One call advances the game by `dt` in a fixed order:
//! ghosts, wall contacts, pellets, cherries, level boundary, boost timer,
//! player movement, then the game-over checks.

use glam::Vec3;

use super::collision::sphere_box_penetration;
use super::geometry::Sphere;
use super::movement::{MoveBasis, MoveIntents};
use super::pickups::{SpeedBoost, consume_overlapping};
use super::state::{CameraMode, GameEvent, GameState};
use super::walls::collect_wall_contacts;

/// Pellet milestones worth an info line
const EATEN_LOG_INTERVAL: u32 = 50;

/// Autopilot dead zone per axis
const AUTOPILOT_DEAD_ZONE: f32 = 0.05;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Player movement intents
    pub player: MoveIntents,
    /// Free camera movement intents
    pub camera: MoveIntents,
    /// Free camera view direction (from mouse look)
    pub view: Option<Vec3>,
    /// Switch between top-down and free camera
    pub toggle_camera: bool,
    /// Restart after game over
    pub restart: bool,
    /// Idle/demo mode - the player steers itself
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.toggle_camera {
        state.toggle_camera_mode();
    }

    if state.session.should_restart {
        state.restart();
        return;
    }
    if state.session.game_over && input.restart {
        state.session.should_restart = true;
    }

    // The camera keeps flying after game over
    if let Some(view) = input.view {
        state.camera.look(view);
    }
    if state.camera_mode == CameraMode::FreeCam {
        state.camera.step(&input.camera, dt);
        state.camera.confine(&state.level.sky);
    }

    let game_over = state.session.game_over;
    for ghost in &mut state.ghosts {
        ghost.update(dt, game_over);
    }
    if game_over {
        return;
    }

    state.time_ticks += 1;

    if state.player.in_intro() {
        if state.player.advance_intro(dt) {
            state.events.push(GameEvent::IntroFinished);
            log::debug!("Intro finished after {} ticks", state.time_ticks);
        }
        return;
    }

    let intents = if input.idle_mode {
        autopilot(state)
    } else {
        input.player
    };

    let player = state.player_sphere();
    state.contacts.clear();
    collect_wall_contacts(&state.walls, &player, &mut state.contacts);

    eat_pellets(state, &player);
    eat_cherries(state, &player);

    let push = sphere_box_penetration(state.bounds(), &player);
    push_boundary_contacts(push, &mut state.contacts);

    update_boost(state, dt);

    let basis = match state.camera_mode {
        CameraMode::LookAt => MoveBasis::top_down(),
        CameraMode::FreeCam => MoveBasis::from_view(state.camera.front),
    };
    let speed = state.player_speed();
    state.player.apply_intents(
        &intents,
        &basis,
        speed,
        dt,
        &state.contacts,
        state.camera_mode,
    );

    check_game_over(state);
}

/// Queue one single-axis contact per axis the boundary pushes on.
///
/// The push points inward, so each contact is its negation. A corner push
/// like (-1, 0, -1) becomes two contacts; the resolver only cancels axes a
/// contact is nonzero on, and a diagonal contact could let motion through.
fn push_boundary_contacts(push: Vec3, contacts: &mut Vec<Vec3>) {
    for axis in 0..3 {
        if push[axis] != 0.0 {
            let mut contact = Vec3::ZERO;
            contact[axis] = -push[axis];
            contacts.push(contact);
        }
    }
}

fn eat_pellets(state: &mut GameState, player: &Sphere) {
    let count = consume_overlapping(&mut state.pellets, player) as u32;
    if count == 0 {
        return;
    }
    let before = state.session.eaten;
    state.session.eaten += count;
    state.events.push(GameEvent::PelletsEaten { count });
    if before / EATEN_LOG_INTERVAL != state.session.eaten / EATEN_LOG_INTERVAL {
        log::info!(
            "{} pellets eaten, {} left",
            state.session.eaten,
            state.pellets.len()
        );
    }
}

fn eat_cherries(state: &mut GameState, player: &Sphere) {
    if consume_overlapping(&mut state.cherries, player) == 0 {
        return;
    }
    let settings = &state.settings;
    state.boost = Some(SpeedBoost::new(settings.boost_duration, settings.boost_speed));
    let countdown = settings.effective_freeze_countdown();
    for ghost in &mut state.ghosts {
        ghost.freeze(countdown);
    }
    state.events.push(GameEvent::CherryEaten);
    log::info!(
        "Cherry eaten: speed boost, ghosts frozen ({} cherries left)",
        state.cherries.len()
    );
}

fn update_boost(state: &mut GameState, dt: f32) {
    let Some(boost) = state.boost.as_mut() else {
        return;
    };
    if boost.update(dt) {
        state.boost = None;
        state.events.push(GameEvent::SpeedBoostEnded);
        log::debug!("Speed boost ended");
    }
}

fn check_game_over(state: &mut GameState) {
    let player = state.player_sphere();
    let caught = state
        .ghosts
        .iter()
        .position(|ghost| ghost.collided(&player, state.camera_mode));
    if let Some(ghost) = caught {
        state.session.game_over = true;
        state.events.push(GameEvent::CaughtByGhost { ghost });
        log::info!(
            "Caught by ghost {} with {} pellets eaten",
            ghost,
            state.session.eaten
        );
    }

    state.session.won = state.pellets.is_empty();
    if state.session.won {
        state.session.game_over = true;
        state.events.push(GameEvent::LevelCleared);
        log::info!("Level cleared in {} ticks", state.time_ticks);
    }
}

/// Demo input: head for the nearest pellet in the top-down frame
pub fn autopilot(state: &GameState) -> MoveIntents {
    let position = state.player.position;
    let nearest = state.pellets.iter().min_by(|a, b| {
        let dist_a = a.position.distance_squared(position);
        let dist_b = b.position.distance_squared(position);
        dist_a
            .partial_cmp(&dist_b)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let Some(target) = nearest else {
        return MoveIntents::default();
    };

    let delta = target.position - position;
    MoveIntents {
        forward: delta.z < -AUTOPILOT_DEAD_ZONE,
        backward: delta.z > AUTOPILOT_DEAD_ZONE,
        left: delta.x < -AUTOPILOT_DEAD_ZONE,
        right: delta.x > AUTOPILOT_DEAD_ZONE,
    }
}
