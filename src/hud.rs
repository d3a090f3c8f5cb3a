//! HUD data
//!
//! The eaten counter is drawn as three digit meshes named `N_0` .. `N_9`
//! (ones, tens, hundreds). Text rendering itself happens outside the crate.

use serde::{Deserialize, Serialize};

use crate::sim::state::{GameState, ObjectKind};

/// Largest count the three-digit counter shows
pub const COUNTER_MAX: u32 = 999;

/// Counter digits as (ones, tens, hundreds), saturating at 999
pub fn counter_digits(count: u32) -> [u8; 3] {
    let count = count.min(COUNTER_MAX);
    [
        (count % 10) as u8,
        (count / 10 % 10) as u8,
        (count / 100) as u8,
    ]
}

/// Mesh name for a digit
pub fn digit_mesh(digit: u8) -> String {
    format!("N_{digit}")
}

/// Object kinds of the three counter slots, ones first
pub const COUNTER_SLOTS: [ObjectKind; 3] = [ObjectKind::Count1, ObjectKind::Count2, ObjectKind::Count3];

/// End-of-level overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    Won,
    GameOver,
}

impl Overlay {
    pub fn message(&self) -> &'static str {
        match self {
            Overlay::Won => "You won! Press R to play again",
            Overlay::GameOver => "Game over! Press R to restart",
        }
    }
}

/// Everything the HUD layer reads after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub eaten: u32,
    pub remaining: usize,
    pub digits: [u8; 3],
    pub game_over: bool,
    pub won: bool,
    pub should_restart: bool,
    pub boosted: bool,
    pub ghosts_frozen: bool,
    pub overlay: Option<Overlay>,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let session = &state.session;
        let overlay = match (session.won, session.game_over) {
            (true, _) => Some(Overlay::Won),
            (false, true) => Some(Overlay::GameOver),
            _ => None,
        };
        Self {
            eaten: session.eaten,
            remaining: state.pellets.len(),
            digits: counter_digits(session.eaten),
            game_over: session.game_over,
            won: session.won,
            should_restart: session.should_restart,
            boosted: state.boost.is_some(),
            ghosts_frozen: state.ghosts.iter().any(|g| g.is_frozen()),
            overlay,
        }
    }

    /// Digit mesh per counter slot, ones first
    pub fn counter_meshes(&self) -> [(ObjectKind, String); 3] {
        [0, 1, 2].map(|i| (COUNTER_SLOTS[i], digit_mesh(self.digits[i])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_counter_digits() {
        assert_eq!(counter_digits(0), [0, 0, 0]);
        assert_eq!(counter_digits(7), [7, 0, 0]);
        assert_eq!(counter_digits(178), [8, 7, 1]);
        assert_eq!(counter_digits(5000), [9, 9, 9]);
    }

    #[test]
    fn test_digit_mesh_names() {
        assert_eq!(digit_mesh(0), "N_0");
        assert_eq!(digit_mesh(9), "N_9");
    }

    #[test]
    fn test_snapshot_from_state() {
        let mut state = GameState::classic(Settings::default()).unwrap();
        state.session.eaten = 42;
        let hud = HudSnapshot::from_state(&state);
        assert_eq!(hud.remaining, 178);
        assert_eq!(hud.overlay, None);
        assert_eq!(
            hud.counter_meshes(),
            [
                (ObjectKind::Count1, "N_2".to_string()),
                (ObjectKind::Count2, "N_4".to_string()),
                (ObjectKind::Count3, "N_0".to_string()),
            ]
        );

        state.session.game_over = true;
        assert_eq!(HudSnapshot::from_state(&state).overlay, Some(Overlay::GameOver));
        state.session.won = true;
        assert_eq!(HudSnapshot::from_state(&state).overlay, Some(Overlay::Won));
    }
}
