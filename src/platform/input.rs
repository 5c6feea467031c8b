//! Keyboard mapping and input sources
//!
//! Key handlers only flip two booleans; the driver samples them once per
//! tick into a [`TickInput`].

use crate::sim::{GameState, TickInput};

/// Paddle controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Up,
    Down,
}

/// Map a DOM `KeyboardEvent.key` value to a control
pub fn control_for_key(key: &str) -> Option<Control> {
    match key {
        "w" | "W" | "ArrowUp" => Some(Control::Up),
        "s" | "S" | "ArrowDown" => Some(Control::Down),
        _ => None,
    }
}

/// Something that decides the player's input for the next tick
pub trait InputSource {
    fn sample(&mut self, state: &GameState) -> TickInput;
}

/// Held-key flags written by key events (last writer wins)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up_held: bool,
    pub down_held: bool,
}

impl KeyState {
    /// Apply a key press or release. Returns true if the key is a control.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        match control_for_key(key) {
            Some(Control::Up) => self.up_held = pressed,
            Some(Control::Down) => self.down_held = pressed,
            None => return false,
        }
        true
    }

    pub fn snapshot(&self) -> TickInput {
        TickInput {
            up_held: self.up_held,
            down_held: self.down_held,
        }
    }
}

impl InputSource for KeyState {
    fn sample(&mut self, _state: &GameState) -> TickInput {
        self.snapshot()
    }
}

/// Plays the left paddle by chasing the ball's center (demo mode)
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Distance from the paddle center the ball may drift before it reacts
    pub slack: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { slack: 12.0 }
    }
}

impl InputSource for Autopilot {
    fn sample(&mut self, state: &GameState) -> TickInput {
        let offset = state.ball.center_y() - state.player.center_y();
        TickInput {
            up_held: offset < -self.slack,
            down_held: offset > self.slack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Court;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_key_mapping() {
        for key in ["w", "W", "ArrowUp"] {
            assert_eq!(control_for_key(key), Some(Control::Up));
        }
        for key in ["s", "S", "ArrowDown"] {
            assert_eq!(control_for_key(key), Some(Control::Down));
        }
        assert_eq!(control_for_key("x"), None);
        assert_eq!(control_for_key("Enter"), None);
    }

    #[test]
    fn test_press_and_release() {
        let mut keys = KeyState::default();
        assert!(keys.handle_key("w", true));
        assert!(keys.handle_key("ArrowDown", true));
        assert_eq!(
            keys.snapshot(),
            TickInput {
                up_held: true,
                down_held: true
            }
        );

        // Releasing any up key clears up, even if another is still down
        keys.handle_key("ArrowUp", true);
        keys.handle_key("W", false);
        assert!(!keys.up_held);
        assert!(keys.down_held);

        assert!(!keys.handle_key("q", true));
        assert_eq!(
            keys.snapshot(),
            TickInput {
                up_held: false,
                down_held: true
            }
        );
    }

    #[test]
    fn test_autopilot_follows_ball() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut state = GameState::new(Court::default(), Tuning::default(), &mut rng);
        let mut pilot = Autopilot::default();

        state.ball.pos.y = 20.0;
        assert_eq!(
            pilot.sample(&state),
            TickInput {
                up_held: true,
                down_held: false
            }
        );

        state.ball.pos.y = 350.0;
        assert_eq!(
            pilot.sample(&state),
            TickInput {
                up_held: false,
                down_held: true
            }
        );

        state.ball.pos.y = state.player.center_y() - state.ball.size / 2.0;
        assert_eq!(pilot.sample(&state), TickInput::default());
    }
}
