//! Input state
//!
//! Keyboard and touch events only ever flip two direction flags. The flags are
//! snapshotted into a [`TickInput`] at the start of each tick.

use crate::sim::TickInput;

/// Key names as reported by `KeyboardEvent.key`
pub const KEY_LEFT: &str = "ArrowLeft";
pub const KEY_RIGHT: &str = "ArrowRight";

/// Direction flags plus touch-drag tracking
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Horizontal position of the last touch sample, while a touch is down
    touch_x: Option<f32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys are independent: holding both arrows sets both flags.
    pub fn key_down(&mut self, key: &str) {
        match key {
            KEY_LEFT => self.left = true,
            KEY_RIGHT => self.right = true,
            _ => {}
        }
    }

    pub fn key_up(&mut self, key: &str) {
        match key {
            KEY_LEFT => self.left = false,
            KEY_RIGHT => self.right = false,
            _ => {}
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.touch_x = Some(x);
    }

    /// Steer by drag direction since the previous sample. Touch steering is
    /// exclusive, and a sample with no horizontal change steers left.
    pub fn touch_move(&mut self, x: f32) {
        let Some(last) = self.touch_x else {
            return;
        };
        if x - last > 0.0 {
            self.right = true;
            self.left = false;
        } else {
            self.left = true;
            self.right = false;
        }
        self.touch_x = Some(x);
    }

    pub fn touch_end(&mut self) {
        self.touch_x = None;
        self.left = false;
        self.right = false;
    }

    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_independent() {
        let mut input = InputState::new();
        input.key_down(KEY_LEFT);
        input.key_down(KEY_RIGHT);
        assert_eq!(
            input.snapshot(),
            TickInput {
                left: true,
                right: true
            }
        );

        input.key_up(KEY_LEFT);
        assert!(!input.left);
        assert!(input.right);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut input = InputState::new();
        input.key_down("a");
        input.key_down(" ");
        assert_eq!(input.snapshot(), TickInput::default());
    }

    #[test]
    fn test_touch_drag_is_exclusive() {
        let mut input = InputState::new();
        input.touch_start(100.0);

        input.touch_move(120.0);
        assert!(input.right && !input.left);

        input.touch_move(110.0);
        assert!(input.left && !input.right);

        // No movement steers left
        input.touch_move(140.0);
        input.touch_move(140.0);
        assert!(input.left && !input.right);
    }

    #[test]
    fn test_touch_move_without_start_is_ignored() {
        let mut input = InputState::new();
        input.touch_move(50.0);
        assert_eq!(input.snapshot(), TickInput::default());
    }

    #[test]
    fn test_touch_end_clears_flags() {
        let mut input = InputState::new();
        input.key_down(KEY_RIGHT);
        input.touch_start(10.0);
        input.touch_move(5.0);
        input.touch_end();
        assert_eq!(input.snapshot(), TickInput::default());

        // Origin is gone too
        input.touch_move(80.0);
        assert_eq!(input.snapshot(), TickInput::default());
    }
}
