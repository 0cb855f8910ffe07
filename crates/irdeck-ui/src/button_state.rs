//! Per-button pressed flags for the navigation pad.

use crate::input::Button;

/// Six independent pressed flags, one per logical remote button.
///
/// A flag is true while its key is held (Up/Down/Left/Right/Ok) or while
/// the back gesture is in flight (Back). Mutated only by the input path;
/// rendering reads a copy and never writes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    ok: bool,
    back: bool,
}

impl ButtonState {
    /// All flags released.
    pub const fn new() -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            ok: false,
            back: false,
        }
    }

    /// Unconditionally overwrite one flag. Keys outside the six logical
    /// buttons are ignored.
    pub fn set(&mut self, button: Button, pressed: bool) {
        match button {
            Button::Up => self.up = pressed,
            Button::Down => self.down = pressed,
            Button::Left => self.left = pressed,
            Button::Right => self.right = pressed,
            Button::Ok => self.ok = pressed,
            Button::Back => self.back = pressed,
            Button::Power => {}
        }
    }

    /// Current flag for a button. Keys outside the six report unpressed.
    pub const fn is_pressed(self, button: Button) -> bool {
        match button {
            Button::Up => self.up,
            Button::Down => self.down,
            Button::Left => self.left,
            Button::Right => self.right,
            Button::Ok => self.ok,
            Button::Back => self.back,
            Button::Power => false,
        }
    }

    /// True when no key is held.
    pub const fn all_released(self) -> bool {
        !(self.up || self.down || self.left || self.right || self.ok || self.back)
    }
}
