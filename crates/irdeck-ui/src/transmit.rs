//! Outbound command abstraction for the infrared transmitter.

use crate::input::Button;

/// Abstract remote action destined for infrared transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
}

impl Command {
    /// All commands in pad order.
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::Ok,
        Self::Back,
    ];

    /// Key into the device's IR signal table.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Ok => "Ok",
            Self::Back => "Back",
        }
    }

    /// 1:1 mapping from a logical pad button. `None` for keys that never
    /// transmit (system buttons).
    pub const fn for_button(button: Button) -> Option<Self> {
        match button {
            Button::Up => Some(Self::Up),
            Button::Down => Some(Self::Down),
            Button::Left => Some(Self::Left),
            Button::Right => Some(Self::Right),
            Button::Ok => Some(Self::Ok),
            Button::Back => Some(Self::Back),
            Button::Power => None,
        }
    }
}

/// Trait for the infrared transmission collaborator.
///
/// `send` is one-way and synchronous from the caller's point of view;
/// encoding, retries, and queuing are entirely the implementation's
/// concern.
///
/// Implementations:
/// - the firmware's IR driver on real hardware
/// - [`crate::mock_transmitter::RecordingTransmitter`] for tests and
///   simulators
pub trait Transmitter {
    /// Transmit one command.
    fn send(&mut self, command: Command);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_buttons_map_one_to_one() {
        assert_eq!(Command::for_button(Button::Up), Some(Command::Up));
        assert_eq!(Command::for_button(Button::Down), Some(Command::Down));
        assert_eq!(Command::for_button(Button::Left), Some(Command::Left));
        assert_eq!(Command::for_button(Button::Right), Some(Command::Right));
        assert_eq!(Command::for_button(Button::Ok), Some(Command::Ok));
        assert_eq!(Command::for_button(Button::Back), Some(Command::Back));
    }

    #[test]
    fn system_buttons_do_not_transmit() {
        assert_eq!(Command::for_button(Button::Power), None);
    }

    #[test]
    fn names_are_distinct_table_keys() {
        for (i, a) in Command::ALL.iter().enumerate() {
            for b in Command::ALL.iter().skip(i + 1) {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
