//! Back-gesture exit policy.
//!
//! The back key doubles as a navigation action and the way out of the
//! app; the configured [`ExitMode`] decides which gesture does which.
//! Both the app-level dispatch filter and the navigation view consult
//! this one function, so the two decisions cannot drift apart.

use crate::input::{Button, InputEvent};
use crate::settings::ExitMode;

/// What the input pipeline does with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitAction {
    /// The configured exit gesture: do not route to the view and do not
    /// transmit; the host's default back action tears the screen down.
    Consume,
    /// Everything else: hand the event to the view as usual.
    PassThrough,
}

/// Classify one event against the configured exit gesture.
///
/// Only a completed short or long press of the back key can ever be the
/// exit gesture; releases and all other keys always pass through.
///
/// ```
/// use irdeck_ui::exit_policy::{decide, ExitAction};
/// use irdeck_ui::input::{Button, InputEvent};
/// use irdeck_ui::settings::ExitMode;
///
/// let action = decide(InputEvent::Short(Button::Back), ExitMode::Press);
/// assert_eq!(action, ExitAction::Consume);
/// ```
pub const fn decide(event: InputEvent, exit_mode: ExitMode) -> ExitAction {
    match (event, exit_mode) {
        (InputEvent::Short(Button::Back), ExitMode::Press) => ExitAction::Consume,
        (InputEvent::Long(Button::Back), ExitMode::Hold) => ExitAction::Consume,
        _ => ExitAction::PassThrough,
    }
}

/// Boolean form of [`decide`] for the pre-dispatch filter.
pub const fn is_exit_gesture(event: InputEvent, exit_mode: ExitMode) -> bool {
    matches!(decide(event, exit_mode), ExitAction::Consume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_back_exits_in_press_mode() {
        assert_eq!(
            decide(InputEvent::Short(Button::Back), ExitMode::Press),
            ExitAction::Consume
        );
        assert_eq!(
            decide(InputEvent::Short(Button::Back), ExitMode::Hold),
            ExitAction::PassThrough
        );
    }

    #[test]
    fn long_back_exits_in_hold_mode() {
        assert_eq!(
            decide(InputEvent::Long(Button::Back), ExitMode::Hold),
            ExitAction::Consume
        );
        assert_eq!(
            decide(InputEvent::Long(Button::Back), ExitMode::Press),
            ExitAction::PassThrough
        );
    }

    #[test]
    fn releases_never_exit() {
        for mode in ExitMode::ALL {
            assert_eq!(
                decide(InputEvent::Release(Button::Back), mode),
                ExitAction::PassThrough
            );
        }
    }

    #[test]
    fn other_keys_always_pass_through() {
        let keys = [Button::Up, Button::Down, Button::Left, Button::Right, Button::Ok, Button::Power];
        for button in keys {
            for mode in ExitMode::ALL {
                assert!(!is_exit_gesture(InputEvent::Short(button), mode));
                assert!(!is_exit_gesture(InputEvent::Long(button), mode));
                assert!(!is_exit_gesture(InputEvent::Press(button), mode));
            }
        }
    }

    #[test]
    fn press_stage_of_back_passes_through() {
        for mode in ExitMode::ALL {
            assert!(!is_exit_gesture(InputEvent::Press(Button::Back), mode));
        }
    }
}
