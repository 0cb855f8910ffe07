//! Application state: screen dispatch, exit-gesture filtering, and
//! settings synchronization.
//!
//! The app is the upstream input dispatcher. Before an event reaches the
//! navigation view it is checked against the same exit policy the view
//! consults; the exit gesture is never routed and instead raises
//! `exit_requested`, which the host treats as its default back action
//! (tear the screen down). Suppressing the event here keeps that default
//! action from racing the view's own handling.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::exit_policy;
use crate::input::{Button, InputEvent};
use crate::navigation_activity::NavigationActivity;
use crate::settings::RemoteSettings;
use crate::settings_activity::SettingsActivity;
use crate::transmit::Transmitter;
use crate::ui::{Activity, ActivityResult};

/// Screens the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Navigation,
    Settings,
}

/// Per-event collaborator bundle handed to activities.
///
/// `settings` is the configuration current at this event; activities
/// read it here instead of caching it, so a settings change applies to
/// the next event with no refresh step.
pub struct AppContext<'a> {
    pub settings: RemoteSettings,
    pub transmitter: &'a mut dyn Transmitter,
}

/// Application root owning the screens and the active settings.
pub struct App {
    screen: AppScreen,
    navigation: NavigationActivity,
    settings_screen: SettingsActivity,
    settings: RemoteSettings,
    exit_requested: bool,
    persist_settings: bool,
}

impl App {
    /// Create an app on the navigation screen with persisted settings.
    pub fn new() -> Self {
        Self::with_settings(RemoteSettings::load_or_default(), true)
    }

    /// Create an app with explicit settings and no persistence; used by
    /// tests and scenario harnesses.
    pub fn new_with_settings(settings: RemoteSettings) -> Self {
        Self::with_settings(settings, false)
    }

    fn with_settings(settings: RemoteSettings, persist_settings: bool) -> Self {
        let mut app = Self {
            screen: AppScreen::Navigation,
            navigation: NavigationActivity::new(),
            settings_screen: SettingsActivity::new(),
            settings,
            exit_requested: false,
            persist_settings,
        };
        app.navigation.on_enter();
        app
    }

    /// Handle one input event. Returns true if a redraw is needed.
    pub fn handle_input(&mut self, event: InputEvent, tx: &mut dyn Transmitter) -> bool {
        if self.screen == AppScreen::Navigation {
            // Same decision the view makes, taken one layer up so the
            // event never reaches the view and the host's default back
            // action runs instead.
            if exit_policy::is_exit_gesture(event, self.settings.exit_mode) {
                log::info!("exit gesture, leaving to host");
                self.exit_requested = true;
                return false;
            }
            if event == InputEvent::Long(Button::Ok) {
                self.switch_to(AppScreen::Settings);
                return true;
            }
        }

        let mut ctx = AppContext {
            settings: self.settings,
            transmitter: tx,
        };
        let result = match self.screen {
            AppScreen::Navigation => self.navigation.handle_input(event, &mut ctx),
            AppScreen::Settings => self.settings_screen.handle_input(event, &mut ctx),
        };

        let mut redraw = self.process_result(result);
        redraw |= self.sync_settings();
        redraw
    }

    /// Render the active screen.
    pub fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        match self.screen {
            AppScreen::Navigation => self.navigation.render(&self.settings, display),
            AppScreen::Settings => self.settings_screen.render(&self.settings, display),
        }
    }

    /// True once the exit gesture was seen; the host owns what happens
    /// next (the simulator quits, firmware pops the view).
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Settings current for the next event/draw.
    pub fn settings(&self) -> RemoteSettings {
        self.settings
    }

    /// The visible screen.
    pub fn current_screen(&self) -> AppScreen {
        self.screen
    }

    /// Navigation screen accessor for render collaborators and tests.
    pub fn navigation(&self) -> &NavigationActivity {
        &self.navigation
    }

    fn process_result(&mut self, result: ActivityResult) -> bool {
        match result {
            ActivityResult::Consumed => true,
            ActivityResult::NavigateBack => match self.screen {
                AppScreen::Settings => {
                    self.switch_to(AppScreen::Navigation);
                    true
                }
                AppScreen::Navigation => {
                    self.exit_requested = true;
                    false
                }
            },
            ActivityResult::NavigateTo(screen) => {
                self.switch_to(screen);
                true
            }
            ActivityResult::Ignored => false,
        }
    }

    fn switch_to(&mut self, screen: AppScreen) {
        if screen == self.screen {
            return;
        }
        match self.screen {
            AppScreen::Navigation => self.navigation.on_exit(),
            AppScreen::Settings => self.settings_screen.on_exit(),
        }
        self.screen = screen;
        match self.screen {
            AppScreen::Navigation => self.navigation.on_enter(),
            AppScreen::Settings => {
                self.settings_screen.set_settings(self.settings);
                self.settings_screen.on_enter();
            }
        }
    }

    /// Pull edits out of the settings screen and apply them immediately.
    fn sync_settings(&mut self) -> bool {
        let current = self.settings_screen.settings();
        if self.screen != AppScreen::Settings || current == self.settings {
            return false;
        }
        self.settings = current;
        if self.persist_settings {
            self.settings.persist();
        }
        true
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_transmitter::RecordingTransmitter;
    use crate::settings::{ExitMode, Orientation};
    use crate::test_display::TestDisplay;
    use crate::transmit::Command;

    fn app(exit_mode: ExitMode) -> App {
        App::new_with_settings(RemoteSettings {
            exit_mode,
            orientation: Orientation::Vertical,
        })
    }

    #[test]
    fn exit_gesture_is_filtered_before_the_view() {
        let mut app = app(ExitMode::Press);
        let mut tx = RecordingTransmitter::new();

        let redraw = app.handle_input(InputEvent::Short(Button::Back), &mut tx);
        assert!(!redraw);
        assert!(app.exit_requested());
        assert!(tx.sent().is_empty());
        assert!(!app.navigation().button_state().is_pressed(Button::Back));
    }

    #[test]
    fn opposite_gesture_transmits_instead_of_exiting() {
        let mut app = app(ExitMode::Hold);
        let mut tx = RecordingTransmitter::new();

        assert!(app.handle_input(InputEvent::Short(Button::Back), &mut tx));
        assert!(!app.exit_requested());
        assert_eq!(tx.sent(), &[Command::Back]);
    }

    #[test]
    fn long_ok_opens_settings_and_back_returns() {
        let mut app = app(ExitMode::Press);
        let mut tx = RecordingTransmitter::new();

        assert!(app.handle_input(InputEvent::Long(Button::Ok), &mut tx));
        assert_eq!(app.current_screen(), AppScreen::Settings);
        assert!(tx.sent().is_empty(), "screen switch must not transmit");

        assert!(app.handle_input(InputEvent::Short(Button::Back), &mut tx));
        assert_eq!(app.current_screen(), AppScreen::Navigation);
        assert!(!app.exit_requested());
    }

    #[test]
    fn settings_edits_apply_to_the_next_event() {
        let mut app = app(ExitMode::Press);
        let mut tx = RecordingTransmitter::new();

        app.handle_input(InputEvent::Long(Button::Ok), &mut tx);
        assert!(app.handle_input(InputEvent::Press(Button::Right), &mut tx));
        assert_eq!(app.settings().exit_mode, ExitMode::Hold);
        app.handle_input(InputEvent::Short(Button::Back), &mut tx);

        // Hold mode now: a short back press transmits.
        assert!(app.handle_input(InputEvent::Short(Button::Back), &mut tx));
        assert_eq!(tx.sent(), &[Command::Back]);
        assert!(!app.exit_requested());
    }

    #[test]
    fn screen_switch_clears_stale_pressed_flags() {
        let mut app = app(ExitMode::Press);
        let mut tx = RecordingTransmitter::new();

        app.handle_input(InputEvent::Press(Button::Ok), &mut tx);
        assert!(app.navigation().button_state().is_pressed(Button::Ok));

        app.handle_input(InputEvent::Long(Button::Ok), &mut tx);
        app.handle_input(InputEvent::Release(Button::Ok), &mut tx);
        app.handle_input(InputEvent::Short(Button::Back), &mut tx);

        assert_eq!(app.current_screen(), AppScreen::Navigation);
        assert!(app.navigation().button_state().all_released());
    }

    #[test]
    fn render_does_not_panic_on_either_screen() {
        let mut app = app(ExitMode::Hold);
        let mut tx = RecordingTransmitter::new();
        let mut display = TestDisplay::new(64, 128);

        app.render(&mut display).unwrap();
        app.handle_input(InputEvent::Long(Button::Ok), &mut tx);
        app.render(&mut display).unwrap();
        assert!(display.black_pixel_count() > 0);
    }
}
