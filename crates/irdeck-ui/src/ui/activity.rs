//! Activity pattern for screen-based navigation.
//!
//! Each screen implements [`Activity`] to handle its own lifecycle,
//! input processing, and rendering. Input handling takes `&mut self`
//! and rendering takes `&self`, so the host can never observe a screen
//! mid-mutation.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::app::{AppContext, AppScreen};
use crate::input::InputEvent;
use crate::settings::RemoteSettings;

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityResult {
    /// Event consumed, stay on current activity.
    Consumed,
    /// Event consumed, request navigation back.
    NavigateBack,
    /// Event consumed, request navigation to another screen.
    NavigateTo(AppScreen),
    /// Event not handled; the host's default action (if any) runs.
    Ignored,
}

pub trait Activity {
    /// Called when the activity becomes visible.
    fn on_enter(&mut self);

    /// Called when the activity is being replaced.
    fn on_exit(&mut self);

    /// Handle one input event.
    ///
    /// `ctx` carries the settings current at this event plus the
    /// transmitter; activities must read configuration from it rather
    /// than caching values across events.
    fn handle_input(&mut self, event: InputEvent, ctx: &mut AppContext<'_>) -> ActivityResult;

    /// Render the activity to the display.
    ///
    /// Pull-based: the host invokes this on its own schedule. Rendering
    /// must not mutate input-visible state.
    fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        settings: &RemoteSettings,
        display: &mut D,
    ) -> Result<(), D::Error>;
}
