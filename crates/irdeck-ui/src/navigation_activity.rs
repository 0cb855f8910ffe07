//! Navigation pad screen: routes button events to the IR transmitter and
//! tracks per-button press state for rendering.
//!
//! Directional and ok keys transmit on the press transition, so holding a
//! key repeats only if the transmitter layers repeats itself. The back
//! key transmits only when the exit policy passes the gesture through;
//! the opposite gesture is the way out of the app and never reaches the
//! transmitter.

use embedded_graphics::{
    mono_font::MonoTextStyle, pixelcolor::BinaryColor, prelude::*, text::Text,
};

use crate::app::AppContext;
use crate::button_state::ButtonState;
use crate::exit_policy::{self, ExitAction};
use crate::input::{Button, InputEvent};
use crate::layout::NavigationLayout;
use crate::settings::RemoteSettings;
use crate::transmit::Command;
use crate::ui::components::{ExitFooter, Header, Icon, IconButton};
use crate::ui::theme;
use crate::ui::{Activity, ActivityResult};

/// The navigation pad view model: pressed flags plus nothing else.
pub struct NavigationActivity {
    buttons: ButtonState,
}

impl NavigationActivity {
    pub fn new() -> Self {
        Self {
            buttons: ButtonState::new(),
        }
    }

    /// Snapshot of the pressed flags for the rendering collaborator and
    /// for assertions in tests.
    pub fn button_state(&self) -> ButtonState {
        self.buttons
    }
}

impl Default for NavigationActivity {
    fn default() -> Self {
        Self::new()
    }
}

impl Activity for NavigationActivity {
    fn on_enter(&mut self) {
        // No key can still be held from before the screen existed.
        self.buttons = ButtonState::new();
    }

    fn on_exit(&mut self) {
        self.buttons = ButtonState::new();
    }

    fn handle_input(&mut self, event: InputEvent, ctx: &mut AppContext<'_>) -> ActivityResult {
        // One exhaustive table over (stage, key); every pair has a
        // defined outcome and unrecognized pairs are explicit no-ops.
        match event {
            InputEvent::Press(
                button @ (Button::Up | Button::Down | Button::Left | Button::Right | Button::Ok),
            ) => {
                self.buttons.set(button, true);
                if let Some(command) = Command::for_button(button) {
                    log::debug!("ir send: {}", command.name());
                    ctx.transmitter.send(command);
                }
                ActivityResult::Consumed
            }
            InputEvent::Short(Button::Back) | InputEvent::Long(Button::Back) => {
                match exit_policy::decide(event, ctx.settings.exit_mode) {
                    // The exit gesture: leave it to the host's default
                    // back action. The dispatch filter normally consumes
                    // it first; this arm keeps a directly-embedded view
                    // from transmitting on it.
                    ExitAction::Consume => ActivityResult::Ignored,
                    ExitAction::PassThrough => {
                        self.buttons.set(Button::Back, true);
                        log::debug!("ir send: {}", Command::Back.name());
                        ctx.transmitter.send(Command::Back);
                        ActivityResult::Consumed
                    }
                }
            }
            InputEvent::Release(button) => {
                self.buttons.set(button, false);
                ActivityResult::Consumed
            }
            InputEvent::Press(Button::Back | Button::Power)
            | InputEvent::Short(_)
            | InputEvent::Long(_) => ActivityResult::Ignored,
        }
    }

    fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        settings: &RemoteSettings,
        display: &mut D,
    ) -> Result<(), D::Error> {
        display.clear(BinaryColor::Off)?;

        let layout = NavigationLayout::select(settings.orientation, settings.exit_mode);

        Header::new("Navigation").render(display, settings.orientation)?;

        IconButton::new(Icon::ArrowUp, layout.up, self.buttons.is_pressed(Button::Up))
            .render(display)?;
        IconButton::new(
            Icon::ArrowDown,
            layout.down,
            self.buttons.is_pressed(Button::Down),
        )
        .render(display)?;
        IconButton::new(
            Icon::ArrowLeft,
            layout.left,
            self.buttons.is_pressed(Button::Left),
        )
        .render(display)?;
        IconButton::new(
            Icon::ArrowRight,
            layout.right,
            self.buttons.is_pressed(Button::Right),
        )
        .render(display)?;
        IconButton::new(Icon::Ok, layout.ok, self.buttons.is_pressed(Button::Ok))
            .render(display)?;
        IconButton::new(Icon::Back, layout.back, self.buttons.is_pressed(Button::Back))
            .render(display)?;

        if let Some(origin) = layout.hint_icon {
            Text::new(
                "hold",
                Point::new(origin.x, origin.y + 5),
                MonoTextStyle::new(theme::ui_font_small(), BinaryColor::On),
            )
            .draw(display)?;
        }

        ExitFooter::new(settings.exit_mode.hint()).render(display, settings.orientation)?;

        Ok(())
    }
}
