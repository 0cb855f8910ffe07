//! Settings screen: exit gesture and orientation.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};

use crate::app::AppContext;
use crate::input::{Button, InputEvent};
use crate::layout::display_size;
use crate::settings::RemoteSettings;
use crate::ui::components::Header;
use crate::ui::theme::{self, layout};
use crate::ui::{Activity, ActivityResult};

/// Rows on the settings screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingRow {
    ExitMode,
    Orientation,
}

impl SettingRow {
    /// All rows in display order.
    pub const ALL: [Self; 2] = [Self::ExitMode, Self::Orientation];

    pub const fn label(self) -> &'static str {
        match self {
            Self::ExitMode => "Exit gesture",
            Self::Orientation => "Orientation",
        }
    }
}

/// Editable copy of the remote settings plus row selection.
///
/// The app seeds the draft on entry and pulls [`settings`] after every
/// event; there is no separate save step.
///
/// [`settings`]: SettingsActivity::settings
pub struct SettingsActivity {
    selected: usize,
    draft: RemoteSettings,
}

impl SettingsActivity {
    pub fn new() -> Self {
        Self {
            selected: 0,
            draft: RemoteSettings::default(),
        }
    }

    /// Seed the draft from the currently active settings.
    pub fn set_settings(&mut self, settings: RemoteSettings) {
        self.draft = settings;
    }

    /// The draft as edited so far.
    pub fn settings(&self) -> RemoteSettings {
        self.draft
    }

    fn cycle_selected(&mut self) {
        match SettingRow::ALL[self.selected % SettingRow::ALL.len()] {
            SettingRow::ExitMode => self.draft.exit_mode = self.draft.exit_mode.cycled(),
            SettingRow::Orientation => {
                self.draft.orientation = self.draft.orientation.cycled();
            }
        }
    }

    fn row_value(&self, row: SettingRow) -> &'static str {
        match row {
            SettingRow::ExitMode => self.draft.exit_mode.label(),
            SettingRow::Orientation => self.draft.orientation.label(),
        }
    }
}

impl Default for SettingsActivity {
    fn default() -> Self {
        Self::new()
    }
}

impl Activity for SettingsActivity {
    fn on_enter(&mut self) {
        self.selected = 0;
    }

    fn on_exit(&mut self) {}

    fn handle_input(&mut self, event: InputEvent, _ctx: &mut AppContext<'_>) -> ActivityResult {
        let rows = SettingRow::ALL.len();
        match event {
            InputEvent::Press(Button::Up) => {
                self.selected = self.selected.checked_sub(1).unwrap_or(rows - 1);
                ActivityResult::Consumed
            }
            InputEvent::Press(Button::Down) => {
                self.selected = (self.selected + 1) % rows;
                ActivityResult::Consumed
            }
            InputEvent::Press(Button::Left) | InputEvent::Press(Button::Right) => {
                self.cycle_selected();
                ActivityResult::Consumed
            }
            InputEvent::Short(Button::Back) => ActivityResult::NavigateBack,
            _ => ActivityResult::Ignored,
        }
    }

    fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        settings: &RemoteSettings,
        display: &mut D,
    ) -> Result<(), D::Error> {
        display.clear(BinaryColor::Off)?;

        // The settings screen lists rows top-down in both orientations;
        // only the row width follows the canvas.
        let width = display_size(settings.orientation).width;
        Header::new("Settings").render(display, settings.orientation)?;

        for (index, row) in SettingRow::ALL.iter().enumerate() {
            let y = layout::content_start_y() + index as i32 * layout::ROW_H;
            let selected = index == self.selected;

            let (label_color, value_color) = if selected {
                Rectangle::new(Point::new(0, y), Size::new(width, layout::ROW_H as u32))
                    .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                    .draw(display)?;
                (BinaryColor::Off, BinaryColor::Off)
            } else {
                (BinaryColor::On, BinaryColor::On)
            };

            Text::new(
                row.label(),
                Point::new(layout::MARGIN, y + layout::ROW_LABEL_Y),
                MonoTextStyle::new(theme::ui_font_small(), label_color),
            )
            .draw(display)?;

            Text::new(
                self.row_value(*row),
                Point::new(layout::MARGIN + 5, y + layout::ROW_VALUE_Y),
                MonoTextStyle::new(theme::ui_font_body(), value_color),
            )
            .draw(display)?;
        }

        Ok(())
    }
}
