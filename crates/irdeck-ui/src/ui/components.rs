//! UI components for the remote's monochrome LCD.
//!
//! Components are designed for a 128x64 panel:
//! - High contrast (black/white only)
//! - Pressed state shown by inverting the button cell
//! - Fixed pixel geometry, no reflow

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle},
    text::Text,
};
use embedded_text::{alignment::HorizontalAlignment, style::TextBoxStyleBuilder, TextBox};

use crate::layout::display_size;
use crate::settings::Orientation;
use crate::ui::theme::{self, layout};

/// Glyphs drawn inside a pad button cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Ok,
    Back,
}

impl Icon {
    /// Draw the glyph into a button cell at `origin`.
    fn draw<D: DrawTarget<Color = BinaryColor>>(
        self,
        display: &mut D,
        origin: Point,
        color: BinaryColor,
    ) -> Result<(), D::Error> {
        let fill = PrimitiveStyle::with_fill(color);
        let at = |x: i32, y: i32| origin + Point::new(x, y);
        match self {
            Self::ArrowUp => {
                Triangle::new(at(9, 5), at(4, 13), at(14, 13))
                    .into_styled(fill)
                    .draw(display)?;
            }
            Self::ArrowDown => {
                Triangle::new(at(9, 13), at(4, 5), at(14, 5))
                    .into_styled(fill)
                    .draw(display)?;
            }
            Self::ArrowLeft => {
                Triangle::new(at(5, 9), at(13, 4), at(13, 14))
                    .into_styled(fill)
                    .draw(display)?;
            }
            Self::ArrowRight => {
                Triangle::new(at(13, 9), at(5, 4), at(5, 14))
                    .into_styled(fill)
                    .draw(display)?;
            }
            Self::Ok => {
                Circle::new(at(4, 4), 11)
                    .into_styled(PrimitiveStyle::with_stroke(color, 1))
                    .draw(display)?;
                Circle::new(at(8, 8), 3).into_styled(fill).draw(display)?;
            }
            Self::Back => {
                Triangle::new(at(4, 9), at(9, 5), at(9, 13))
                    .into_styled(fill)
                    .draw(display)?;
                Rectangle::new(at(9, 8), Size::new(6, 3))
                    .into_styled(fill)
                    .draw(display)?;
            }
        }
        Ok(())
    }
}

/// One pad button cell with its pressed state.
///
/// Released cells draw a rounded outline with the glyph inside; pressed
/// cells invert (solid fill, glyph cut out), which is how the user sees
/// key feedback on a panel with no backlight changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconButton {
    pub icon: Icon,
    pub origin: Point,
    pub pressed: bool,
}

impl IconButton {
    /// Button cell edge length in pixels.
    pub const SIZE: u32 = 19;

    /// Corner radius of the cell outline.
    const CORNER: u32 = 3;

    pub fn new(icon: Icon, origin: Point, pressed: bool) -> Self {
        Self {
            icon,
            origin,
            pressed,
        }
    }

    /// Render the cell to the display.
    pub fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let bounds = Rectangle::new(self.origin, Size::new(Self::SIZE, Self::SIZE));
        let cell = RoundedRectangle::with_equal_corners(bounds, Size::new(Self::CORNER, Self::CORNER));

        let glyph_color = if self.pressed {
            cell.into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(display)?;
            BinaryColor::Off
        } else {
            cell.into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
                .draw(display)?;
            BinaryColor::On
        };

        self.icon.draw(display, self.origin, glyph_color)
    }
}

/// Header bar: centered title plus separator line.
///
/// In vertical orientation the header spans the screen top; in
/// horizontal it occupies the right-hand region next to the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    pub fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
        orientation: Orientation,
    ) -> Result<(), D::Error> {
        let (x0, width) = header_region(orientation);

        let text_width = self.title.len() as i32 * theme::ui_font_title_char_width();
        let x = x0 + (width - text_width).max(0) / 2;
        Text::new(
            self.title,
            Point::new(x, layout::HEADER_TEXT_Y),
            MonoTextStyle::new(theme::ui_font_title(), BinaryColor::On),
        )
        .draw(display)?;

        Line::new(
            Point::new(x0 + 2, layout::HEADER_SEP_Y),
            Point::new(x0 + width - 3, layout::HEADER_SEP_Y),
        )
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display)?;

        Ok(())
    }
}

/// Footer bar carrying the exit-gesture hint, centered in its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitFooter<'a> {
    hint: &'a str,
}

impl<'a> ExitFooter<'a> {
    pub fn new(hint: &'a str) -> Self {
        Self { hint }
    }

    pub fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
        orientation: Orientation,
    ) -> Result<(), D::Error> {
        let (x0, width) = header_region(orientation);
        let canvas = display_size(orientation);
        let top = canvas.height as i32 - layout::FOOTER_H;

        Line::new(Point::new(x0 + 2, top), Point::new(x0 + width - 3, top))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(display)?;

        let bounds = Rectangle::new(
            Point::new(x0, top + 2),
            Size::new(width as u32, (layout::FOOTER_H - 2) as u32),
        );
        let textbox_style = TextBoxStyleBuilder::new()
            .alignment(HorizontalAlignment::Center)
            .build();
        TextBox::with_textbox_style(
            self.hint,
            bounds,
            MonoTextStyle::new(theme::ui_font_small(), BinaryColor::On),
            textbox_style,
        )
        .draw(display)?;

        Ok(())
    }
}

/// The 64px-wide region that holds header and footer: the whole width in
/// vertical orientation, the right half next to the pad in horizontal.
fn header_region(orientation: Orientation) -> (i32, i32) {
    match orientation {
        Orientation::Vertical => (0, display_size(orientation).width as i32),
        Orientation::Horizontal => {
            let width = display_size(orientation).width as i32;
            (width / 2, width / 2)
        }
    }
}
