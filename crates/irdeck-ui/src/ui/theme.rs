//! Fonts and layout constants for the 128x64 panel.
//!
//! ## Semantic Font API
//!
//! All UI code should use exactly three font functions:
//! - `ui_font_title()` — screen titles (largest)
//! - `ui_font_body()`  — rows and values (medium)
//! - `ui_font_small()` — hints and captions (smallest)

use embedded_graphics::mono_font::{ascii, MonoFont};

/// Title font — screen titles in the header bar.
pub fn ui_font_title() -> &'static MonoFont<'static> {
    &ascii::FONT_6X10
}

/// Body font — settings rows and values.
pub fn ui_font_body() -> &'static MonoFont<'static> {
    &ascii::FONT_5X8
}

/// Small font — footer hints and the hold reminder.
pub fn ui_font_small() -> &'static MonoFont<'static> {
    &ascii::FONT_4X6
}

/// Character width for the title font.
pub fn ui_font_title_char_width() -> i32 {
    ui_font_title().character_size.width as i32
}

/// Character width for the body font.
pub fn ui_font_body_char_width() -> i32 {
    ui_font_body().character_size.width as i32
}

// ── Layout constants ────────────────────────────────────────────────
//
// Single source of truth for every pixel offset outside the pad table
// (which lives in crate::layout).

/// Layout constants for the 128x64 panel.
pub mod layout {
    /// Side margin from the region edge.
    pub const MARGIN: i32 = 3;

    /// Header bar height (title + separator line area).
    pub const HEADER_H: i32 = 13;

    /// Y baseline for the header title.
    pub const HEADER_TEXT_Y: i32 = 9;

    /// Y position of the separator line below the header.
    pub const HEADER_SEP_Y: i32 = 12;

    /// Footer bar height (exit hint area).
    pub const FOOTER_H: i32 = 12;

    /// Settings row height (label line + value line).
    pub const ROW_H: i32 = 20;

    /// Y-offset of the label baseline within a settings row.
    pub const ROW_LABEL_Y: i32 = 7;

    /// Y-offset of the value baseline within a settings row.
    pub const ROW_VALUE_Y: i32 = 17;

    /// Y where list content starts (below header + separator).
    pub const fn content_start_y() -> i32 {
        HEADER_SEP_Y + 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_tiers_shrink() {
        assert!(ui_font_title().character_size.height > ui_font_body().character_size.height);
        assert!(ui_font_body().character_size.height > ui_font_small().character_size.height);
    }

    #[test]
    fn content_starts_below_header() {
        assert!(layout::content_start_y() > layout::HEADER_SEP_Y);
        assert!(layout::content_start_y() > layout::HEADER_H);
    }
}
