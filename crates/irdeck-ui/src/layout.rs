//! Screen geometry for the navigation pad.
//!
//! Two fixed coordinate tables, one per orientation. Rendering is the
//! only consumer; the input path never looks at geometry.

use embedded_graphics::prelude::*;

use crate::settings::{ExitMode, Orientation};
use crate::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Icon origins for one orientation, plus the optional hold-hint origin.
///
/// All origins are top-left corners of
/// [`IconButton::SIZE`](crate::ui::components::IconButton::SIZE)-square
/// button cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationLayout {
    pub up: Point,
    pub down: Point,
    pub left: Point,
    pub right: Point,
    pub ok: Point,
    pub back: Point,
    /// Where to draw the "hold" hint under the back icon. Present only in
    /// hold-to-exit mode, where a plain back press transmits and the user
    /// needs the reminder that leaving takes a hold.
    pub hint_icon: Option<Point>,
}

impl NavigationLayout {
    /// Look up the coordinate table for an orientation and exit mode.
    ///
    /// Pure: the same inputs always produce the same table.
    pub const fn select(orientation: Orientation, exit_mode: ExitMode) -> Self {
        let (up, down, left, right, ok, back, hint) = match orientation {
            Orientation::Vertical => (
                Point::new(23, 30),
                Point::new(23, 72),
                Point::new(2, 51),
                Point::new(44, 51),
                Point::new(23, 51),
                Point::new(2, 95),
                Point::new(22, 107),
            ),
            Orientation::Horizontal => (
                Point::new(23, 2),
                Point::new(23, 44),
                Point::new(2, 23),
                Point::new(44, 23),
                Point::new(23, 23),
                Point::new(70, 33),
                Point::new(90, 45),
            ),
        };
        Self {
            up,
            down,
            left,
            right,
            ok,
            back,
            hint_icon: match exit_mode {
                ExitMode::Hold => Some(hint),
                ExitMode::Press => None,
            },
        }
    }

    /// The six icon origins in pad order.
    pub const fn icon_origins(self) -> [Point; 6] {
        [self.up, self.down, self.left, self.right, self.ok, self.back]
    }
}

/// Canvas size for an orientation. The panel is 128x64 native and is
/// rotated for vertical use.
pub const fn display_size(orientation: Orientation) -> Size {
    match orientation {
        Orientation::Vertical => Size::new(DISPLAY_HEIGHT, DISPLAY_WIDTH),
        Orientation::Horizontal => Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT),
    }
}
