//! Shared UI library for the IRDeck infrared remote.
//! Works on the device firmware and on desktop simulators.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

extern crate alloc;

pub mod app;
pub mod button_state;
pub mod exit_policy;
pub mod input;
pub mod layout;
pub mod mock_transmitter;
pub mod navigation_activity;
pub mod settings;
pub mod settings_activity;
pub mod test_display;
pub mod transmit;
pub mod ui;

pub use app::{App, AppContext, AppScreen};
pub use button_state::ButtonState;
pub use exit_policy::ExitAction;
pub use input::{Button, InputEvent};
pub use layout::{display_size, NavigationLayout};
pub use mock_transmitter::RecordingTransmitter;
pub use navigation_activity::NavigationActivity;
pub use settings::{ExitMode, Orientation, RemoteSettings};
pub use settings_activity::{SettingRow, SettingsActivity};
pub use test_display::TestDisplay;
pub use transmit::{Command, Transmitter};
pub use ui::{Activity, ActivityResult};

/// Panel dimensions in the native landscape orientation.
pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;
