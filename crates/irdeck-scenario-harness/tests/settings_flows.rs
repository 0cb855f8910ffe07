use irdeck_scenario_harness::ScenarioHarness;
use irdeck_ui::{
    App, AppScreen, Button, Command, ExitMode, InputEvent, Orientation, RemoteSettings,
};

fn default_harness() -> ScenarioHarness {
    ScenarioHarness::new(App::new_with_settings(RemoteSettings::default()))
}

#[test]
fn long_ok_opens_settings_and_short_back_returns() {
    let mut harness = default_harness();
    assert_eq!(harness.app().current_screen(), AppScreen::Navigation);

    harness.long_press(Button::Ok);
    assert_eq!(harness.app().current_screen(), AppScreen::Settings);
    // The press stage transmitted before the hold was classified; the
    // hold itself and the settings screen must not.
    assert_eq!(harness.take_sent(), [Command::Ok]);
    harness.render();
    assert!(harness.display().black_pixel_count() > 0);

    harness.short_press(Button::Back);
    assert_eq!(harness.app().current_screen(), AppScreen::Navigation);
    assert!(!harness.app().exit_requested());
    assert!(harness.sent().is_empty(), "returning must not transmit");
}

#[test]
fn switching_exit_mode_changes_back_behavior() {
    let mut harness = default_harness();
    assert_eq!(harness.app().settings().exit_mode, ExitMode::Press);

    harness.long_press(Button::Ok);
    harness.take_sent();
    harness.press(Button::Right);
    assert_eq!(harness.app().settings().exit_mode, ExitMode::Hold);
    harness.short_press(Button::Back);
    assert_eq!(harness.app().current_screen(), AppScreen::Navigation);

    // Hold mode now applies to the very next gesture: short back is a
    // navigation action, long back exits.
    harness.short_press(Button::Back);
    assert_eq!(harness.take_sent(), [Command::Back]);
    assert!(!harness.app().exit_requested());

    harness.long_press(Button::Back);
    assert!(harness.sent().is_empty());
    assert!(harness.app().exit_requested());
}

#[test]
fn switching_orientation_resizes_the_canvas() {
    let mut harness = default_harness();
    harness.render();
    assert_eq!(harness.display().dimensions(), (64, 128));

    harness.long_press(Button::Ok);
    harness.press(Button::Down);
    harness.press(Button::Right);
    assert_eq!(harness.app().settings().orientation, Orientation::Horizontal);

    harness.render();
    assert_eq!(harness.display().dimensions(), (128, 64));
    assert!(harness.display().black_pixel_count() > 0);
}

#[test]
fn pad_flags_do_not_leak_across_screens() {
    let mut harness = default_harness();

    harness.press(Button::Ok);
    assert!(harness.app().navigation().button_state().is_pressed(Button::Ok));

    // Holding Ok past the threshold opens settings; the release lands
    // there and the pad must come back clean.
    harness.send(InputEvent::Long(Button::Ok));
    assert_eq!(harness.app().current_screen(), AppScreen::Settings);
    harness.release(Button::Ok);
    harness.short_press(Button::Back);

    assert_eq!(harness.app().current_screen(), AppScreen::Navigation);
    assert!(harness.app().navigation().button_state().all_released());
}

#[test]
fn settings_rows_wrap_and_cycle_back() {
    let mut harness = default_harness();
    harness.long_press(Button::Ok);

    // Up from the first row wraps to the last (orientation).
    harness.press(Button::Up);
    harness.press(Button::Right);
    assert_eq!(harness.app().settings().orientation, Orientation::Horizontal);
    harness.press(Button::Left);
    assert_eq!(harness.app().settings().orientation, Orientation::Vertical);
    assert_eq!(harness.app().settings().exit_mode, ExitMode::Press);
}
