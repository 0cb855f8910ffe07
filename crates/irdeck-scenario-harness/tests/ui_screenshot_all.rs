use irdeck_scenario_harness::ScenarioHarness;
use irdeck_ui::{App, Button, ExitMode, Orientation, RemoteSettings};

fn setup_harness(exit_mode: ExitMode, orientation: Orientation) -> ScenarioHarness {
    ScenarioHarness::new(App::new_with_settings(RemoteSettings {
        exit_mode,
        orientation,
    }))
}

#[test]
fn screenshot_all_ui_screens() {
    // Navigation, vertical, press-to-exit
    let mut harness = setup_harness(ExitMode::Press, Orientation::Vertical);
    harness.render();
    harness
        .save_screenshot_png("screenshots/01_navigation_vertical.png")
        .expect("Failed to save vertical navigation screenshot");

    // Navigation, vertical, hold-to-exit (hint visible)
    let mut harness = setup_harness(ExitMode::Hold, Orientation::Vertical);
    harness.render();
    harness
        .save_screenshot_png("screenshots/02_navigation_vertical_hold.png")
        .expect("Failed to save hold-hint navigation screenshot");

    // Navigation, horizontal
    let mut harness = setup_harness(ExitMode::Hold, Orientation::Horizontal);
    harness.render();
    harness
        .save_screenshot_png("screenshots/03_navigation_horizontal.png")
        .expect("Failed to save horizontal navigation screenshot");

    // Navigation with a key held
    let mut harness = setup_harness(ExitMode::Press, Orientation::Vertical);
    harness.press(Button::Ok);
    harness.render();
    harness
        .save_screenshot_png("screenshots/04_navigation_ok_pressed.png")
        .expect("Failed to save pressed-key screenshot");
    harness.release(Button::Ok);

    // Settings
    harness.long_press(Button::Ok);
    harness.render();
    harness
        .save_screenshot_png("screenshots/05_settings.png")
        .expect("Failed to save settings screenshot");
}
