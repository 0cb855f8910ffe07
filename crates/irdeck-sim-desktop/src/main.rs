//! Desktop SDL simulator for the IRDeck remote.
//!
//! Plays two upstream roles for the app: it classifies short vs. long
//! presses from real key timing before events reach the core, and it is
//! the host view-stack, quitting when the exit gesture goes unconsumed.

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics_simulator::{
    sdl2::Keycode, OutputSettings, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use irdeck_ui::{display_size, App, Button, Command, InputEvent, Orientation, Transmitter};

/// Held time at or past which a release classifies as a long press.
const LONG_PRESS: Duration = Duration::from_millis(400);

/// Prints each command instead of keying an IR carrier.
struct ConsoleTransmitter;

impl Transmitter for ConsoleTransmitter {
    fn send(&mut self, command: Command) {
        println!("IR send: {}", command.name());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_settings = OutputSettingsBuilder::new().scale(4).build();
    let mut app = App::new();
    let mut orientation = app.settings().orientation;
    let mut display = new_display(orientation);
    let mut window = Window::new("IRDeck", &output_settings);
    let mut tx = ConsoleTransmitter;
    let mut held: Vec<(Button, Instant)> = Vec::new();

    app.render(&mut display)?;
    window.update(&display);

    println!("IRDeck simulator");
    println!("Controls:");
    println!("  Arrow Keys / WASD - pad");
    println!("  Enter / Space     - ok (hold to open settings)");
    println!("  Backspace         - back (short or hold per exit gesture)");
    println!("  Escape            - quit");

    'running: loop {
        let mut redraw = false;

        for event in window.events().collect::<Vec<_>>() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown {
                    keycode, repeat, ..
                } => {
                    if keycode == Keycode::Escape {
                        break 'running;
                    }
                    if repeat {
                        continue;
                    }
                    if let Some(button) = keycode_to_button(keycode) {
                        held.retain(|(b, _)| *b != button);
                        held.push((button, Instant::now()));
                        redraw |= app.handle_input(InputEvent::Press(button), &mut tx);
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => {
                    if let Some(button) = keycode_to_button(keycode) {
                        let pressed_at = held
                            .iter()
                            .position(|(b, _)| *b == button)
                            .map(|i| held.remove(i).1);
                        // Gesture classification happens here, upstream of
                        // the app; firmware resolves it the same way.
                        let completed = match pressed_at {
                            Some(at) if at.elapsed() >= LONG_PRESS => InputEvent::Long(button),
                            _ => InputEvent::Short(button),
                        };
                        redraw |= app.handle_input(completed, &mut tx);
                        redraw |= app.handle_input(InputEvent::Release(button), &mut tx);
                    }
                }
                _ => {}
            }
        }

        if app.exit_requested() {
            // The exit gesture was not consumed; the host default action
            // on a real device pops the view. Here that means quitting.
            println!("exit gesture - closing");
            break 'running;
        }

        if app.settings().orientation != orientation {
            orientation = app.settings().orientation;
            display = new_display(orientation);
            window = recreate_window(&output_settings);
            redraw = true;
        }

        if redraw {
            app.render(&mut display)?;
            window.update(&display);
        }

        std::thread::sleep(Duration::from_millis(10));
    }

    Ok(())
}

fn new_display(orientation: Orientation) -> SimulatorDisplay<BinaryColor> {
    SimulatorDisplay::new(display_size(orientation))
}

fn recreate_window(output_settings: &OutputSettings) -> Window {
    Window::new("IRDeck", output_settings)
}

fn keycode_to_button(keycode: Keycode) -> Option<Button> {
    match keycode {
        Keycode::Up | Keycode::W => Some(Button::Up),
        Keycode::Down | Keycode::S => Some(Button::Down),
        Keycode::Left | Keycode::A => Some(Button::Left),
        Keycode::Right | Keycode::D => Some(Button::Right),
        Keycode::Return | Keycode::Space => Some(Button::Ok),
        Keycode::Backspace => Some(Button::Back),
        _ => None,
    }
}
