//! Host-side scenario test harness for scripted remote-control flows.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use embedded_graphics::pixelcolor::BinaryColor;
use irdeck_ui::test_display::TestDisplay;
use irdeck_ui::{display_size, App, Button, Command, InputEvent, RecordingTransmitter};
use png::{BitDepth, ColorType, Encoder};

/// Small helper that couples app, recording transmitter, and display for
/// scenario tests.
pub struct ScenarioHarness {
    app: App,
    transmitter: RecordingTransmitter,
    display: TestDisplay,
}

impl ScenarioHarness {
    /// Construct a harness around a caller-configured app.
    pub fn new(app: App) -> Self {
        let size = display_size(app.settings().orientation);
        Self {
            app,
            transmitter: RecordingTransmitter::new(),
            display: TestDisplay::new(size.width, size.height),
        }
    }

    /// Feed one raw input event through the app dispatch pipeline.
    pub fn send(&mut self, event: InputEvent) -> bool {
        self.app.handle_input(event, &mut self.transmitter)
    }

    /// Key-down stage of a button.
    pub fn press(&mut self, button: Button) -> bool {
        self.send(InputEvent::Press(button))
    }

    /// Key-up stage of a button.
    pub fn release(&mut self, button: Button) -> bool {
        self.send(InputEvent::Release(button))
    }

    /// Press and release a pad key.
    pub fn tap(&mut self, button: Button) {
        self.press(button);
        self.release(button);
    }

    /// Full short-press sequence as the input service delivers it:
    /// press, short-completed, release.
    pub fn short_press(&mut self, button: Button) {
        self.press(button);
        self.send(InputEvent::Short(button));
        self.release(button);
    }

    /// Full long-press sequence: press, long-completed, release.
    pub fn long_press(&mut self, button: Button) {
        self.press(button);
        self.send(InputEvent::Long(button));
        self.release(button);
    }

    /// Commands transmitted so far, oldest first.
    pub fn sent(&self) -> &[Command] {
        self.transmitter.sent()
    }

    /// Drain the transmission log.
    pub fn take_sent(&mut self) -> Vec<Command> {
        self.transmitter.take()
    }

    /// Access the app for assertions.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Access the display for render assertions.
    pub fn display(&self) -> &TestDisplay {
        &self.display
    }

    /// Render the current screen, resizing the framebuffer if the
    /// configured orientation changed since the last render.
    pub fn render(&mut self) {
        let size = display_size(self.app.settings().orientation);
        if self.display.dimensions() != (size.width, size.height) {
            self.display = TestDisplay::new(size.width, size.height);
        }
        self.app
            .render(&mut self.display)
            .expect("scenario render should succeed");
    }

    /// Save the current framebuffer to a PNG (white = Off, black = On).
    pub fn save_screenshot_png(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let (width, height) = self.display.dimensions();
        let mut data = Vec::with_capacity((width * height) as usize);
        for pixel in self.display.pixels() {
            let value = match pixel {
                BinaryColor::On => 0u8,
                BinaryColor::Off => 255u8,
            };
            data.push(value);
        }

        let file = File::create(path).map_err(|e| e.to_string())?;
        let writer = BufWriter::new(file);
        let mut encoder = Encoder::new(writer, width, height);
        encoder.set_color(ColorType::Grayscale);
        encoder.set_depth(BitDepth::Eight);
        let mut png_writer = encoder.write_header().map_err(|e| e.to_string())?;
        png_writer
            .write_image_data(&data)
            .map_err(|e| e.to_string())
    }
}
