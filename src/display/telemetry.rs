//! Key-value telemetry rendered to the Brain screen.
//!
//! Mirrors how the routines think about their output: `add` a handful
//! of named values, then `update` to push the block to the screen and
//! start fresh. Lines are drawn top to bottom in insertion order.
//!
//! ```ignore
//! telemetry.add("Distance", perpendicular_distance);
//! telemetry.add("Angle", bearing);
//! telemetry.update();
//! ```

use embedded_graphics::{
    mono_font::{ascii::FONT_8X13, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    text::Text,
};
use log::warn;

use crate::display::graphics::DisplayDriver;

/// Most lines that fit on screen below the status bar at the chosen
/// font size.
const MAX_LINES: usize = 12;

/// Vertical position of the first line's text baseline.
const FIRST_BASELINE_Y: i32 = 16;

/// Line pitch in pixels.
const LINE_HEIGHT: i32 = 16;

/// A key-value telemetry readout.
///
/// Holds a bounded buffer of pending lines; `update` renders and clears
/// them. Lines added past the on-screen capacity are dropped with a
/// warning rather than silently scrolling data off.
pub struct Telemetry {
    driver: DisplayDriver,
    lines: heapless::Vec<String, MAX_LINES>,
}

impl Telemetry {
    /// Creates a telemetry readout rendering through the given driver.
    pub fn new(driver: DisplayDriver) -> Self {
        Self {
            driver,
            lines: heapless::Vec::new(),
        }
    }

    /// Queues one key-value line for the next update.
    pub fn add(&mut self, key: &str, value: impl core::fmt::Display) {
        if self.lines.push(format_line(key, value)).is_err() {
            warn!("Telemetry Full, Dropping Line: {}", key);
        }
    }

    /// Renders all queued lines to the screen and clears the queue.
    ///
    /// Safe to call with no lines queued; that just blanks the readout.
    pub fn update(&mut self) {
        let style = MonoTextStyle::new(&FONT_8X13, Rgb888::WHITE);

        // Infallible draw target; the unwraps cannot fire.
        self.driver.clear(Rgb888::BLACK).unwrap();
        for (index, line) in self.lines.iter().enumerate() {
            let baseline = Point::new(4, FIRST_BASELINE_Y + index as i32 * LINE_HEIGHT);
            Text::new(line, baseline, style).draw(&mut self.driver).unwrap();
        }
        self.driver.flush();

        self.lines.clear();
    }
}

/// Formats one telemetry line.
fn format_line(key: &str, value: impl core::fmt::Display) -> String {
    format!("{}: {}", key, value)
}

#[cfg(test)]
mod tests {
    use super::format_line;

    #[test]
    fn line_format_is_key_colon_value() {
        assert_eq!(format_line("Slow Mode", "ACTIVE"), "Slow Mode: ACTIVE");
    }

    #[test]
    fn numeric_values_format_naturally() {
        assert_eq!(format_line("Distance", 15.02), "Distance: 15.02");
        assert_eq!(format_line("Rounded Angle", -12), "Rounded Angle: -12");
    }

    #[test]
    #[ignore = "manual verification needed (popup display)"]
    fn layout_test() {
        use embedded_graphics::{
            mono_font::{ascii::FONT_8X13, MonoTextStyle},
            pixelcolor::Rgb888,
            prelude::*,
            text::Text,
        };
        use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, Window};
        use vexide::display::Display;

        use super::{FIRST_BASELINE_Y, LINE_HEIGHT};

        let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(
            Display::HORIZONTAL_RESOLUTION as u32,
            Display::VERTICAL_RESOLUTION as u32,
        ));

        let style = MonoTextStyle::new(&FONT_8X13, Rgb888::WHITE);
        let sample = [
            "Distance: 15.02",
            "Cube Dist: 1.3",
            "Angle: -12.4",
            "Slow Mode: ACTIVE",
        ];
        for (index, line) in sample.iter().enumerate() {
            let baseline = Point::new(4, FIRST_BASELINE_Y + index as i32 * LINE_HEIGHT);
            Text::new(line, baseline, style).draw(&mut display).unwrap();
        }

        let output_settings = OutputSettingsBuilder::new().build();
        Window::new("Telemetry", &output_settings).show_static(&display);
    }
}
