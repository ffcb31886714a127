//! Embedded-graphics draw target for the V5 Brain screen.

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use vexide::display::{Display, RenderMode};

/// An embedded-graphics draw target for the Brain screen.
///
/// Drawing writes into an in-memory framebuffer; nothing reaches the
/// screen until [`DisplayDriver::flush`] copies the framebuffer over in
/// a single SDK call and renders it. The display must be moved into
/// this struct, as holding a second handle to it would allow aliased
/// writes to the same hardware.
pub struct DisplayDriver {
    display: Display,
    framebuffer: Box<[u32]>,
}

impl DisplayDriver {
    /// Creates a driver from the Brain display.
    pub fn new(mut display: Display) -> Self {
        display.set_render_mode(RenderMode::DoubleBuffered);
        Self {
            display,
            framebuffer: vec![
                0u32;
                Display::HORIZONTAL_RESOLUTION as usize *
                    Display::VERTICAL_RESOLUTION as usize
            ]
            .into_boxed_slice(),
        }
    }

    /// Copies the framebuffer to the screen and renders it.
    pub fn flush(&mut self) {
        // The top 0x20 rows of the physical display are the status bar;
        // user drawing starts below it.
        unsafe {
            vex_sdk::vexDisplayCopyRect(
                0,
                0x20,
                Display::HORIZONTAL_RESOLUTION as i32,
                Display::VERTICAL_RESOLUTION as i32,
                self.framebuffer.as_mut_ptr(),
                Display::HORIZONTAL_RESOLUTION as i32,
            );
        }
        self.display.render();
    }
}

impl Dimensions for DisplayDriver {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(
            Point::new(0, 0),
            Size::new(
                Display::HORIZONTAL_RESOLUTION as u32,
                Display::VERTICAL_RESOLUTION as u32,
            ),
        )
    }
}

impl DrawTarget for DisplayDriver {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let width = Display::HORIZONTAL_RESOLUTION as i32;
        let height = Display::VERTICAL_RESOLUTION as i32;
        for Pixel(position, color) in pixels {
            if (0..width).contains(&position.x) && (0..height).contains(&position.y) {
                self.framebuffer[position.y as usize * width as usize + position.x as usize] =
                    (u32::from(color.r()) << 16) |
                        (u32::from(color.g()) << 8) |
                        u32::from(color.b());
            }
        }
        Ok(())
    }
}
