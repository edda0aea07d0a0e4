//! Widget components for the sensor panel display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod log_view;
mod overlay;
mod panel;
mod primitives;

pub use log_view::draw_log_page;
pub use overlay::draw_paused_overlay;
pub use panel::draw_sensor_panel;
pub use primitives::{draw_header, draw_slider, draw_status_box, draw_switch};

/// In-memory framebuffer used by widget tests to inspect drawn pixels.
#[cfg(test)]
pub(crate) mod test_display {
    use core::convert::Infallible;

    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{PointsIter, Rectangle};

    use crate::colors::BLACK;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    pub struct FrameBuffer {
        pixels: std::vec::Vec<Rgb565>,
    }

    impl FrameBuffer {
        pub fn new() -> Self {
            Self {
                pixels: std::vec![BLACK; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            }
        }

        pub fn pixel(
            &self,
            point: Point,
        ) -> Rgb565 {
            self.pixels[(point.y as u32 * SCREEN_WIDTH + point.x as u32) as usize]
        }

        /// Number of pixels in `area` with exactly `color`.
        pub fn count_in(
            &self,
            area: Rectangle,
            color: Rgb565,
        ) -> usize {
            area.points().filter(|p| self.bounding_box().contains(*p) && self.pixel(*p) == color).count()
        }
    }

    impl OriginDimensions for FrameBuffer {
        fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
    }

    impl DrawTarget for FrameBuffer {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(
            &mut self,
            pixels: I,
        ) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0 && point.y >= 0 && (point.x as u32) < SCREEN_WIDTH && (point.y as u32) < SCREEN_HEIGHT {
                    self.pixels[(point.y as u32 * SCREEN_WIDTH + point.x as u32) as usize] = color;
                }
            }
            Ok(())
        }
    }
}
