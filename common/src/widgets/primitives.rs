//! Low-level drawing primitives shared across widgets.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::colors::{ACCENT, GRAY, LIGHT_GRAY, WHITE};
use crate::config::{
    HEADER_DIVIDER_Y,
    SCREEN_WIDTH,
    SLIDER_CENTER_Y,
    SLIDER_KNOB_DIAMETER,
    SLIDER_TRACK_HEIGHT,
    SLIDER_TRACK_WIDTH,
    SLIDER_TRACK_X,
    STATUS_RECT,
    STATUS_TEXT_POS,
    TITLE_POS,
};
use crate::input::slider_knob_x;
use crate::status::Status;
use crate::styles::{CENTERED, STATUS_FONT, TITLE_STYLE};

const SWITCH_KNOB_INSET: u32 = 3;
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

/// Draw a centered title and the divider below it.
pub fn draw_header<D>(
    display: &mut D,
    title: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(title, TITLE_POS, TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();
    Line::new(Point::new(0, HEADER_DIVIDER_Y), Point::new(SCREEN_WIDTH as i32 - 1, HEADER_DIVIDER_Y))
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}

/// Draw a pill-shaped on/off switch filling `bounds`.
///
/// The knob sits on the right with an accent track when `on`, on the left
/// with a gray track otherwise.
pub fn draw_switch<D>(
    display: &mut D,
    bounds: Rectangle,
    on: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let radius = bounds.size.height / 2;
    let track_color = if on { ACCENT } else { GRAY };
    RoundedRectangle::with_equal_corners(bounds, Size::new(radius, radius))
        .into_styled(PrimitiveStyle::with_fill(track_color))
        .draw(display)
        .ok();

    let knob_diameter = bounds.size.height.saturating_sub(2 * SWITCH_KNOB_INSET);
    let knob_x = if on {
        bounds.top_left.x + bounds.size.width as i32 - (SWITCH_KNOB_INSET + knob_diameter) as i32
    } else {
        bounds.top_left.x + SWITCH_KNOB_INSET as i32
    };
    let knob_color = if on { WHITE } else { LIGHT_GRAY };
    Circle::new(Point::new(knob_x, bounds.top_left.y + SWITCH_KNOB_INSET as i32), knob_diameter)
        .into_styled(PrimitiveStyle::with_fill(knob_color))
        .draw(display)
        .ok();
}

/// Draw the threshold slider track with its knob at `value`.
pub fn draw_slider<D>(
    display: &mut D,
    value: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let knob_x = slider_knob_x(value);
    let track_y = SLIDER_CENTER_Y - (SLIDER_TRACK_HEIGHT / 2) as i32;

    Rectangle::new(Point::new(SLIDER_TRACK_X, track_y), Size::new(SLIDER_TRACK_WIDTH, SLIDER_TRACK_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(GRAY))
        .draw(display)
        .ok();

    let filled = (knob_x - SLIDER_TRACK_X).max(0) as u32;
    if filled > 0 {
        Rectangle::new(Point::new(SLIDER_TRACK_X, track_y), Size::new(filled, SLIDER_TRACK_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(ACCENT))
            .draw(display)
            .ok();
    }

    Circle::with_center(Point::new(knob_x, SLIDER_CENTER_Y), SLIDER_KNOB_DIAMETER)
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();
}

/// Fill the status box with the status color and center its message.
pub fn draw_status_box<D>(
    display: &mut D,
    status: Status,
) where
    D: DrawTarget<Color = Rgb565>,
{
    STATUS_RECT
        .into_styled(PrimitiveStyle::with_fill(status.color.rgb()))
        .draw(display)
        .ok();

    let style = MonoTextStyle::new(STATUS_FONT, status.color.text_color());
    Text::with_text_style(status.label.message(), STATUS_TEXT_POS, style, CENTERED)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{GREEN, RED, STATUS_GRAY};
    use crate::config::SWITCH_RECT;
    use crate::widgets::test_display::FrameBuffer;

    fn knob_probe(on: bool) -> Point {
        let y = SWITCH_RECT.center().y;
        if on {
            Point::new(SWITCH_RECT.top_left.x + SWITCH_RECT.size.width as i32 - 10, y)
        } else {
            Point::new(SWITCH_RECT.top_left.x + 10, y)
        }
    }

    #[test]
    fn test_switch_on() {
        let mut fb = FrameBuffer::new();
        draw_switch(&mut fb, SWITCH_RECT, true);
        assert_eq!(fb.pixel(knob_probe(true)), WHITE);
        assert_eq!(fb.pixel(knob_probe(false)), ACCENT);
    }

    #[test]
    fn test_switch_off() {
        let mut fb = FrameBuffer::new();
        draw_switch(&mut fb, SWITCH_RECT, false);
        assert_eq!(fb.pixel(knob_probe(false)), LIGHT_GRAY);
        assert_eq!(fb.pixel(knob_probe(true)), GRAY);
    }

    #[test]
    fn test_slider_fill_follows_value() {
        let mut fb = FrameBuffer::new();
        draw_slider(&mut fb, 2000.0);
        // Left of the knob the track is filled
        assert_eq!(fb.pixel(Point::new(SLIDER_TRACK_X + 20, SLIDER_CENTER_Y)), ACCENT);

        let mut fb = FrameBuffer::new();
        draw_slider(&mut fb, 0.0);
        assert_eq!(fb.pixel(Point::new(SLIDER_TRACK_X + SLIDER_TRACK_WIDTH as i32 - 20, SLIDER_CENTER_Y)), GRAY);
        assert_eq!(fb.pixel(Point::new(SLIDER_TRACK_X, SLIDER_CENTER_Y)), WHITE);
    }

    #[test]
    fn test_status_box_fill() {
        for (status, color) in [(Status::BELOW, RED), (Status::ABOVE, GREEN), (Status::DISABLED, STATUS_GRAY)] {
            let mut fb = FrameBuffer::new();
            draw_status_box(&mut fb, status);
            assert_eq!(fb.pixel(STATUS_RECT.top_left + Point::new(2, 2)), color);
            // Text was drawn in the contrast color
            assert!(fb.count_in(STATUS_RECT, status.color.text_color()) > 0);
        }
    }

    #[test]
    fn test_header_divider() {
        let mut fb = FrameBuffer::new();
        draw_header(&mut fb, "SENSOR PANEL");
        assert_eq!(fb.pixel(Point::new(5, HEADER_DIVIDER_Y)), GRAY);
        assert!(fb.count_in(Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, 30)), ACCENT) > 0);
    }
}
