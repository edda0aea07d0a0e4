//! Popup overlay shown while the panel is paused.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{GRAY, WHITE};
use crate::config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{BODY_STYLE_WHITE, CENTERED, OVERLAY_STYLE_WHITE};

const POPUP_WIDTH: u32 = 180;
const POPUP_HEIGHT: u32 = 60;
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = (SCREEN_HEIGHT - POPUP_HEIGHT) as i32 / 2;

const TITLE_POS: Point = Point::new(CENTER_X, CENTER_Y - 2);
const HINT_POS: Point = Point::new(CENTER_X, CENTER_Y + 18);

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const GRAY_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GRAY);

const BORDER_POS: Point = Point::new(POPUP_X - 3, POPUP_Y - 3);
const BORDER_SIZE: Size = Size::new(POPUP_WIDTH + 6, POPUP_HEIGHT + 6);
const BG_POS: Point = Point::new(POPUP_X, POPUP_Y);
const BG_SIZE: Size = Size::new(POPUP_WIDTH, POPUP_HEIGHT);

/// Draw the "PAUSED" popup on top of whatever is on screen.
pub fn draw_paused_overlay<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(BORDER_POS, BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();

    Rectangle::new(BG_POS, BG_SIZE)
        .into_styled(GRAY_FILL)
        .draw(display)
        .ok();

    Text::with_text_style("PAUSED", TITLE_POS, OVERLAY_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("P to resume", HINT_POS, BODY_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_display::FrameBuffer;

    #[test]
    fn test_overlay_border_and_background() {
        let mut fb = FrameBuffer::new();
        draw_paused_overlay(&mut fb);
        assert_eq!(fb.pixel(BORDER_POS), WHITE);
        assert_eq!(fb.pixel(BG_POS), GRAY);
        assert!(fb.count_in(Rectangle::new(BG_POS, BG_SIZE), WHITE) > 0);
    }
}
