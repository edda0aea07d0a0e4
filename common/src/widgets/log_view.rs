//! Log page: the log buffer rendered as a small terminal.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use super::primitives::draw_header;
use crate::colors::BLACK;
use crate::config::{CENTER_X, LOG_LINE_HEIGHT, LOG_START_Y, MARGIN_X, SCREEN_HEIGHT};
use crate::log_buffer::{LOG_MSG_LEN, LogBuffer, LogEntry};
use crate::styles::{BODY_STYLE_MUTED, CENTERED, LEFT_ALIGNED, LOG_FONT};

const LOG_TITLE: &str = "EVENT LOG";
const EMPTY_HINT_POS: Point = Point::new(CENTER_X, LOG_START_Y + LOG_LINE_HEIGHT);

/// Format one entry as `[I]  12.345 message`.
fn format_entry(entry: &LogEntry) -> String<{ LOG_MSG_LEN + 16 }> {
    let mut line = String::new();
    let secs = entry.timestamp_ms / 1000;
    let millis = entry.timestamp_ms % 1000;
    let _ = write!(line, "[{}] {secs:>3}.{millis:03} {}", entry.level.prefix(), entry.message);
    line
}

/// Draw every buffered entry, oldest first, one colored line per entry.
pub fn draw_log_page<D>(
    display: &mut D,
    log: &LogBuffer,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();
    draw_header(display, LOG_TITLE);

    if log.is_empty() {
        Text::with_text_style("No events yet", EMPTY_HINT_POS, BODY_STYLE_MUTED, CENTERED)
            .draw(display)
            .ok();
        return;
    }

    let mut y = LOG_START_Y;
    for entry in log.iter() {
        if y > SCREEN_HEIGHT as i32 {
            break;
        }
        let style = MonoTextStyle::new(LOG_FONT, entry.level.color());
        Text::with_text_style(&format_entry(entry), Point::new(MARGIN_X, y), style, LEFT_ALIGNED)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::colors::{GREEN, LIGHT_GRAY, YELLOW};
    use crate::config::SCREEN_WIDTH;
    use crate::log_buffer::LogLevel;
    use crate::widgets::test_display::FrameBuffer;
    use crate::{log_info, log_warn};

    fn row(index: i32) -> Rectangle {
        let baseline = LOG_START_Y + index * LOG_LINE_HEIGHT;
        Rectangle::new(Point::new(0, baseline - 9), Size::new(SCREEN_WIDTH, 11))
    }

    #[test]
    fn test_format_entry() {
        let entry = LogEntry::new(LogLevel::Warn, "No light sensor", 12_345);
        assert_eq!(format_entry(&entry).as_str(), "[W]  12.345 No light sensor");
    }

    #[test]
    fn test_format_entry_full_message_fits() {
        let entry = LogEntry::new(LogLevel::Info, &"m".repeat(80), u32::MAX);
        assert!(format_entry(&entry).ends_with(entry.message.as_str()));
    }

    #[test]
    fn test_lines_use_level_colors() {
        let mut log = LogBuffer::new();
        log_info!(log, 0, "Sensing ON");
        log_warn!(log, 10, "No light sensor");

        let mut fb = FrameBuffer::new();
        draw_log_page(&mut fb, &log);
        assert!(fb.count_in(row(0), GREEN) > 0);
        assert_eq!(fb.count_in(row(0), YELLOW), 0);
        assert!(fb.count_in(row(1), YELLOW) > 0);
    }

    #[test]
    fn test_empty_log_hint() {
        let mut fb = FrameBuffer::new();
        draw_log_page(&mut fb, &LogBuffer::new());
        assert!(fb.count_in(row(1), LIGHT_GRAY) > 0);
    }
}
