//! Pre-computed static text styles.
//!
//! Styles are `const` so drawing code references them directly instead of
//! building a `MonoTextStyle` every frame. Styles whose color depends on
//! runtime state (status text, log levels) are built from the exposed font
//! references: `MonoTextStyle::new(BODY_FONT, color)`.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_7X13, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_14_POINT;

use crate::colors::{ACCENT, LIGHT_GRAY, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Used for the title, status message and overlays.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for readouts and log lines.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Body font for readouts (7x13 pixels).
pub const BODY_FONT: &MonoFont = &FONT_7X13;

/// Small font for log lines (6x10 pixels).
pub const LOG_FONT: &MonoFont = &FONT_6X10;

/// Status message font (`ProFont` 14pt).
pub const STATUS_FONT: &MonoFont = &PROFONT_14_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Panel title (10x20 pixels, accent color).
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, ACCENT);

/// White body text on the black background.
pub const BODY_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(BODY_FONT, WHITE);

/// Muted body text for hints.
pub const BODY_STYLE_MUTED: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, LIGHT_GRAY);

/// White overlay text.
pub const OVERLAY_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);
