//! Display geometry and panel layout constants.
//!
//! Every position the view and the input hit-testing share lives here, so a
//! control is always drawn exactly where clicks are tested for it. Values are
//! `const` and computed at compile time.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Left/right padding for text and controls.
pub const MARGIN_X: i32 = 10;

// =============================================================================
// Header
// =============================================================================

/// Panel title baseline (centered).
pub const TITLE_POS: Point = Point::new(CENTER_X, 22);

/// Y coordinate of the divider under the title.
pub const HEADER_DIVIDER_Y: i32 = 32;

// =============================================================================
// Sensing Switch Row
// =============================================================================

/// "Sensor reading" label baseline.
pub const SWITCH_LABEL_POS: Point = Point::new(MARGIN_X, 58);

/// Switch width in pixels.
pub const SWITCH_WIDTH: u32 = 48;

/// Switch height in pixels.
pub const SWITCH_HEIGHT: u32 = 22;

/// Bounds of the on/off switch, right-aligned on the label row.
pub const SWITCH_RECT: Rectangle = Rectangle::new(
    Point::new(SCREEN_WIDTH as i32 - MARGIN_X - SWITCH_WIDTH as i32, 42),
    Size::new(SWITCH_WIDTH, SWITCH_HEIGHT),
);

// =============================================================================
// Readouts
// =============================================================================

/// Acceleration magnitude baseline (only drawn while sensing).
pub const MAGNITUDE_POS: Point = Point::new(MARGIN_X, 88);

/// Light threshold readout baseline.
pub const THRESHOLD_TEXT_POS: Point = Point::new(MARGIN_X, 112);

/// Current light readout baseline.
pub const LIGHT_TEXT_POS: Point = Point::new(MARGIN_X, 160);

// =============================================================================
// Threshold Slider
// =============================================================================

/// Left end of the slider track.
pub const SLIDER_TRACK_X: i32 = 20;

/// Track length in pixels. Knob travel spans exactly this width.
pub const SLIDER_TRACK_WIDTH: u32 = 280;

/// Vertical center of the slider track.
pub const SLIDER_CENTER_Y: i32 = 130;

/// Track thickness.
pub const SLIDER_TRACK_HEIGHT: u32 = 4;

/// Knob diameter.
pub const SLIDER_KNOB_DIAMETER: u32 = 14;

/// Region that accepts slider presses (track plus knob overhang).
pub const SLIDER_HIT_RECT: Rectangle = Rectangle::new(
    Point::new(MARGIN_X, SLIDER_CENTER_Y - 12),
    Size::new(SCREEN_WIDTH - 2 * MARGIN_X as u32, 24),
);

const _: () = assert!(SLIDER_TRACK_X >= MARGIN_X);
const _: () = assert!(SLIDER_TRACK_X + SLIDER_TRACK_WIDTH as i32 <= SCREEN_WIDTH as i32 - MARGIN_X);

// =============================================================================
// Status Box
// =============================================================================

/// Colored status indicator at the bottom of the panel.
pub const STATUS_RECT: Rectangle = Rectangle::new(
    Point::new(MARGIN_X, 176),
    Size::new(SCREEN_WIDTH - 2 * MARGIN_X as u32, 56),
);

/// Status message baseline (centered in the box).
pub const STATUS_TEXT_POS: Point = Point::new(CENTER_X, 176 + 56 / 2 + 5);

const _: () = assert!(176 + 56 <= SCREEN_HEIGHT as i32);

// =============================================================================
// Log Page
// =============================================================================

/// First log line baseline.
pub const LOG_START_Y: i32 = 46;

/// Vertical distance between log lines.
pub const LOG_LINE_HEIGHT: i32 = 13;
