//! Color constants for the sensor panel.
//!
//! Standard colors come from the `RgbColor` trait constants so they use the
//! full Rgb565 channel range (5 bits red, 6 bits green, 5 bits blue).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Panel background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Default text color.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Status fill when the light is below the threshold.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Status fill when the light is at or above the threshold.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow. Warning log lines.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors
// =============================================================================

/// Dark gray for dividers and the inactive slider track.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Mid gray status fill while sensing is disabled.
/// RGB565: (16, 32, 16) - roughly 50% brightness.
pub const STATUS_GRAY: Rgb565 = Rgb565::new(16, 32, 16);

/// Light gray for the switch knob and secondary text.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(24, 48, 24);

/// Accent for the active switch and the filled part of the slider.
/// RGB565: (0, 40, 28) - teal.
pub const ACCENT: Rgb565 = Rgb565::new(0, 40, 28);
