//! Threshold status derived from the sensing flag and the light level.
//!
//! [`compute_status`] is the only decision the panel makes about the light
//! level. It is a pure function of its three inputs and never looks at
//! controller state directly, so the host can evaluate it for any values.
//!
//! | Sensing  | Light vs threshold | Label      | Color |
//! |----------|--------------------|------------|-------|
//! | off      | any                | `Disabled` | Gray  |
//! | on       | `light < thr`      | `Below`    | Red   |
//! | on       | `light >= thr`     | `Above`    | Green |
//!
//! Equality reads as `Above`: only a strict less-than selects `Below`. A NaN
//! light value compares false against every threshold and therefore also
//! reads as `Above`.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLACK, GREEN, RED, STATUS_GRAY, WHITE};

/// Which side of the threshold the light level is on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusLabel {
    /// Light is strictly below the threshold.
    Below,
    /// Light is at or above the threshold.
    Above,
    /// Sensing is switched off.
    Disabled,
}

impl StatusLabel {
    /// Message shown inside the status box.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Below => "Light below threshold",
            Self::Above => "Light above threshold",
            Self::Disabled => "Sensor reading disabled",
        }
    }
}

/// Color tag paired with a [`StatusLabel`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusColor {
    Red,
    Green,
    Gray,
}

impl StatusColor {
    /// Fill color of the status box.
    pub const fn rgb(self) -> Rgb565 {
        match self {
            Self::Red => RED,
            Self::Green => GREEN,
            Self::Gray => STATUS_GRAY,
        }
    }

    /// Text color with enough contrast against [`Self::rgb`].
    pub const fn text_color(self) -> Rgb565 {
        match self {
            Self::Green => BLACK,
            Self::Red | Self::Gray => WHITE,
        }
    }
}

/// Status label and its display color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Status {
    pub label: StatusLabel,
    pub color: StatusColor,
}

impl Status {
    pub const DISABLED: Self = Self {
        label: StatusLabel::Disabled,
        color: StatusColor::Gray,
    };

    pub const BELOW: Self = Self {
        label: StatusLabel::Below,
        color: StatusColor::Red,
    };

    pub const ABOVE: Self = Self {
        label: StatusLabel::Above,
        color: StatusColor::Green,
    };
}

/// Map the sensing flag and light level to a status.
#[inline]
#[must_use]
pub fn compute_status(
    enabled: bool,
    current_light: f32,
    threshold: f32,
) -> Status {
    if !enabled {
        Status::DISABLED
    } else if current_light < threshold {
        Status::BELOW
    } else {
        Status::ABOVE
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
