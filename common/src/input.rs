//! Pointer hit-testing and slider math for the panel controls.
//!
//! Positions come from [`crate::config`], the same constants the widgets draw
//! with. The slider works like a platform slider with discrete stops: the
//! track is split into [`THRESHOLD_SLIDER_INTERVALS`] equal intervals and a
//! press snaps to the nearest stop.

use embedded_graphics::prelude::Point;

use crate::config::{SLIDER_HIT_RECT, SLIDER_TRACK_WIDTH, SLIDER_TRACK_X, SWITCH_RECT};
use crate::thresholds::{
    LIGHT_THRESHOLD_MIN,
    LIGHT_THRESHOLD_RANGE,
    THRESHOLD_SLIDER_INTERVALS,
    clamp_threshold,
};

/// Tolerance when deciding whether a value already sits on a stop.
const STOP_EPSILON: f32 = 1.0e-3;

/// Interactive elements on the panel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Control {
    SensingSwitch,
    ThresholdSlider,
}

/// Control under `point`, if any.
pub fn hit_test(point: Point) -> Option<Control> {
    if SWITCH_RECT.contains(point) {
        Some(Control::SensingSwitch)
    } else if SLIDER_HIT_RECT.contains(point) {
        Some(Control::ThresholdSlider)
    } else {
        None
    }
}

/// Threshold distance between two adjacent slider stops.
#[inline]
pub fn slider_step() -> f32 { LIGHT_THRESHOLD_RANGE / THRESHOLD_SLIDER_INTERVALS as f32 }

/// Threshold at stop `index` (0 ..= intervals).
fn value_at_stop(index: u32) -> f32 {
    let index = index.min(THRESHOLD_SLIDER_INTERVALS);
    clamp_threshold(LIGHT_THRESHOLD_MIN + (index as f32 / THRESHOLD_SLIDER_INTERVALS as f32) * LIGHT_THRESHOLD_RANGE)
}

/// Fractional stop position of a threshold value.
fn stop_position(value: f32) -> f32 {
    (clamp_threshold(value) - LIGHT_THRESHOLD_MIN) / LIGHT_THRESHOLD_RANGE * THRESHOLD_SLIDER_INTERVALS as f32
}

/// Threshold selected by pressing the slider at pixel column `x`.
///
/// Columns left or right of the track select the ends.
pub fn slider_value_at(x: i32) -> f32 {
    let fraction = ((x - SLIDER_TRACK_X) as f32 / SLIDER_TRACK_WIDTH as f32).clamp(0.0, 1.0);
    let index = libm::roundf(fraction * THRESHOLD_SLIDER_INTERVALS as f32) as u32;
    value_at_stop(index)
}

/// Pixel column of the slider knob for a threshold value.
pub fn slider_knob_x(value: f32) -> i32 {
    let fraction = if value.is_nan() {
        0.0
    } else {
        (clamp_threshold(value) - LIGHT_THRESHOLD_MIN) / LIGHT_THRESHOLD_RANGE
    };
    SLIDER_TRACK_X + libm::roundf(fraction * SLIDER_TRACK_WIDTH as f32) as i32
}

/// Move a threshold by whole slider stops.
///
/// A value between two stops moves to the neighbouring stop in the requested
/// direction first. The result is clamped to the slider ends.
pub fn nudge_threshold(
    current: f32,
    ticks: i32,
) -> f32 {
    if ticks == 0 {
        return clamp_threshold(current);
    }
    let position = stop_position(current);
    let base = if ticks > 0 {
        libm::floorf(position + STOP_EPSILON)
    } else {
        libm::ceilf(position - STOP_EPSILON)
    };
    let target = (base as i64 + i64::from(ticks)).clamp(0, i64::from(THRESHOLD_SLIDER_INTERVALS));
    value_at_stop(target as u32)
}

// =============================================================================
// Unit Tests
// =============================================================================
