//! Light threshold bounds and slider configuration.
//!
//! All values are compile-time constants with validation assertions, so a
//! misconfigured range (e.g. `MIN > MAX`) fails the build instead of
//! surfacing as a clamp panic at runtime.

// =============================================================================
// Light Threshold Range
// =============================================================================

/// Lowest threshold the slider can select (lux).
pub const LIGHT_THRESHOLD_MIN: f32 = 0.0;

/// Highest threshold the slider can select (lux).
pub const LIGHT_THRESHOLD_MAX: f32 = 2000.0;

/// Threshold in effect when the panel starts.
pub const LIGHT_THRESHOLD_DEFAULT: f32 = 1000.0;

/// Width of the selectable range.
pub const LIGHT_THRESHOLD_RANGE: f32 = LIGHT_THRESHOLD_MAX - LIGHT_THRESHOLD_MIN;

const _: () = assert!(LIGHT_THRESHOLD_MIN < LIGHT_THRESHOLD_MAX);
const _: () = assert!(LIGHT_THRESHOLD_DEFAULT >= LIGHT_THRESHOLD_MIN);
const _: () = assert!(LIGHT_THRESHOLD_DEFAULT <= LIGHT_THRESHOLD_MAX);

// =============================================================================
// Slider Quantization
// =============================================================================

/// Number of discrete stops between the slider's two ends.
///
/// The ends are not counted, so the track is split into
/// `THRESHOLD_SLIDER_STEPS + 1` equal intervals.
pub const THRESHOLD_SLIDER_STEPS: u32 = 200;

/// Number of equal intervals on the slider track.
pub const THRESHOLD_SLIDER_INTERVALS: u32 = THRESHOLD_SLIDER_STEPS + 1;

const _: () = assert!(THRESHOLD_SLIDER_INTERVALS > 0);

/// Clamp a threshold into `[LIGHT_THRESHOLD_MIN, LIGHT_THRESHOLD_MAX]`.
///
/// NaN is passed through unchanged; callers decide how to treat it.
#[inline]
pub fn clamp_threshold(value: f32) -> f32 { value.clamp(LIGHT_THRESHOLD_MIN, LIGHT_THRESHOLD_MAX) }

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_range_ordering() {
        assert!(LIGHT_THRESHOLD_MIN < LIGHT_THRESHOLD_DEFAULT);
        assert!(LIGHT_THRESHOLD_DEFAULT < LIGHT_THRESHOLD_MAX);
    }

    #[test]
    fn test_clamp_threshold_in_range() {
        assert_eq!(clamp_threshold(0.0), 0.0);
        assert_eq!(clamp_threshold(750.5), 750.5);
        assert_eq!(clamp_threshold(2000.0), 2000.0);
    }

    #[test]
    fn test_clamp_threshold_out_of_range() {
        assert_eq!(clamp_threshold(-0.01), LIGHT_THRESHOLD_MIN);
        assert_eq!(clamp_threshold(-1.0e9), LIGHT_THRESHOLD_MIN);
        assert_eq!(clamp_threshold(2000.01), LIGHT_THRESHOLD_MAX);
        assert_eq!(clamp_threshold(f32::INFINITY), LIGHT_THRESHOLD_MAX);
        assert_eq!(clamp_threshold(f32::NEG_INFINITY), LIGHT_THRESHOLD_MIN);
    }

    #[test]
    fn test_clamp_threshold_nan_passthrough() {
        assert!(clamp_threshold(f32::NAN).is_nan());
    }

    #[test]
    fn test_slider_intervals() {
        assert_eq!(THRESHOLD_SLIDER_INTERVALS, 201);
    }
}
