//! Sensor state controller: the panel's reactive state.
//!
//! Holds the four fields the view renders and the mutators that change them:
//!
//! | Field                    | Initial | Changed by                          |
//! |--------------------------|---------|-------------------------------------|
//! | sensing enabled          | `false` | [`SensorStateController::toggle_sensing`] |
//! | light threshold          | `1000`  | [`SensorStateController::set_light_threshold`] |
//! | current light value      | `0`     | light samples, while sensing        |
//! | acceleration magnitude   | `0`     | accelerometer samples, while sensing |
//!
//! While sensing is off, samples are discarded and both readings stay frozen
//! at their last values. Switching sensing off never resets them.
//!
//! # Change Notification
//!
//! Every accepted mutation bumps [`SensorStateController::revision`]. The
//! render layer compares it with the revision it last drew and redraws on a
//! difference (see [`crate::render::RenderState`]). Discarded samples leave
//! the revision untouched.
//!
//! # Threading
//!
//! All operations are synchronous and O(1). The controller is meant to be
//! owned by the UI loop; sample delivery is marshalled onto that loop by the
//! [`crate::sensors::Subscription`] that drains the platform hub.

use crate::sensors::SensorEvent;
use crate::status::{Status, compute_status};
use crate::thresholds::{LIGHT_THRESHOLD_DEFAULT, clamp_threshold};

/// Euclidean norm of a three-axis acceleration sample.
///
/// Evaluated as nested `hypotf` so squaring a large component cannot
/// overflow. Non-finite components propagate (NaN in, NaN out).
#[inline]
#[must_use]
pub fn acceleration_magnitude(
    x: f32,
    y: f32,
    z: f32,
) -> f32 {
    libm::hypotf(libm::hypotf(x, y), z)
}

/// Reactive state bound to the sensor panel.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorStateController {
    sensing_enabled: bool,
    light_threshold: f32,
    current_light_value: f32,
    acceleration_magnitude: f32,
    revision: u32,
}

impl SensorStateController {
    /// Create a controller with sensing off and the default threshold.
    pub const fn new() -> Self {
        Self {
            sensing_enabled: false,
            light_threshold: LIGHT_THRESHOLD_DEFAULT,
            current_light_value: 0.0,
            acceleration_magnitude: 0.0,
            revision: 0,
        }
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Switch sample consumption on or off. Idempotent.
    pub fn toggle_sensing(
        &mut self,
        enabled: bool,
    ) {
        self.sensing_enabled = enabled;
        self.bump();
    }

    /// Set the light threshold, clamped to the slider range.
    ///
    /// NaN is ignored and the previous threshold is kept.
    pub fn set_light_threshold(
        &mut self,
        value: f32,
    ) {
        if value.is_nan() {
            return;
        }
        self.light_threshold = clamp_threshold(value);
        self.bump();
    }

    /// Consume an accelerometer sample.
    ///
    /// Always returns the magnitude of the sample; it is stored only while
    /// sensing is enabled.
    pub fn on_accelerometer_sample(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
    ) -> f32 {
        let magnitude = acceleration_magnitude(x, y, z);
        if self.sensing_enabled {
            self.acceleration_magnitude = magnitude;
            self.bump();
        }
        magnitude
    }

    /// Consume an ambient light sample. Stored as-is while sensing is enabled.
    pub fn on_light_sample(
        &mut self,
        value: f32,
    ) {
        if self.sensing_enabled {
            self.current_light_value = value;
            self.bump();
        }
    }

    /// Dispatch a platform event to the matching sample handler.
    pub fn handle_event(
        &mut self,
        event: SensorEvent,
    ) {
        match event {
            SensorEvent::Accelerometer { x, y, z } => {
                self.on_accelerometer_sample(x, y, z);
            }
            SensorEvent::Light(value) => self.on_light_sample(value),
            SensorEvent::AccuracyChanged(_) => {}
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn is_sensing_enabled(&self) -> bool { self.sensing_enabled }

    #[inline]
    pub const fn light_threshold(&self) -> f32 { self.light_threshold }

    #[inline]
    pub const fn current_light_value(&self) -> f32 { self.current_light_value }

    #[inline]
    pub const fn acceleration_magnitude(&self) -> f32 { self.acceleration_magnitude }

    /// Status for the current state.
    #[inline]
    pub fn status(&self) -> Status { compute_status(self.sensing_enabled, self.current_light_value, self.light_threshold) }

    /// Counter bumped on every accepted mutation (wrapping).
    #[inline]
    pub const fn revision(&self) -> u32 { self.revision }

    const fn bump(&mut self) { self.revision = self.revision.wrapping_add(1); }
}

impl Default for SensorStateController {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
