//! Sensor subscription contract between the panel and the platform.
//!
//! The platform side implements [`SensorHub`]: it knows which sensors exist,
//! accepts registrations, and hands out pending samples through
//! [`SensorHub::poll`]. The panel never talks to a hub directly; it holds a
//! [`Subscription`] while the view is visible.
//!
//! # Lifecycle
//!
//! ```ignore
//! // view becomes visible
//! let mut subscription = Subscription::acquire(&mut hub)?;
//! loop {
//!     subscription.drain(&mut controller);
//!     // render ...
//! }
//! // view hidden: dropping the subscription unregisters every sensor
//! ```
//!
//! A sensor the device lacks is skipped at acquisition and reported through
//! [`Subscription::missing`]. The controller then simply never sees samples
//! for it, which leaves the matching field at its initial value.

use core::fmt;

use heapless::Vec;

use crate::controller::SensorStateController;

/// Upper bound on events forwarded by a single [`Subscription::drain`] call.
///
/// Keeps one frame's work bounded if a hub produces samples faster than the
/// panel renders.
pub const MAX_EVENTS_PER_DRAIN: usize = 32;

/// Hardware sensors the panel listens to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SensorKind {
    Accelerometer,
    Light,
}

impl SensorKind {
    /// Every sensor the panel subscribes to, in registration order.
    pub const ALL: [Self; 2] = [Self::Accelerometer, Self::Light];

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Accelerometer => "accelerometer",
            Self::Light => "light",
        }
    }
}

/// A single notification from the platform.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SensorEvent {
    /// Three-axis acceleration sample in m/s².
    Accelerometer { x: f32, y: f32, z: f32 },
    /// Ambient light sample in lux.
    Light(f32),
    /// The platform changed a sensor's accuracy. The panel ignores it.
    AccuracyChanged(SensorKind),
}

/// Failure to set up a sensor subscription.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SensorError {
    /// The device has no sensor of this kind.
    Unavailable(SensorKind),
    /// The sensor is already registered with this hub.
    AlreadyRegistered(SensorKind),
}

impl fmt::Display for SensorError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Unavailable(kind) => write!(f, "{} sensor not available", kind.name()),
            Self::AlreadyRegistered(kind) => write!(f, "{} sensor already registered", kind.name()),
        }
    }
}

impl core::error::Error for SensorError {}

/// Platform sensor service.
pub trait SensorHub {
    /// Whether the device has a sensor of this kind.
    fn is_available(
        &self,
        kind: SensorKind,
    ) -> bool;

    /// Start delivering samples for `kind`.
    fn register(
        &mut self,
        kind: SensorKind,
    ) -> Result<(), SensorError>;

    /// Stop delivering samples for `kind`. Unregistering twice is a no-op.
    fn unregister(
        &mut self,
        kind: SensorKind,
    );

    /// Next pending event, if any.
    fn poll(&mut self) -> Option<SensorEvent>;
}

/// Registration of every available sensor, released on drop.
pub struct Subscription<'a, H: SensorHub> {
    hub: &'a mut H,
    registered: Vec<SensorKind, 2>,
    missing: Vec<SensorKind, 2>,
}

impl<'a, H: SensorHub> Subscription<'a, H> {
    /// Register every sensor in [`SensorKind::ALL`] that the hub has.
    ///
    /// Absent sensors are recorded as missing instead of failing. If a
    /// registration fails, sensors registered so far are released before the
    /// error is returned.
    pub fn acquire(hub: &'a mut H) -> Result<Self, SensorError> {
        let mut subscription = Self {
            hub,
            registered: Vec::new(),
            missing: Vec::new(),
        };

        for kind in SensorKind::ALL {
            if !subscription.hub.is_available(kind) {
                subscription.missing.push(kind).ok();
                continue;
            }
            subscription.hub.register(kind)?;
            subscription.registered.push(kind).ok();
        }

        Ok(subscription)
    }

    /// Sensors that are delivering samples.
    pub fn registered(&self) -> &[SensorKind] { &self.registered }

    /// Sensors the device does not have.
    pub fn missing(&self) -> &[SensorKind] { &self.missing }

    /// Forward pending events to the controller.
    ///
    /// Returns the number of events forwarded (at most
    /// [`MAX_EVENTS_PER_DRAIN`]).
    pub fn drain(
        &mut self,
        controller: &mut SensorStateController,
    ) -> usize {
        let mut forwarded = 0;
        while forwarded < MAX_EVENTS_PER_DRAIN {
            let Some(event) = self.hub.poll() else {
                break;
            };
            controller.handle_event(event);
            forwarded += 1;
        }
        forwarded
    }

    /// Access the underlying hub.
    pub fn hub(&self) -> &H { &*self.hub }
}

impl<H: SensorHub> Drop for Subscription<'_, H> {
    fn drop(&mut self) {
        for kind in &self.registered {
            self.hub.unregister(*kind);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    #[derive(Default)]
    struct FakeHub {
        has_accel: bool,
        has_light: bool,
        accel_registered: bool,
        light_registered: bool,
        fail_light: bool,
        queue: VecDeque<SensorEvent>,
    }

    impl FakeHub {
        fn full() -> Self {
            Self {
                has_accel: true,
                has_light: true,
                ..Self::default()
            }
        }

        fn flag(
            &mut self,
            kind: SensorKind,
        ) -> &mut bool {
            match kind {
                SensorKind::Accelerometer => &mut self.accel_registered,
                SensorKind::Light => &mut self.light_registered,
            }
        }
    }

    impl SensorHub for FakeHub {
        fn is_available(
            &self,
            kind: SensorKind,
        ) -> bool {
            match kind {
                SensorKind::Accelerometer => self.has_accel,
                SensorKind::Light => self.has_light,
            }
        }

        fn register(
            &mut self,
            kind: SensorKind,
        ) -> Result<(), SensorError> {
            if kind == SensorKind::Light && self.fail_light {
                return Err(SensorError::Unavailable(kind));
            }
            let flag = self.flag(kind);
            if *flag {
                return Err(SensorError::AlreadyRegistered(kind));
            }
            *flag = true;
            Ok(())
        }

        fn unregister(
            &mut self,
            kind: SensorKind,
        ) {
            *self.flag(kind) = false;
        }

        fn poll(&mut self) -> Option<SensorEvent> { self.queue.pop_front() }
    }

    #[test]
    fn test_acquire_registers_all() {
        let mut hub = FakeHub::full();
        {
            let subscription = Subscription::acquire(&mut hub).unwrap();
            assert_eq!(subscription.registered(), &SensorKind::ALL);
            assert!(subscription.missing().is_empty());
            assert!(subscription.hub().accel_registered);
            assert!(subscription.hub().light_registered);
        }
        assert!(!hub.accel_registered);
        assert!(!hub.light_registered);
    }

    #[test]
    fn test_missing_sensor_tolerated() {
        let mut hub = FakeHub {
            has_accel: true,
            ..FakeHub::default()
        };
        let subscription = Subscription::acquire(&mut hub).unwrap();
        assert_eq!(subscription.registered(), &[SensorKind::Accelerometer]);
        assert_eq!(subscription.missing(), &[SensorKind::Light]);
    }

    #[test]
    fn test_failed_registration_releases_earlier_sensors() {
        let mut hub = FakeHub {
            fail_light: true,
            ..FakeHub::full()
        };
        let result = Subscription::acquire(&mut hub);
        assert_eq!(result.err(), Some(SensorError::Unavailable(SensorKind::Light)));
        assert!(!hub.accel_registered);
    }

    #[test]
    fn test_reacquire_after_release() {
        let mut hub = FakeHub::full();
        drop(Subscription::acquire(&mut hub).unwrap());
        let subscription = Subscription::acquire(&mut hub);
        assert!(subscription.is_ok());
    }

    #[test]
    fn test_drain_forwards_events() {
        let mut hub = FakeHub::full();
        hub.queue.push_back(SensorEvent::Accelerometer { x: 3.0, y: 4.0, z: 0.0 });
        hub.queue.push_back(SensorEvent::Light(800.0));
        hub.queue.push_back(SensorEvent::AccuracyChanged(SensorKind::Light));

        let mut controller = SensorStateController::new();
        controller.toggle_sensing(true);

        let mut subscription = Subscription::acquire(&mut hub).unwrap();
        assert_eq!(subscription.drain(&mut controller), 3);
        assert_eq!(subscription.drain(&mut controller), 0);

        assert_eq!(controller.acceleration_magnitude(), 5.0);
        assert_eq!(controller.current_light_value(), 800.0);
    }

    #[test]
    fn test_drain_is_bounded() {
        let mut hub = FakeHub::full();
        for i in 0..(MAX_EVENTS_PER_DRAIN + 5) {
            hub.queue.push_back(SensorEvent::Light(i as f32));
        }
        let mut controller = SensorStateController::new();
        let mut subscription = Subscription::acquire(&mut hub).unwrap();
        assert_eq!(subscription.drain(&mut controller), MAX_EVENTS_PER_DRAIN);
        assert_eq!(subscription.drain(&mut controller), 5);
    }

    #[test]
    fn test_error_display() {
        let msg = std::format!("{}", SensorError::Unavailable(SensorKind::Light));
        assert_eq!(msg, "light sensor not available");
    }
}
