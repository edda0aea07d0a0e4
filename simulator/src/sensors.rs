//! Simulated sensor hub.
//!
//! Produces a slowly sweeping ambient light level and a gravity vector with a
//! little hand shake on top. Each registered sensor delivers one sample per
//! sample interval; samples are never queued up while a sensor is not
//! registered.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use sensor_panel_common::thresholds::{LIGHT_THRESHOLD_MAX, LIGHT_THRESHOLD_MIN};
use sensor_panel_common::{SensorError, SensorEvent, SensorHub, SensorKind};

/// Standard gravity in m/s².
const GRAVITY: f32 = 9.81;

/// Light sweep frequency (radians per second).
const LIGHT_FREQ: f32 = 0.15;

struct Channel {
    present: bool,
    registered: bool,
    next_due: Instant,
}

impl Channel {
    fn new(present: bool) -> Self {
        Self {
            present,
            registered: false,
            next_due: Instant::now(),
        }
    }

    /// Returns `true` if a sample is due, and schedules the next one.
    fn take_due(
        &mut self,
        now: Instant,
        interval: Duration,
    ) -> bool {
        if !self.registered || now < self.next_due {
            return false;
        }
        // Late samples are dropped, not replayed
        self.next_due = now + interval;
        true
    }
}

/// Sensor hub backed by synthetic signals.
pub struct SimulatedSensors {
    accelerometer: Channel,
    light: Channel,
    interval: Duration,
    started: Instant,
    pending: VecDeque<SensorEvent>,
}

impl SimulatedSensors {
    pub fn new(
        has_accelerometer: bool,
        has_light: bool,
        interval: Duration,
    ) -> Self {
        Self {
            accelerometer: Channel::new(has_accelerometer),
            light: Channel::new(has_light),
            interval,
            started: Instant::now(),
            pending: VecDeque::new(),
        }
    }

    fn channel(
        &mut self,
        kind: SensorKind,
    ) -> &mut Channel {
        match kind {
            SensorKind::Accelerometer => &mut self.accelerometer,
            SensorKind::Light => &mut self.light,
        }
    }

    fn sample_due(&mut self) {
        let now = Instant::now();
        let t = now.duration_since(self.started).as_secs_f32();

        if self.accelerometer.take_due(now, self.interval) {
            let (x, y, z) = accelerometer_signal(t);
            self.pending.push_back(SensorEvent::Accelerometer { x, y, z });
        }
        if self.light.take_due(now, self.interval) {
            let lux = fake_signal(t, LIGHT_THRESHOLD_MIN, LIGHT_THRESHOLD_MAX, LIGHT_FREQ);
            self.pending.push_back(SensorEvent::Light(lux));
        }
    }
}

impl SensorHub for SimulatedSensors {
    fn is_available(
        &self,
        kind: SensorKind,
    ) -> bool {
        match kind {
            SensorKind::Accelerometer => self.accelerometer.present,
            SensorKind::Light => self.light.present,
        }
    }

    fn register(
        &mut self,
        kind: SensorKind,
    ) -> Result<(), SensorError> {
        let channel = self.channel(kind);
        if !channel.present {
            return Err(SensorError::Unavailable(kind));
        }
        if channel.registered {
            return Err(SensorError::AlreadyRegistered(kind));
        }
        channel.registered = true;
        channel.next_due = Instant::now();
        // Platforms report the initial accuracy right after registration
        self.pending.push_back(SensorEvent::AccuracyChanged(kind));
        Ok(())
    }

    fn unregister(
        &mut self,
        kind: SensorKind,
    ) {
        self.channel(kind).registered = false;
        self.pending.retain(|event| event_kind(event) != kind);
    }

    fn poll(&mut self) -> Option<SensorEvent> {
        if self.pending.is_empty() {
            self.sample_due();
        }
        self.pending.pop_front()
    }
}

fn event_kind(event: &SensorEvent) -> SensorKind {
    match event {
        SensorEvent::Accelerometer { .. } => SensorKind::Accelerometer,
        SensorEvent::Light(_) => SensorKind::Light,
        SensorEvent::AccuracyChanged(kind) => *kind,
    }
}

fn accelerometer_signal(t: f32) -> (f32, f32, f32) {
    let x = 1.5 * (t * 2.3).sin();
    let y = (t * 1.7 + 1.0).sin();
    let z = GRAVITY + 0.5 * (t * 3.1).sin();
    (x, y, z)
}

fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_hub_is_silent() {
        let mut hub = SimulatedSensors::new(true, true, Duration::ZERO);
        assert_eq!(hub.poll(), None);
    }

    #[test]
    fn test_missing_sensor_rejected() {
        let mut hub = SimulatedSensors::new(true, false, Duration::ZERO);
        assert!(!hub.is_available(SensorKind::Light));
        assert_eq!(hub.register(SensorKind::Light), Err(SensorError::Unavailable(SensorKind::Light)));
    }

    #[test]
    fn test_double_register_rejected() {
        let mut hub = SimulatedSensors::new(true, true, Duration::ZERO);
        assert!(hub.register(SensorKind::Accelerometer).is_ok());
        assert_eq!(
            hub.register(SensorKind::Accelerometer),
            Err(SensorError::AlreadyRegistered(SensorKind::Accelerometer))
        );
    }

    #[test]
    fn test_registered_light_delivers_in_range() {
        let mut hub = SimulatedSensors::new(false, true, Duration::ZERO);
        hub.register(SensorKind::Light).unwrap();
        assert_eq!(hub.poll(), Some(SensorEvent::AccuracyChanged(SensorKind::Light)));
        match hub.poll() {
            Some(SensorEvent::Light(lux)) => assert!((LIGHT_THRESHOLD_MIN..=LIGHT_THRESHOLD_MAX).contains(&lux)),
            other => panic!("expected light sample, got {other:?}"),
        }
    }

    #[test]
    fn test_unregister_drops_pending() {
        let mut hub = SimulatedSensors::new(true, true, Duration::ZERO);
        hub.register(SensorKind::Accelerometer).unwrap();
        hub.unregister(SensorKind::Accelerometer);
        assert_eq!(hub.poll(), None);
    }

    #[test]
    fn test_accelerometer_near_gravity() {
        for i in 0..100 {
            let (x, y, z) = accelerometer_signal(i as f32 * 0.1);
            let magnitude = (x * x + y * y + z * z).sqrt();
            assert!((7.0..13.0).contains(&magnitude));
        }
    }
}
