//! Simulator application state and the per-session frame loop.

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use sensor_panel_common::widgets::{draw_log_page, draw_paused_overlay, draw_sensor_panel};
use sensor_panel_common::{
    Control,
    LogBuffer,
    Page,
    RenderState,
    SensorError,
    SensorHub,
    SensorStateController,
    Subscription,
    hit_test,
    log_info,
    log_warn,
    nudge_threshold,
    slider_value_at,
};

use crate::timing::{FRAME_TIME, PAUSED_FRAME_TIME};

/// Why a session or pause loop ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    Pause,
    Resume,
    Quit,
}

pub struct App {
    controller: SensorStateController,
    log: LogBuffer,
    render: RenderState,
    page: Page,
    started: Instant,
    /// Slider is being dragged with the left button held.
    dragging: bool,
}

impl App {
    pub fn new() -> Self {
        let mut app = Self {
            controller: SensorStateController::new(),
            log: LogBuffer::new(),
            render: RenderState::new(),
            page: Page::default(),
            started: Instant::now(),
            dragging: false,
        };
        log_info!(app.log, 0, "Panel started");
        app
    }

    fn now_ms(&self) -> u32 { self.started.elapsed().as_millis() as u32 }

    // =========================================================================
    // Actions
    // =========================================================================

    fn toggle_sensing(&mut self) {
        let enabled = !self.controller.is_sensing_enabled();
        self.controller.toggle_sensing(enabled);
        let now = self.now_ms();
        log_info!(self.log, now, "Sensing {}", if enabled { "ON" } else { "OFF" });
    }

    fn set_threshold(
        &mut self,
        value: f32,
        announce: bool,
    ) {
        let before = self.controller.light_threshold();
        self.controller.set_light_threshold(value);
        if announce && self.controller.light_threshold() != before {
            self.log_threshold();
        }
    }

    fn log_threshold(&mut self) {
        let now = self.now_ms();
        let threshold = self.controller.light_threshold();
        log_info!(self.log, now, "Threshold {:.2}", threshold);
    }

    fn nudge(
        &mut self,
        ticks: i32,
    ) {
        let target = nudge_threshold(self.controller.light_threshold(), ticks);
        self.set_threshold(target, true);
    }

    fn switch_page(&mut self) {
        self.page = self.page.toggle();
        self.dragging = false;
        let now = self.now_ms();
        log_info!(self.log, now, "Page: {}", self.page.name());
    }

    // =========================================================================
    // Input
    // =========================================================================

    fn handle_key(
        &mut self,
        keycode: Keycode,
        repeat: bool,
    ) -> Option<Transition> {
        match keycode {
            Keycode::Q => return Some(Transition::Quit),
            Keycode::P if !repeat => return Some(Transition::Pause),
            Keycode::Y if !repeat => self.switch_page(),
            Keycode::S if !repeat && self.page == Page::Panel => self.toggle_sensing(),
            Keycode::A if self.page == Page::Panel => self.nudge(-1),
            Keycode::D if self.page == Page::Panel => self.nudge(1),
            _ => {}
        }
        None
    }

    fn handle_press(
        &mut self,
        point: Point,
    ) {
        match hit_test(point) {
            Some(Control::SensingSwitch) => self.toggle_sensing(),
            Some(Control::ThresholdSlider) => {
                self.dragging = true;
                self.set_threshold(slider_value_at(point.x), false);
            }
            None => {}
        }
    }

    /// Apply one window event. Returns a transition if the session must end.
    fn handle_event(
        &mut self,
        event: SimulatorEvent,
    ) -> Option<Transition> {
        match event {
            SimulatorEvent::Quit => return Some(Transition::Quit),
            SimulatorEvent::KeyDown { keycode, repeat, .. } => return self.handle_key(keycode, repeat),
            SimulatorEvent::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                point,
            } if self.page == Page::Panel => self.handle_press(point),
            SimulatorEvent::MouseMove { point } if self.dragging => {
                self.set_threshold(slider_value_at(point.x), false);
            }
            SimulatorEvent::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                ..
            } if self.dragging => {
                self.dragging = false;
                self.log_threshold();
            }
            SimulatorEvent::MouseWheel { scroll_delta, .. } if self.page == Page::Panel => {
                self.nudge(scroll_delta.y.signum());
            }
            _ => {}
        }
        None
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn render_frame<D>(
        &mut self,
        display: &mut D,
        paused: bool,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let revision = match self.page {
            Page::Panel => self.controller.revision(),
            Page::Log => self.log.revision(),
        };
        if !self.render.check_dirty(self.page, revision) {
            return;
        }

        match self.page {
            Page::Panel => draw_sensor_panel(display, &self.controller),
            Page::Log => draw_log_page(display, &self.log),
        }
        if paused {
            draw_paused_overlay(display);
        }
    }

    // =========================================================================
    // Loops
    // =========================================================================

    /// Run the visible panel until it is paused or closed.
    ///
    /// Sensors are registered for exactly the lifetime of this call.
    pub fn run_session<H: SensorHub>(
        &mut self,
        hub: &mut H,
        display: &mut SimulatorDisplay<Rgb565>,
        window: &mut Window,
    ) -> Result<Transition, SensorError> {
        let mut subscription = Subscription::acquire(hub)?;

        let now = self.now_ms();
        log_info!(self.log, now, "Sensors registered: {}", subscription.registered().len());
        for kind in subscription.missing() {
            log_warn!(self.log, now, "No {} sensor", kind.name());
        }
        self.render.invalidate();

        let end = loop {
            let frame_start = Instant::now();

            let mut end = None;
            for event in window.events() {
                if end.is_none() {
                    end = self.handle_event(event);
                }
            }
            if let Some(end) = end {
                break end;
            }

            let forwarded = subscription.drain(&mut self.controller);
            if forwarded > 0 {
                log::trace!(target: "sensor_panel", "forwarded {forwarded} sensor events");
            }

            self.render_frame(display, false);
            window.update(display);
            sleep_rest(frame_start, FRAME_TIME);
        };

        drop(subscription);
        self.dragging = false;
        let now = self.now_ms();
        log_info!(self.log, now, "Sensors released");
        Ok(end)
    }

    /// Show the paused overlay until the panel is resumed or closed.
    pub fn run_paused(
        &mut self,
        display: &mut SimulatorDisplay<Rgb565>,
        window: &mut Window,
    ) -> Transition {
        self.render.invalidate();
        loop {
            let frame_start = Instant::now();

            for event in window.events() {
                match event {
                    SimulatorEvent::Quit => return Transition::Quit,
                    SimulatorEvent::KeyDown { keycode, repeat, .. } => match keycode {
                        Keycode::Q => return Transition::Quit,
                        Keycode::P if !repeat => return Transition::Resume,
                        _ => {}
                    },
                    _ => {}
                }
            }

            self.render_frame(display, true);
            window.update(display);
            sleep_rest(frame_start, PAUSED_FRAME_TIME);
        }
    }
}

fn sleep_rest(
    frame_start: Instant,
    frame_time: Duration,
) {
    if let Some(rest) = frame_time.checked_sub(frame_start.elapsed()) {
        thread::sleep(rest);
    }
}
