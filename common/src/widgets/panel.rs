//! Main sensor panel page.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use super::primitives::{draw_header, draw_slider, draw_status_box, draw_switch};
use crate::colors::BLACK;
use crate::config::{LIGHT_TEXT_POS, MAGNITUDE_POS, SWITCH_LABEL_POS, SWITCH_RECT, THRESHOLD_TEXT_POS};
use crate::controller::SensorStateController;
use crate::styles::{BODY_STYLE_WHITE, LEFT_ALIGNED};

const PANEL_TITLE: &str = "SENSOR PANEL";

fn draw_readout<D>(
    display: &mut D,
    label: &str,
    value: f32,
    position: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut line: String<40> = String::new();
    let _ = write!(line, "{label}: {value:.2}");
    Text::with_text_style(&line, position, BODY_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

/// Draw the whole panel for the controller's current state.
///
/// The acceleration readout is only shown while sensing is enabled. Every
/// other element is always drawn.
pub fn draw_sensor_panel<D>(
    display: &mut D,
    controller: &SensorStateController,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();
    draw_header(display, PANEL_TITLE);

    Text::with_text_style("Sensor reading", SWITCH_LABEL_POS, BODY_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    draw_switch(display, SWITCH_RECT, controller.is_sensing_enabled());

    if controller.is_sensing_enabled() {
        draw_readout(display, "Accel magnitude", controller.acceleration_magnitude(), MAGNITUDE_POS);
    }

    draw_readout(display, "Light threshold", controller.light_threshold(), THRESHOLD_TEXT_POS);
    draw_slider(display, controller.light_threshold());

    draw_readout(display, "Current light", controller.current_light_value(), LIGHT_TEXT_POS);

    draw_status_box(display, controller.status());
}
