//! Ambient Sensor Panel Simulator for Windows/Desktop.
//!
//! This is the simulator binary that runs on desktop platforms using
//! the embedded-graphics-simulator crate.
//!
//! # Controls
//!
//! | Input                | Action                              |
//! |----------------------|-------------------------------------|
//! | `S` / click switch   | Toggle sensing                      |
//! | `A` / `D` / wheel    | Move the threshold by one stop      |
//! | Click/drag slider    | Set the threshold                   |
//! | `Y`                  | Switch between panel and log page   |
//! | `P`                  | Pause / resume (releases sensors)   |
//! | `Q`                  | Quit                                |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod app;
mod logger;
mod sensors;
mod timing;

use std::error::Error;
use std::time::Duration;

use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, Window};
use log::LevelFilter;
use sensor_panel_common::colors::BLACK;
use sensor_panel_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::app::{App, Transition};
use crate::sensors::SimulatedSensors;

/// Desktop simulator for the ambient sensor panel.
#[derive(Parser, Debug)]
#[command(name = "simulator", version, about)]
struct Args {
    /// Window pixel scale factor.
    #[arg(long, default_value_t = 2)]
    scale: u32,

    /// Interval between samples of each sensor, in milliseconds.
    #[arg(long, default_value_t = 200)]
    sample_interval_ms: u64,

    /// Simulate a device without an accelerometer.
    #[arg(long)]
    no_accelerometer: bool,

    /// Simulate a device without an ambient light sensor.
    #[arg(long)]
    no_light_sensor: bool,

    /// Console log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logger::init(args.log_level)?;

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale.max(1)).build();
    let mut window = Window::new("Sensor Panel Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut hub = SimulatedSensors::new(
        !args.no_accelerometer,
        !args.no_light_sensor,
        Duration::from_millis(args.sample_interval_ms),
    );
    let mut app = App::new();

    loop {
        if app.run_session(&mut hub, &mut display, &mut window)? == Transition::Quit {
            break;
        }
        log::debug!("paused");
        if app.run_paused(&mut display, &mut window) == Transition::Quit {
            break;
        }
    }

    log::info!("simulator closed");
    Ok(())
}
