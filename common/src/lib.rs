//! Platform-agnostic core of the ambient sensor panel.
//!
//! The panel shows the magnitude of the device's acceleration and the
//! ambient light level, and compares the light against a user-chosen
//! threshold. This crate holds everything that does not depend on a concrete
//! display or sensor backend:
//!
//! - [`controller`]: Sensing flag, threshold and latest readings
//! - [`status`]: Threshold status derived from the controller state
//! - [`sensors`]: Sensor hub contract and the RAII subscription guard
//! - [`thresholds`]: Threshold range and slider stops
//! - [`input`]: Hit-testing and slider math for pointer input
//! - [`log_buffer`]: Levelled event log shown on the Log page
//! - [`widgets`]: Drawing functions for both pages
//! - [`colors`], [`config`], [`styles`]: Display constants
//! - [`pages`], [`render`]: Page selection and redraw tracking
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests and can be used on embedded
//! targets. Timestamps are supplied by the caller as plain milliseconds.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod controller;
pub mod input;
pub mod log_buffer;
pub mod pages;
pub mod render;
pub mod sensors;
pub mod status;
pub mod styles;
pub mod thresholds;
pub mod widgets;

// Re-export commonly used items
pub use controller::SensorStateController;
pub use input::{Control, hit_test, nudge_threshold, slider_value_at};
pub use log_buffer::{LogBuffer, LogLevel};
pub use pages::Page;
pub use render::RenderState;
pub use sensors::{SensorError, SensorEvent, SensorHub, SensorKind, Subscription};
pub use status::{Status, StatusColor, StatusLabel, compute_status};
