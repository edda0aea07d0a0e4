//! Page navigation for the sensor panel.
//!
//! Press `Y` to toggle between pages.
//!
//! - [`Page::Panel`]: Sensor switch, readouts, threshold slider and status box
//! - [`Page::Log`]: Log terminal with the most recent events

/// Available pages in the panel application.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Main sensor panel.
    #[default]
    Panel,

    /// Event log terminal.
    Log,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Panel => Self::Log,
            Self::Log => Self::Panel,
        }
    }

    /// Name used in log messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Panel => "Panel",
            Self::Log => "Log",
        }
    }
}
