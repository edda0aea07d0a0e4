//! Levelled log ring buffer shown on the Log page.
//!
//! Each entry carries a level, a truncated message, and a timestamp supplied
//! by the caller (milliseconds since the panel started). The buffer keeps the
//! newest [`LOG_ENTRIES`] entries; older ones are dropped.
//!
//! Every pushed message is also forwarded to the [`log`] facade, so a host
//! that installs a logger sees the same lines on its console.
//!
//! # Log Levels
//!
//! - `Trace`: Dark gray - verbose debugging
//! - `Debug`: Gray - debugging information
//! - `Info`: Green - normal operation
//! - `Warn`: Yellow - warnings
//! - `Error`: Red - errors
//!
//! # Usage
//!
//! ```ignore
//! use sensor_panel_common::{log_info, log_warn};
//!
//! log_info!(log, now_ms, "Sensing {}", if on { "ON" } else { "OFF" });
//! log_warn!(log, now_ms, "No {} sensor", kind.name());
//! ```

use core::fmt::{self, Write};

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::colors::{GRAY, GREEN, LIGHT_GRAY, RED, YELLOW};

/// Maximum number of log entries to keep.
pub const LOG_ENTRIES: usize = 14;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 40;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// Verbose debugging (dark gray)
    Trace = 0,
    /// Debug information (gray)
    Debug = 1,
    /// Normal operation (green)
    #[default]
    Info = 2,
    /// Warnings (yellow)
    Warn = 3,
    /// Errors (red)
    Error = 4,
}

impl LogLevel {
    /// Get the display color for this log level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Trace => GRAY,
            Self::Debug => LIGHT_GRAY,
            Self::Info => GREEN,
            Self::Warn => YELLOW,
            Self::Error => RED,
        }
    }

    /// Get the single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::Trace,
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// A single log entry with level, message, and timestamp.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Message, truncated to `LOG_MSG_LEN - 1` characters.
    pub message: String<LOG_MSG_LEN>,
    /// Milliseconds since the panel started.
    pub timestamp_ms: u32,
}

impl LogEntry {
    /// Create a new entry, truncating `message` if needed.
    pub fn new(
        level: LogLevel,
        message: &str,
        timestamp_ms: u32,
    ) -> Self {
        let mut writer = TruncatingWriter::default();
        writer.write_str(message).ok();
        Self {
            level,
            message: writer.line,
            timestamp_ms,
        }
    }
}

/// Collects formatted text, silently dropping whatever does not fit.
#[derive(Default)]
struct TruncatingWriter {
    line: String<LOG_MSG_LEN>,
    chars: usize,
}

impl Write for TruncatingWriter {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.chars >= LOG_MSG_LEN - 1 {
                break;
            }
            if self.line.push(c).is_err() {
                break;
            }
            self.chars += 1;
        }
        Ok(())
    }
}

/// Fixed-capacity ring buffer of log entries.
pub struct LogBuffer {
    entries: heapless::Deque<LogEntry, LOG_ENTRIES>,
    pushed: u32,
}

impl LogBuffer {
    /// Create a new empty log buffer.
    pub const fn new() -> Self {
        Self {
            entries: heapless::Deque::new(),
            pushed: 0,
        }
    }

    /// Push an entry. The oldest entry is dropped if the buffer is full.
    pub fn push(
        &mut self,
        entry: LogEntry,
    ) {
        if self.entries.is_full() {
            self.entries.pop_front();
        }
        self.entries.push_back(entry).ok();
        self.pushed = self.pushed.wrapping_add(1);
    }

    /// Format a message into a new entry and forward it to the `log` facade.
    pub fn log(
        &mut self,
        level: LogLevel,
        timestamp_ms: u32,
        args: fmt::Arguments<'_>,
    ) {
        let mut writer = TruncatingWriter::default();
        writer.write_fmt(args).ok();
        log::log!(target: "sensor_panel", log::Level::from(level), "{}", writer.line);
        self.push(LogEntry {
            level,
            message: writer.line,
            timestamp_ms,
        });
    }

    /// Number of entries currently held.
    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Total entries ever pushed (wrapping). Changes whenever the buffer does.
    #[inline]
    pub const fn revision(&self) -> u32 { self.pushed }

    /// Iterate over entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> { self.entries.iter() }
}

impl Default for LogBuffer {
    fn default() -> Self { Self::new() }
}

/// Log a message at Info level.
#[macro_export]
macro_rules! log_info {
    ($buf:expr, $ts:expr, $($arg:tt)*) => {
        $buf.log($crate::log_buffer::LogLevel::Info, $ts, format_args!($($arg)*))
    };
}

/// Log a message at Warn level.
#[macro_export]
macro_rules! log_warn {
    ($buf:expr, $ts:expr, $($arg:tt)*) => {
        $buf.log($crate::log_buffer::LogLevel::Warn, $ts, format_args!($($arg)*))
    };
}

/// Log a message at Error level.
#[macro_export]
macro_rules! log_error {
    ($buf:expr, $ts:expr, $($arg:tt)*) => {
        $buf.log($crate::log_buffer::LogLevel::Error, $ts, format_args!($($arg)*))
    };
}

/// Log a message at Debug level.
#[macro_export]
macro_rules! log_debug {
    ($buf:expr, $ts:expr, $($arg:tt)*) => {
        $buf.log($crate::log_buffer::LogLevel::Debug, $ts, format_args!($($arg)*))
    };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_buffer_push() {
        let mut log = LogBuffer::new();
        assert!(log.is_empty());

        log.push(LogEntry::new(LogLevel::Info, "Test message", 0));
        assert_eq!(log.len(), 1);

        log.push(LogEntry::new(LogLevel::Warn, "Another message", 5));
        assert_eq!(log.len(), 2);
        assert_eq!(log.revision(), 2);
    }

    #[test]
    fn test_log_buffer_ring() {
        let mut log = LogBuffer::new();
        for i in 0..LOG_ENTRIES as u32 {
            log_info!(log, i, "{}", i);
        }
        assert_eq!(log.len(), LOG_ENTRIES);

        log_info!(log, 99, "New");
        assert_eq!(log.len(), LOG_ENTRIES);

        let first = log.iter().next().unwrap();
        assert_eq!(first.message.as_str(), "1");
        let last = log.iter().last().unwrap();
        assert_eq!(last.message.as_str(), "New");
        assert_eq!(last.timestamp_ms, 99);
    }

    #[test]
    fn test_entry_truncation() {
        let long_msg = "This is a very long message that exceeds the maximum line length limit";
        let entry = LogEntry::new(LogLevel::Info, long_msg, 0);
        assert_eq!(entry.message.len(), LOG_MSG_LEN - 1);
        assert!(long_msg.starts_with(entry.message.as_str()));
    }

    #[test]
    fn test_formatted_truncation() {
        let mut log = LogBuffer::new();
        log_warn!(log, 0, "{}-{}", "x".repeat(30), "y".repeat(30));
        let entry = log.iter().next().unwrap();
        assert_eq!(entry.level, LogLevel::Warn);
        assert_eq!(entry.message.len(), LOG_MSG_LEN - 1);
    }

    #[test]
    fn test_macros_set_level() {
        let mut log = LogBuffer::new();
        log_debug!(log, 1, "d");
        log_error!(log, 2, "e");
        let levels: std::vec::Vec<LogLevel> = log.iter().map(|e| e.level).collect();
        assert_eq!(levels, [LogLevel::Debug, LogLevel::Error]);
    }

    #[test]
    fn test_level_prefix_and_order() {
        assert_eq!(LogLevel::Info.prefix(), 'I');
        assert_eq!(LogLevel::Error.prefix(), 'E');
        assert!(LogLevel::Warn > LogLevel::Info);
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(log::Level::from(LogLevel::Warn), log::Level::Warn);
    }
}
