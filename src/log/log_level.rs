use std::fmt;

/// Severity levels for log messages, ordered from most to least verbose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Per-packet detail (wraps, reorders).
    Trace,
    /// Diagnostics useful while chasing a stream problem.
    Debug,
    /// Coarse progress, e.g. a configuration was applied.
    Info,
    /// Input was rejected or ignored but processing continues.
    Warn,
    /// Something the caller must act on.
    Error,
}

impl LogLevel {
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
