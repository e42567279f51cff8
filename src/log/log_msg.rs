use std::fmt;

use crate::log::log_level::LogLevel;
use crate::time::wall_clock::now_millis;

/// A single captured log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMsg {
    /// Severity of the line.
    pub level: LogLevel,
    /// Wall-clock time of capture, milliseconds since the Unix epoch.
    pub ts_ms: u128,
    /// Rendered message text.
    pub text: String,
    /// Origin of the line, normally `module_path!()`.
    pub target: &'static str,
}

impl LogMsg {
    /// Creates a new `LogMsg` with an explicit timestamp.
    ///
    /// # Example
    ///
    /// ```
    /// use rtpnum::log::{LogLevel, LogMsg};
    ///
    /// let msg = LogMsg::new(LogLevel::Warn, "bad clock rate", "app::media", 1_700_000_000_000);
    /// assert_eq!(msg.to_string(), "[WARN] 1700000000000 app::media | bad clock rate");
    /// ```
    pub fn new(
        level: LogLevel,
        text: impl Into<String>,
        target: &'static str,
        ts_ms: u128,
    ) -> Self {
        Self {
            level,
            ts_ms,
            text: text.into(),
            target,
        }
    }

    /// Creates a `LogMsg` stamped with the current wall-clock time.
    pub fn now(level: LogLevel, text: impl Into<String>, target: &'static str) -> Self {
        Self::new(level, text, target, now_millis())
    }
}

impl fmt::Display for LogMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} | {}",
            self.level, self.ts_ms, self.target, self.text
        )
    }
}
