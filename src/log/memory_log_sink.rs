use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::log::{log_level::LogLevel, log_msg::LogMsg, log_sink::LogSink};

/// Sink that keeps captured lines in memory, oldest first.
///
/// Holds at most `cap` lines; once full, the oldest line is dropped for each
/// new one. Callers drain it with [`take`](Self::take). A lock poisoned by a
/// panicking writer is recovered, so capture keeps working afterwards.
#[derive(Debug)]
pub struct MemoryLogSink {
    lines: Mutex<VecDeque<LogMsg>>,
    cap: usize,
}

impl Default for MemoryLogSink {
    fn default() -> Self {
        Self::with_capacity(1_024)
    }
}

impl MemoryLogSink {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            lines: Mutex::new(VecDeque::new()),
            cap: cap.max(1),
        }
    }

    fn lines(&self) -> MutexGuard<'_, VecDeque<LogMsg>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Removes and returns everything captured so far.
    pub fn take(&self) -> Vec<LogMsg> {
        self.lines().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.lines().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemoryLogSink {
    fn log(&self, level: LogLevel, msg: &str, target: &'static str) {
        let mut lines = self.lines();
        if lines.len() >= self.cap {
            lines.pop_front();
        }
        lines.push_back(LogMsg::now(level, msg, target));
    }
}
