use crate::log::log_level::LogLevel;

/// Destination for log lines emitted by this crate.
///
/// The crate never writes to stdout or files on its own; callers hand in a
/// sink (their own logger, a [`MemoryLogSink`](super::MemoryLogSink), or
/// [`NoopLogSink`](super::NoopLogSink)).
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, msg: &str, target: &'static str);
}

impl<T: LogSink + ?Sized> LogSink for &T {
    #[inline]
    fn log(&self, level: LogLevel, msg: &str, target: &'static str) {
        (**self).log(level, msg, target);
    }
}

impl<T: LogSink + ?Sized> LogSink for std::sync::Arc<T> {
    #[inline]
    fn log(&self, level: LogLevel, msg: &str, target: &'static str) {
        (**self).log(level, msg, target);
    }
}
