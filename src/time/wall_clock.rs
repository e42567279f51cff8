use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::ntp::NtpTimestamp;

/// Milliseconds since the Unix epoch, or 0 if the clock is before it.
pub fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// Current wall-clock time as an NTP timestamp split into (msw, lsw).
pub fn ntp_now() -> (u32, u32) {
    let now = NtpTimestamp::now();
    (now.seconds, now.fraction)
}

pub(crate) fn since_unix_epoch(at: SystemTime) -> Duration {
    at.duration_since(UNIX_EPOCH).unwrap_or(Duration::from_secs(0))
}
