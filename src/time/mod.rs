pub mod ntp;
pub mod rtp_clock;
pub mod wall_clock;

pub use ntp::{NTP_UNIX_EPOCH_DIFF, NtpTimestamp, millis_to_ntp_timestamp};
pub use rtp_clock::{convert_rtp_timestamp_to_ms, random_initial_timestamp, rtp_ticks_between};
pub use wall_clock::{now_millis, ntp_now};
