//! RTP media-clock conversions.
//!
//! RTP timestamps have no epoch; they advance at the codec's clock rate
//! (90000 for video, 8000/16000/48000 for common audio codecs). Only
//! differences and rate conversions mean anything.

use rand::{RngCore, rngs::OsRng};

/// Converts an RTP tick count to milliseconds, truncating toward zero.
///
/// `ticks_per_second` must be positive. That is not checked: zero or a
/// negative rate gives a meaningless (saturated or zero) result, never a
/// panic. Results beyond the `i32` range saturate.
///
/// ```
/// use rtpnum::time::convert_rtp_timestamp_to_ms;
///
/// assert_eq!(convert_rtp_timestamp_to_ms(90_000, 90_000.0), 1_000);
/// assert_eq!(convert_rtp_timestamp_to_ms(160, 8_000.0), 20);
/// ```
pub fn convert_rtp_timestamp_to_ms(rtp_timestamp: i32, ticks_per_second: f64) -> i32 {
    ((f64::from(rtp_timestamp) / ticks_per_second) * 1000.0) as i32
}

/// Signed tick distance from `earlier` to `later`, across the 32-bit wrap.
#[inline]
pub fn rtp_ticks_between(earlier: u32, later: u32) -> i32 {
    later.wrapping_sub(earlier) as i32
}

/// Random initial RTP timestamp for a new outbound stream (RFC 3550 §5.1).
pub fn random_initial_timestamp() -> u32 {
    OsRng.next_u32()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn one_second_of_video() {
        assert_eq!(convert_rtp_timestamp_to_ms(90_000, 90_000.0), 1_000);
    }

    #[test]
    fn zero_ticks_is_zero_ms() {
        assert_eq!(convert_rtp_timestamp_to_ms(0, 8_000.0), 0);
    }

    #[test]
    fn whole_seconds_convert_exactly() {
        for rate in [8_000, 16_000, 44_100, 48_000, 90_000] {
            for k in 0..=20 {
                assert_eq!(
                    convert_rtp_timestamp_to_ms(k * rate, f64::from(rate)),
                    k * 1000,
                    "rate={rate} k={k}"
                );
            }
        }
    }

    #[test]
    fn truncates_toward_zero() {
        // 1 tick at 90 kHz = 0.011 ms
        assert_eq!(convert_rtp_timestamp_to_ms(1, 90_000.0), 0);
        assert_eq!(convert_rtp_timestamp_to_ms(89, 90_000.0), 0);
        assert_eq!(convert_rtp_timestamp_to_ms(90, 90_000.0), 1);
        assert_eq!(convert_rtp_timestamp_to_ms(-89, 90_000.0), 0);
        assert_eq!(convert_rtp_timestamp_to_ms(-90, 90_000.0), -1);
    }

    #[test]
    fn out_of_range_saturates() {
        assert_eq!(convert_rtp_timestamp_to_ms(i32::MAX, 1.0), i32::MAX);
        assert_eq!(convert_rtp_timestamp_to_ms(i32::MIN, 1.0), i32::MIN);
    }

    #[test]
    fn ticks_between_crosses_wrap() {
        assert_eq!(rtp_ticks_between(u32::MAX - 9, 10), 20);
        assert_eq!(rtp_ticks_between(10, u32::MAX - 9), -20);
        assert_eq!(rtp_ticks_between(1_000, 4_000), 3_000);
    }
}
