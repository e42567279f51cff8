//! 64-bit NTP timestamps as carried in RTCP sender reports.
//!
//! High 32 bits: seconds since 1900-01-01. Low 32 bits: fraction of a second
//! scaled by 2^32. On the wire the value is big-endian, seconds first.
//!
//! The seconds field is 32 bits wide, so instants from 2036-02-07 onwards
//! wrap around to small values (NTP era 1). Conversions here truncate to the
//! low 32 bits without any era handling.

use std::io::{self, Read, Write};
use std::time::SystemTime;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use super::wall_clock::since_unix_epoch;

/// Seconds between the NTP epoch (1900) and the Unix epoch (1970).
pub const NTP_UNIX_EPOCH_DIFF: u64 = 2_208_988_800;

const FRAC_SCALE: u64 = 1 << 32;

/// Converts Unix milliseconds to a packed 64-bit NTP timestamp.
///
/// `0` maps to `0x83AA7E80_00000000`, `500` to `0x83AA7E80_80000000`.
/// Negative inputs (before 1970) use floor division, so the sub-second part
/// is always in `[0, 999]`. Seconds past the 32-bit range wrap silently.
pub fn millis_to_ntp_timestamp(timestamp_ms: i64) -> u64 {
    NtpTimestamp::from_millis(timestamp_ms).as_u64()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NtpTimestamp {
    /// Most significant word.
    pub seconds: u32,
    /// Least significant word.
    pub fraction: u32,
}

impl NtpTimestamp {
    pub const fn new(seconds: u32, fraction: u32) -> Self {
        Self { seconds, fraction }
    }

    pub fn from_millis(timestamp_ms: i64) -> Self {
        let secs = timestamp_ms.div_euclid(1000) + NTP_UNIX_EPOCH_DIFF as i64;
        let remaining_ms = timestamp_ms.rem_euclid(1000) as u64;
        Self {
            seconds: secs as u32,
            fraction: ((remaining_ms * FRAC_SCALE) / 1000) as u32,
        }
    }

    /// Unix milliseconds for this timestamp, assuming NTP era 0.
    ///
    /// The fraction is rounded to the nearest millisecond, so
    /// `from_millis(ms).to_millis() == ms` for every instant in era 0.
    pub fn to_millis(&self) -> i64 {
        let secs = i64::from(self.seconds) - NTP_UNIX_EPOCH_DIFF as i64;
        let ms = (u64::from(self.fraction) * 1000 + FRAC_SCALE / 2) >> 32;
        secs * 1000 + ms as i64
    }

    pub fn from_system_time(at: SystemTime) -> Self {
        let since = since_unix_epoch(at);
        let secs = since.as_secs() + NTP_UNIX_EPOCH_DIFF;
        let frac = (u64::from(since.subsec_nanos()) << 32) / 1_000_000_000u64;
        Self {
            seconds: secs as u32,
            fraction: frac as u32,
        }
    }

    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    pub const fn as_u64(&self) -> u64 {
        ((self.seconds as u64) << 32) | self.fraction as u64
    }

    /// Middle 32 bits (16.16 fixed point), the form used by the LSR and
    /// DLSR fields of RTCP report blocks.
    pub const fn compact(&self) -> u32 {
        ((self.seconds & 0xFFFF) << 16) | (self.fraction >> 16)
    }

    /// Writes the 8-byte wire form (big-endian, seconds first).
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_u32::<BigEndian>(self.seconds)?;
        out.write_u32::<BigEndian>(self.fraction)
    }

    pub fn read_from<R: Read>(input: &mut R) -> io::Result<Self> {
        let seconds = input.read_u32::<BigEndian>()?;
        let fraction = input.read_u32::<BigEndian>()?;
        Ok(Self { seconds, fraction })
    }
}

impl From<u64> for NtpTimestamp {
    fn from(v: u64) -> Self {
        Self {
            seconds: (v >> 32) as u32,
            fraction: v as u32,
        }
    }
}

impl From<NtpTimestamp> for u64 {
    fn from(ts: NtpTimestamp) -> Self {
        ts.as_u64()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn unix_epoch_is_ntp_era_offset() {
        let ntp = millis_to_ntp_timestamp(0);
        assert_eq!(ntp >> 32, 2_208_988_800);
        assert_eq!(ntp >> 32, 0x83AA_7E80);
        assert_eq!(ntp & 0xFFFF_FFFF, 0);
    }

    #[test]
    fn half_second_is_half_fraction() {
        let ntp = millis_to_ntp_timestamp(500);
        assert_eq!(ntp >> 32, 2_208_988_800);
        assert_eq!(ntp & 0xFFFF_FFFF, 2_147_483_648);
        assert_eq!(ntp, 0x83AA_7E80_8000_0000);
    }

    #[test]
    fn fraction_is_floored() {
        // 1 ms = 4294967.296 fraction units
        assert_eq!(NtpTimestamp::from_millis(1).fraction, 4_294_967);
        assert_eq!(NtpTimestamp::from_millis(999).fraction, 4_290_672_328);
        assert_eq!(NtpTimestamp::from_millis(250).fraction, 0x4000_0000);
    }

    #[test]
    fn whole_seconds_advance_msw() {
        let ts = NtpTimestamp::from_millis(1_700_000_000_123);
        assert_eq!(u64::from(ts.seconds), 1_700_000_000 + NTP_UNIX_EPOCH_DIFF);
        assert_eq!(ts.fraction, (123u64 * (1 << 32) / 1000) as u32);
    }

    #[test]
    fn negative_millis_floor_toward_past() {
        let ts = NtpTimestamp::from_millis(-1);
        assert_eq!(u64::from(ts.seconds), NTP_UNIX_EPOCH_DIFF - 1);
        assert_eq!(ts.fraction, NtpTimestamp::from_millis(999).fraction);
    }

    #[test]
    fn seconds_wrap_after_era_zero() {
        // 2036-02-07T06:28:16Z is the first second of NTP era 1
        let era1_ms = (0x1_0000_0000i64 - NTP_UNIX_EPOCH_DIFF as i64) * 1000;
        let ts = NtpTimestamp::from_millis(era1_ms);
        assert_eq!(ts.seconds, 0);
        assert_eq!(NtpTimestamp::from_millis(era1_ms - 1000).seconds, u32::MAX);
    }

    #[test]
    fn to_millis_inverts_from_millis() {
        for ms in [0i64, 1, 499, 500, 999, 1_000, 1_700_000_000_001, -1, -999] {
            assert_eq!(NtpTimestamp::from_millis(ms).to_millis(), ms, "ms={ms}");
        }
    }

    #[test]
    fn packing_and_wire_form_agree() {
        let ts = NtpTimestamp::new(0x83AA_7E80, 0x8000_0001);
        assert_eq!(ts.as_u64(), 0x83AA_7E80_8000_0001);
        assert_eq!(NtpTimestamp::from(ts.as_u64()), ts);

        let mut buf = Vec::new();
        ts.write_to(&mut buf).unwrap();
        assert_eq!(buf, 0x83AA_7E80_8000_0001u64.to_be_bytes());
        assert_eq!(NtpTimestamp::read_from(&mut buf.as_slice()).unwrap(), ts);
    }

    #[test]
    fn read_from_short_buffer_fails() {
        let buf = [0u8; 7];
        assert!(NtpTimestamp::read_from(&mut buf.as_slice()).is_err());
    }

    #[test]
    fn compact_is_middle_bits() {
        let ts = NtpTimestamp::from(0x1234_5678_9ABC_DEF0u64);
        assert_eq!(ts.compact(), 0x5678_9ABC);
    }

    #[test]
    fn system_time_matches_millis_path() {
        let at = UNIX_EPOCH + Duration::from_millis(1_600_000_000_250);
        assert_eq!(
            NtpTimestamp::from_system_time(at),
            NtpTimestamp::from_millis(1_600_000_000_250)
        );
    }

    #[test]
    fn now_is_in_current_era() {
        let (msw, _) = crate::time::ntp_now();
        // 2020-01-01 in NTP seconds
        assert!(u64::from(msw) > 1_577_836_800 + NTP_UNIX_EPOCH_DIFF);
    }
}
