//! Comparisons over the 16-bit modular RTP sequence-number space.
//!
//! Sequence numbers are compared by cyclic distance, not raw magnitude:
//! the counter wraps from `65535` back to `0`. All functions here are pure,
//! total over `u16` inputs, and never panic.
//!
//! Two values exactly `32768` apart are ambiguous. [`signed_delta`] yields
//! `-32768` in both directions for such a pair, so neither is older than the
//! other.

use rand::{RngCore, rngs::OsRng};

/// Size of the sequence-number space (2^16).
pub const SEQ_MODULUS: i64 = 1 << 16;

/// Reduces a wider counter value into `[0, 65535]`.
///
/// Negative inputs wrap the same way positive ones do
/// (`normalize(-1) == 65535`).
#[inline]
pub fn normalize(raw: i64) -> u16 {
    raw.rem_euclid(SEQ_MODULUS) as u16
}

/// Signed minimal step from `a` to `b` around the 65536-value circle.
///
/// Equal to `((b - a + 32768) mod 65536) - 32768`, so the result lies in
/// `[-32768, 32767]`. Positive means `b` is ahead of `a`.
#[inline]
pub fn signed_delta(a: u16, b: u16) -> i16 {
    b.wrapping_sub(a) as i16
}

/// True if `a` precedes `b` within half the sequence space.
#[inline]
pub fn is_older_than(a: u16, b: u16) -> bool {
    signed_delta(a, b) > 0
}

/// True if `a` follows `b` within half the sequence space.
#[inline]
pub fn is_newer_than(a: u16, b: u16) -> bool {
    is_older_than(b, a)
}

/// True if getting from `a` forward to `b` crosses the `65535 -> 0` boundary.
///
/// Both conditions are required: `b` must be newer than `a` by the modular
/// rule, and its raw value must still be smaller.
#[inline]
pub fn rolled_over_to(a: u16, b: u16) -> bool {
    is_older_than(a, b) && b < a
}

/// True if `a` is the immediate successor of `b` (`a == b + 1 mod 65536`).
#[inline]
pub fn is_next_after(a: u16, b: u16) -> bool {
    signed_delta(a, b) == -1
}

/// Number of sequence numbers strictly between `older` and `newer`.
///
/// `older` must actually be older than `newer`; this is not checked. When it
/// is not, the result is meaningless (zero or negative) but never panics.
#[inline]
pub fn num_packets_between(older: u16, newer: u16) -> i32 {
    i32::from(signed_delta(older, newer)) - 1
}

/// Random initial sequence number for a new outbound stream (RFC 3550 §5.1).
pub fn random_initial() -> u16 {
    (OsRng.next_u32() & 0xFFFF) as u16
}

/// Method-call form of the sequence-number comparisons.
///
/// ```
/// use rtpnum::seq::SeqNumExt;
///
/// assert!(3u16.is_newer_than(65530));
/// assert!(65530u16.rolled_over_to(3));
/// assert!(0u16.is_next_after(65535));
/// ```
pub trait SeqNumExt: Copy {
    fn delta_to(self, other: Self) -> i16;
    fn is_older_than(self, other: Self) -> bool;
    fn is_newer_than(self, other: Self) -> bool;
    fn rolled_over_to(self, other: Self) -> bool;
    fn is_next_after(self, other: Self) -> bool;
    fn num_packets_to(self, newer: Self) -> i32;
    fn next_seq(self) -> Self;
}

impl SeqNumExt for u16 {
    #[inline]
    fn delta_to(self, other: u16) -> i16 {
        signed_delta(self, other)
    }
    #[inline]
    fn is_older_than(self, other: u16) -> bool {
        is_older_than(self, other)
    }
    #[inline]
    fn is_newer_than(self, other: u16) -> bool {
        is_newer_than(self, other)
    }
    #[inline]
    fn rolled_over_to(self, other: u16) -> bool {
        rolled_over_to(self, other)
    }
    #[inline]
    fn is_next_after(self, other: u16) -> bool {
        is_next_after(self, other)
    }
    #[inline]
    fn num_packets_to(self, newer: u16) -> i32 {
        num_packets_between(self, newer)
    }
    #[inline]
    fn next_seq(self) -> u16 {
        self.wrapping_add(1)
    }
}
