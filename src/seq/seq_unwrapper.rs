use std::{fmt, sync::Arc};

use super::seq_num::{is_newer_than, is_older_than, rolled_over_to};
use crate::log::{NoopLogSink, log_sink::LogSink};
use crate::{sink_debug, sink_trace};

/// Extends 16-bit RTP sequence numbers to 32-bit extended sequence numbers
/// (cycle count in the high 16 bits), as used by RTCP receiver reports.
///
/// The first packet seen starts cycle 0. Wraps are detected with
/// [`rolled_over_to`]; a late packet from the cycle before the current one is
/// mapped back into that earlier cycle. Extended values are modulo 2^32, so a
/// late packet that precedes cycle 0 maps to `0xFFFF_xxxx`; differences taken
/// with `wrapping_sub` stay correct.
///
/// A packet exactly half the sequence space away from the highest is not
/// adopted; it is placed behind the highest like a late packet, so the
/// packets that follow it extend consistently with it.
#[derive(Clone)]
pub struct SeqUnwrapper {
    cycles: u32, // multiples of 2^16
    highest: Option<u16>,
    #[cfg_attr(not(feature = "log-debug"), allow(dead_code))]
    sink: Arc<dyn LogSink>,
}

impl Default for SeqUnwrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SeqUnwrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqUnwrapper")
            .field("cycles", &self.cycles)
            .field("highest", &self.highest)
            .finish_non_exhaustive()
    }
}

impl SeqUnwrapper {
    pub fn new() -> Self {
        Self::with_sink(Arc::new(NoopLogSink))
    }

    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        Self {
            cycles: 0,
            highest: None,
            sink,
        }
    }

    /// Feeds one received sequence number and returns its extended form.
    pub fn update(&mut self, seq: u16) -> u32 {
        let Some(highest) = self.highest else {
            self.highest = Some(seq);
            return u32::from(seq);
        };

        if is_newer_than(seq, highest) {
            if rolled_over_to(highest, seq) {
                self.cycles = self.cycles.wrapping_add(1 << 16);
                sink_trace!(
                    self.sink,
                    "[SeqUnwrapper] wrapped {highest} -> {seq}, cycles={}",
                    self.cycles >> 16
                );
            }
            self.highest = Some(seq);
            return self.cycles | u32::from(seq);
        }

        if !is_older_than(seq, highest) && seq != highest {
            sink_debug!(
                self.sink,
                "[SeqUnwrapper] ambiguous jump {highest} -> {seq} (half the sequence space)"
            );
        }

        // behind the highest; a raw value above it predates the last wrap
        if seq > highest {
            self.cycles.wrapping_sub(1 << 16) | u32::from(seq)
        } else {
            self.cycles | u32::from(seq)
        }
    }

    /// Extended form of the highest sequence number seen so far.
    pub fn highest_extended(&self) -> Option<u32> {
        self.highest.map(|h| self.cycles | u32::from(h))
    }

    /// Number of completed wraps.
    pub fn cycles(&self) -> u16 {
        (self.cycles >> 16) as u16
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::MemoryLogSink;

    #[test]
    fn first_packet_starts_cycle_zero() {
        let mut u = SeqUnwrapper::new();
        assert_eq!(u.highest_extended(), None);
        assert_eq!(u.update(40_000), 40_000);
        assert_eq!(u.highest_extended(), Some(40_000));
        assert_eq!(u.cycles(), 0);
    }

    #[test]
    fn in_order_stream_is_strictly_increasing_across_wraps() {
        let mut u = SeqUnwrapper::new();
        let mut seq: u16 = 65_000;
        let mut prev = u.update(seq);
        for _ in 0..(3 * 65_536) {
            seq = seq.wrapping_add(1);
            let ext = u.update(seq);
            assert_eq!(ext, prev + 1);
            prev = ext;
        }
        assert_eq!(u.cycles(), 3);
    }

    #[test]
    fn late_packet_from_previous_cycle_maps_back() {
        let mut u = SeqUnwrapper::new();
        u.update(65_533);
        u.update(65_534);
        assert_eq!(u.update(1), 65_536 + 1);
        // 65535 was reordered behind the wrap
        assert_eq!(u.update(65_535), 65_535);
        assert_eq!(u.highest_extended(), Some(65_537));
        assert_eq!(u.update(2), 65_538);
    }

    #[test]
    fn late_packet_within_cycle_keeps_cycle() {
        let mut u = SeqUnwrapper::new();
        u.update(100);
        u.update(105);
        assert_eq!(u.update(103), 103);
        assert_eq!(u.highest_extended(), Some(105));
    }

    #[test]
    fn late_packet_before_first_cycle_wraps_extended_space() {
        let mut u = SeqUnwrapper::new();
        u.update(2);
        let ext = u.update(65_534);
        assert_eq!(ext, 0xFFFF_FFFE);
        assert_eq!(u.update(3).wrapping_sub(ext), 5);
    }

    #[test]
    fn duplicate_returns_same_extended() {
        let mut u = SeqUnwrapper::new();
        u.update(7);
        assert_eq!(u.update(7), 7);
        assert_eq!(u.highest_extended(), Some(7));
    }

    #[test]
    fn ambiguous_jump_above_highest_stays_contiguous_with_next() {
        let mut u = SeqUnwrapper::new();
        u.update(0);
        let a = u.update(32_768);
        let b = u.update(32_769);
        assert_eq!(a, 0xFFFF_8000);
        assert_eq!(b.wrapping_sub(a), 1);
        assert_eq!(u.highest_extended(), Some(0));
    }

    #[test]
    fn ambiguous_jump_below_highest_stays_contiguous_with_next() {
        let mut u = SeqUnwrapper::new();
        u.update(32_768);
        let a = u.update(0);
        let b = u.update(1);
        assert_eq!(a, 0);
        assert_eq!(b.wrapping_sub(a), 1);
        assert_eq!(u.highest_extended(), Some(32_768));
    }

    #[cfg(feature = "log-debug")]
    #[test]
    fn ambiguous_jump_is_logged() {
        let sink = Arc::new(MemoryLogSink::default());
        let mut u = SeqUnwrapper::with_sink(sink.clone());
        u.update(0);
        u.update(32_768);
        let logs = sink.take();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].text.contains("ambiguous"));
    }

    #[test]
    fn default_build_does_not_log_wraps() {
        let sink = Arc::new(MemoryLogSink::default());
        let mut u = SeqUnwrapper::with_sink(sink.clone());
        u.update(65_535);
        u.update(0);
        if !cfg!(feature = "log-trace") {
            assert!(sink.take().is_empty());
        }
    }
}
