//! Numeric helpers for RTP/RTCP processing.
//!
//! The crate covers two small, easily-miscoded areas:
//! - `seq`: ordering and distance over the 16-bit modular RTP sequence-number
//!   space, plus extended (32-bit) sequence tracking.
//! - `time`: Unix milliseconds to 64-bit NTP timestamps for RTCP sender
//!   reports, and RTP media ticks to milliseconds.
//!
//! Packet parsing, transport and session statistics live elsewhere; callers
//! pass raw header values in and get comparisons or converted timestamps
//! back. Every free function is pure and safe to call from any thread.

/// Codec clock-rate table, configurable from a `[clock_rates]` section.
pub mod clock_rates;
/// INI-style configuration loading.
pub mod config;
/// Errors raised while loading configuration.
pub mod config_error;
/// Logging sinks and leveled macros.
pub mod log;
/// RTP sequence-number comparisons.
pub mod seq;
/// NTP and RTP timestamp conversions.
pub mod time;
