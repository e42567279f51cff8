use std::collections::HashMap;

use crate::config::Config;
use crate::config_error::ConfigError;
use crate::log::log_sink::LogSink;
use crate::time::rtp_clock::convert_rtp_timestamp_to_ms;
use crate::{sink_info, sink_warn};

/// Config section holding `codec = ticks_per_second` overrides.
pub const CLOCK_RATES_SECTION: &str = "clock_rates";

/// Well-known RTP clock rates (RFC 3551, RFC 7587, RFC 6184, RFC 7741).
/// G722 is 8000 on the RTP clock despite sampling at 16 kHz.
const DEFAULT_RATES: &[(&str, f64)] = &[
    ("pcmu", 8_000.0),
    ("pcma", 8_000.0),
    ("g722", 8_000.0),
    ("telephone-event", 8_000.0),
    ("opus", 48_000.0),
    ("h264", 90_000.0),
    ("vp8", 90_000.0),
    ("vp9", 90_000.0),
    ("av1", 90_000.0),
];

/// Codec name to RTP clock rate (ticks per second). Names are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockRates {
    rates: HashMap<String, f64>,
}

impl Default for ClockRates {
    fn default() -> Self {
        Self {
            rates: DEFAULT_RATES
                .iter()
                .map(|&(name, rate)| (name.to_string(), rate))
                .collect(),
        }
    }
}

impl ClockRates {
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Defaults overridden by the `[clock_rates]` section of `config`.
    ///
    /// Entries that do not parse, or are not positive, are skipped with a
    /// warning on `sink`; the default (if any) stays in place.
    pub fn from_config(config: &Config, sink: &dyn LogSink) -> Self {
        let mut rates = Self::default();
        let Some(section) = config.section(CLOCK_RATES_SECTION) else {
            return rates;
        };

        let mut applied = 0usize;
        for (codec, raw) in section {
            match rates.set_from_str(codec, raw) {
                Ok(()) => applied += 1,
                Err(e) => sink_warn!(sink, "[ClockRates] ignoring {codec} = {raw:?}: {e}"),
            }
        }
        sink_info!(sink, "[ClockRates] applied {applied} clock rate override(s)");
        rates
    }

    pub fn set(&mut self, codec: &str, ticks_per_second: f64) -> Result<(), ConfigError> {
        // also rejects NaN
        if !(ticks_per_second > 0.0 && ticks_per_second.is_finite()) {
            return Err(ConfigError::InvalidClockRate {
                codec: codec.to_string(),
                rate: ticks_per_second,
            });
        }
        self.rates.insert(codec.to_ascii_lowercase(), ticks_per_second);
        Ok(())
    }

    fn set_from_str(&mut self, codec: &str, raw: &str) -> Result<(), ConfigError> {
        let rate: f64 = raw.trim().parse()?;
        self.set(codec, rate)
    }

    #[must_use]
    pub fn get(&self, codec: &str) -> Option<f64> {
        self.rates.get(&codec.to_ascii_lowercase()).copied()
    }

    /// Converts `rtp_timestamp` ticks of `codec` to milliseconds, or `None`
    /// when the codec has no known clock rate.
    #[must_use]
    pub fn rtp_to_ms(&self, codec: &str, rtp_timestamp: i32) -> Option<i32> {
        self.get(codec)
            .map(|rate| convert_rtp_timestamp_to_ms(rtp_timestamp, rate))
    }
}
