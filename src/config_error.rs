use std::fmt;
use std::num::ParseFloatError;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io { path: String, reason: String },
    UnterminatedSection { line: usize },
    ParseFloat(ParseFloatError),
    InvalidClockRate { codec: String, rate: f64 },
}

impl From<ParseFloatError> for ConfigError {
    fn from(e: ParseFloatError) -> Self {
        Self::ParseFloat(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ConfigError::*;
        match self {
            Io { path, reason } => write!(f, "error reading file {path}: {reason}"),
            UnterminatedSection { line } => write!(f, "line {line}: section header missing ']'"),
            ParseFloat(e) => write!(f, "parse float error: {e}"),
            InvalidClockRate { codec, rate } => {
                write!(f, "clock rate for {codec} must be positive, got {rate}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
