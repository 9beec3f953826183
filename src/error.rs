//! Configuration errors
//!
//! The per-tick transform itself never fails; bad input is rejected when
//! a game is created, resized, or handed a new [`Tuning`](crate::Tuning).

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// World bounds must be finite and strictly positive on both axes
    DegenerateBounds { x: f32, y: f32 },
    /// A tuning value is out of its allowed range
    InvalidTuning {
        field: &'static str,
        reason: &'static str,
    },
    /// Tuning JSON failed to parse
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateBounds { x, y } => {
                write!(f, "degenerate world bounds: ({x}, {y}) must be finite and > 0")
            }
            Self::InvalidTuning { field, reason } => {
                write!(f, "invalid tuning value `{field}`: {reason}")
            }
            Self::Parse(msg) => write!(f, "tuning parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
