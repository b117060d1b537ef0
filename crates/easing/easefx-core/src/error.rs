//! Error types for the parsing and configuration surfaces.
//!
//! Curve evaluation, dispatch and the fx transforms are total and never
//! return these.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EasingError {
    /// Mode name outside sinusoidal/quadratic/exponential/circular
    #[error("Unknown easing mode: {name}")]
    UnknownMode { name: String },

    /// Phase name outside in/out/in_out
    #[error("Unknown easing phase: {name}")]
    UnknownPhase { name: String },

    /// Configuration could not be decoded
    #[error("Invalid easing config: {reason}")]
    Config { reason: String },
}

impl EasingError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownMode { .. } | Self::UnknownPhase { .. } => "parse",
            Self::Config { .. } => "config",
        }
    }
}

impl From<serde_json::Error> for EasingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}
