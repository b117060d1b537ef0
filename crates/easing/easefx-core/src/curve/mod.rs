//! Easing curves grouped by family and phase.
//!
//! `shape` holds the normalized `x(t)` curves, `functions` scales them into an
//! `[a, b]` range.

pub mod functions;
pub mod shape;

pub use functions::*;

use serde::{Deserialize, Serialize};

/// Which part of the transition is smoothed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Smooth start.
    In,
    /// Smooth stop.
    Out,
    /// Smooth start and stop.
    InOut,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::In, Phase::Out, Phase::InOut];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "in_out",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Phase {
    type Err = crate::EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in" | "ease_in" | "easein" => Ok(Self::In),
            "out" | "ease_out" | "easeout" => Ok(Self::Out),
            "in_out" | "inout" | "ease_in_out" | "easeinout" => Ok(Self::InOut),
            _ => Err(crate::EasingError::UnknownPhase { name: s.to_string() }),
        }
    }
}
