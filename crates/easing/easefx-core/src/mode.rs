//! Curve families and the process-wide default mode.

use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

use crate::EasingError;

/// Curve family used by the dispatch entry points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Mode {
    #[default]
    Sinusoidal = 0,
    Quadratic = 1,
    Exponential = 2,
    Circular = 3,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::Sinusoidal,
        Mode::Quadratic,
        Mode::Exponential,
        Mode::Circular,
    ];

    /// Get the name of this mode
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sinusoidal => "sinusoidal",
            Self::Quadratic => "quadratic",
            Self::Exponential => "exponential",
            Self::Circular => "circular",
        }
    }

    /// Whether the `power` parameter changes this family's curves.
    #[inline]
    pub fn uses_power(&self) -> bool {
        matches!(self, Self::Quadratic | Self::Exponential)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lossy conversion: unknown discriminants route to `Quadratic`.
impl From<u8> for Mode {
    fn from(raw: u8) -> Self {
        match raw {
            0 => Self::Sinusoidal,
            1 => Self::Quadratic,
            2 => Self::Exponential,
            3 => Self::Circular,
            other => {
                log::warn!("unknown easing mode discriminant {other}, using quadratic");
                Self::Quadratic
            }
        }
    }
}

impl From<Mode> for u8 {
    #[inline]
    fn from(mode: Mode) -> Self {
        mode as u8
    }
}

/// Lossy conversion: unknown names route to `Quadratic`. Use `str::parse`
/// for a checked conversion.
impl From<&str> for Mode {
    fn from(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            log::warn!("unknown easing mode {s:?}, using quadratic");
            Self::Quadratic
        })
    }
}

impl std::str::FromStr for Mode {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sinusoidal" | "sin" | "sine" => Ok(Self::Sinusoidal),
            "quadratic" | "quad" => Ok(Self::Quadratic),
            "exponential" | "expo" => Ok(Self::Exponential),
            "circular" | "circ" => Ok(Self::Circular),
            _ => Err(EasingError::UnknownMode { name: s.to_string() }),
        }
    }
}

static DEFAULT_MODE: AtomicU8 = AtomicU8::new(Mode::Sinusoidal as u8);

/// Mode read by [`crate::ease_in`], [`crate::ease_out`] and [`crate::ease_in_out`].
#[inline]
pub fn default_mode() -> Mode {
    Mode::from(DEFAULT_MODE.load(Ordering::Relaxed))
}

/// Replace the process-wide default mode.
pub fn set_default_mode(mode: Mode) {
    let previous = DEFAULT_MODE.swap(mode as u8, Ordering::Relaxed);
    log::debug!("default easing mode {} -> {}", Mode::from(previous), mode);
}
