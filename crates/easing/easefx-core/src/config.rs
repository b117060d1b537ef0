//! Serializable easing configuration.

use serde::{Deserialize, Serialize};

use crate::curve::DEFAULT_POWER;
use crate::mode::{set_default_mode, Mode};
use crate::EasingError;

/// Mode and power for an [`crate::Easing`]. Missing JSON fields take their
/// defaults, so `{}` and `{"mode": "circular"}` are both valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mode: Mode,

    /// Steepness for the quadratic and exponential families.
    pub power: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            power: DEFAULT_POWER,
        }
    }
}

impl Config {
    pub fn from_json(s: &str) -> Result<Self, EasingError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Install this config's mode as the process-wide default.
    pub fn apply_as_default(&self) {
        set_default_mode(self.mode);
    }
}
