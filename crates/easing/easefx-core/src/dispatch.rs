//! Phase-generic entry points routed by [`Mode`].

use crate::config::Config;
use crate::curve::{self, Phase, DEFAULT_POWER};
use crate::mode::{default_mode, Mode};

/// Evaluate `mode`'s curve for `phase` with the default power.
#[inline]
pub fn ease(mode: Mode, phase: Phase, a: f32, b: f32, t: f32) -> f32 {
    ease_pow(mode, phase, a, b, t, DEFAULT_POWER)
}

/// Evaluate `mode`'s curve for `phase`. `power` reaches the quadratic and
/// exponential in/out curves and the exponential in-out curve; the quadratic
/// in-out curve is fixed at power 2.
pub fn ease_pow(mode: Mode, phase: Phase, a: f32, b: f32, t: f32, power: i32) -> f32 {
    match (mode, phase) {
        (Mode::Sinusoidal, Phase::In) => curve::sin_ease_in(a, b, t),
        (Mode::Sinusoidal, Phase::Out) => curve::sin_ease_out(a, b, t),
        (Mode::Sinusoidal, Phase::InOut) => curve::sin_ease_in_out(a, b, t),
        (Mode::Quadratic, Phase::In) => curve::quad_ease_in_pow(a, b, t, power),
        (Mode::Quadratic, Phase::Out) => curve::quad_ease_out_pow(a, b, t, power),
        (Mode::Quadratic, Phase::InOut) => curve::quad_ease_in_out(a, b, t),
        (Mode::Exponential, Phase::In) => curve::expo_ease_in_pow(a, b, t, power),
        (Mode::Exponential, Phase::Out) => curve::expo_ease_out_pow(a, b, t, power),
        (Mode::Exponential, Phase::InOut) => curve::expo_ease_in_out_pow(a, b, t, power),
        (Mode::Circular, Phase::In) => curve::circ_ease_in(a, b, t),
        (Mode::Circular, Phase::Out) => curve::circ_ease_out(a, b, t),
        (Mode::Circular, Phase::InOut) => curve::circ_ease_in_out(a, b, t),
    }
}

/// Smooth start using the process-wide default mode.
#[inline]
pub fn ease_in(a: f32, b: f32, t: f32) -> f32 {
    ease(default_mode(), Phase::In, a, b, t)
}

/// Smooth stop using the process-wide default mode.
#[inline]
pub fn ease_out(a: f32, b: f32, t: f32) -> f32 {
    ease(default_mode(), Phase::Out, a, b, t)
}

/// Smooth start and stop using the process-wide default mode.
#[inline]
pub fn ease_in_out(a: f32, b: f32, t: f32) -> f32 {
    ease(default_mode(), Phase::InOut, a, b, t)
}

/// Sample `steps + 1` evenly spaced points of a curve, endpoints included.
/// `steps == 0` yields just the start value.
pub fn sample(mode: Mode, phase: Phase, a: f32, b: f32, steps: usize) -> Vec<f32> {
    Easing::new(Config {
        mode,
        ..Config::default()
    })
    .sample(phase, a, b, steps)
}

/// Caller-owned easing configuration.
///
/// Holds its own mode and power, so independent callers never touch the
/// process-wide default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Easing {
    pub mode: Mode,
    pub power: i32,
}

impl Default for Easing {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl From<Mode> for Easing {
    fn from(mode: Mode) -> Self {
        Self {
            mode,
            power: DEFAULT_POWER,
        }
    }
}

impl Easing {
    pub fn new(config: Config) -> Self {
        Self {
            mode: config.mode,
            power: config.power,
        }
    }

    /// Snapshot the current process-wide default mode.
    pub fn from_default_mode() -> Self {
        Self::from(default_mode())
    }

    pub fn with_power(mut self, power: i32) -> Self {
        self.power = power;
        self
    }

    #[inline]
    pub fn ease(&self, phase: Phase, a: f32, b: f32, t: f32) -> f32 {
        ease_pow(self.mode, phase, a, b, t, self.power)
    }

    #[inline]
    pub fn ease_in(&self, a: f32, b: f32, t: f32) -> f32 {
        self.ease(Phase::In, a, b, t)
    }

    #[inline]
    pub fn ease_out(&self, a: f32, b: f32, t: f32) -> f32 {
        self.ease(Phase::Out, a, b, t)
    }

    #[inline]
    pub fn ease_in_out(&self, a: f32, b: f32, t: f32) -> f32 {
        self.ease(Phase::InOut, a, b, t)
    }

    pub fn sample(&self, phase: Phase, a: f32, b: f32, steps: usize) -> Vec<f32> {
        if steps == 0 {
            return vec![self.ease(phase, a, b, 0.0)];
        }
        (0..=steps)
            .map(|i| self.ease(phase, a, b, i as f32 / steps as f32))
            .collect()
    }
}
