//! Range easing functions `F(a, b, t) = a * (1 - x(t)) + b * x(t)`.
//!
//! `t` is clamped to `[0, 1]`, so `F(a, b, t <= 0) == a` and
//! `F(a, b, t >= 1) == b`. The `_pow` variants take the steepness power used by
//! the quadratic and exponential families; the plain names use [`DEFAULT_POWER`].

use super::shape;

/// Power used by the non-`_pow` entry points.
pub const DEFAULT_POWER: i32 = 1;

// Weighted form so `x == 0` yields `a` and `x == 1` yields `b` exactly, even
// when `b - a` would round away or overflow.
#[inline]
fn blend(a: f32, b: f32, x: f32) -> f32 {
    a * (1.0 - x) + b * x
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn linear(a: f32, b: f32, t: f32) -> f32 {
    blend(a, b, shape::linear(t))
}

/// Sinusoidal smooth start.
#[inline]
pub fn sin_ease_in(a: f32, b: f32, t: f32) -> f32 {
    blend(a, b, shape::sin_in(t))
}

/// Sinusoidal smooth stop.
#[inline]
pub fn sin_ease_out(a: f32, b: f32, t: f32) -> f32 {
    blend(a, b, shape::sin_out(t))
}

/// Sinusoidal smooth start and stop (half cosine wave).
#[inline]
pub fn sin_ease_in_out(a: f32, b: f32, t: f32) -> f32 {
    blend(a, b, shape::sin_in_out(t))
}

/// Quadratic smooth start (`t²`).
#[inline]
pub fn quad_ease_in(a: f32, b: f32, t: f32) -> f32 {
    quad_ease_in_pow(a, b, t, DEFAULT_POWER)
}

/// Power smooth start (`t^power`, with `power <= 1` treated as 2).
#[inline]
pub fn quad_ease_in_pow(a: f32, b: f32, t: f32, power: i32) -> f32 {
    blend(a, b, shape::quad_in(t, power))
}

/// Quadratic smooth stop (`1 - (1 - t)²`).
#[inline]
pub fn quad_ease_out(a: f32, b: f32, t: f32) -> f32 {
    quad_ease_out_pow(a, b, t, DEFAULT_POWER)
}

/// Power smooth stop (`1 - (1 - t)^power`, with `power <= 1` treated as 2).
#[inline]
pub fn quad_ease_out_pow(a: f32, b: f32, t: f32, power: i32) -> f32 {
    blend(a, b, shape::quad_out(t, power))
}

/// Quadratic smooth start and stop, two halves joined at `t = 0.5`.
#[inline]
pub fn quad_ease_in_out(a: f32, b: f32, t: f32) -> f32 {
    blend(a, b, shape::quad_in_out(t))
}

/// Exponential smooth start (`2^(10 * power * (t - 1))`).
#[inline]
pub fn expo_ease_in(a: f32, b: f32, t: f32) -> f32 {
    expo_ease_in_pow(a, b, t, DEFAULT_POWER)
}

/// Exponential smooth start with `power` steepening the curve.
#[inline]
pub fn expo_ease_in_pow(a: f32, b: f32, t: f32, power: i32) -> f32 {
    blend(a, b, shape::expo_in(t, power))
}

/// Exponential smooth stop (`1 - 2^(-10 * power * t)`).
#[inline]
pub fn expo_ease_out(a: f32, b: f32, t: f32) -> f32 {
    expo_ease_out_pow(a, b, t, DEFAULT_POWER)
}

/// Exponential smooth stop with `power` steepening the curve.
#[inline]
pub fn expo_ease_out_pow(a: f32, b: f32, t: f32, power: i32) -> f32 {
    blend(a, b, shape::expo_out(t, power))
}

/// Exponential smooth start and stop, halves split at `t = 0.5`.
#[inline]
pub fn expo_ease_in_out(a: f32, b: f32, t: f32) -> f32 {
    expo_ease_in_out_pow(a, b, t, DEFAULT_POWER)
}

/// Exponential smooth start and stop with `power` applied to both halves.
#[inline]
pub fn expo_ease_in_out_pow(a: f32, b: f32, t: f32, power: i32) -> f32 {
    blend(a, b, shape::expo_in_out(t, power))
}

/// Circular smooth start (quarter circle).
#[inline]
pub fn circ_ease_in(a: f32, b: f32, t: f32) -> f32 {
    blend(a, b, shape::circ_in(t))
}

/// Circular smooth stop (quarter circle).
#[inline]
pub fn circ_ease_out(a: f32, b: f32, t: f32) -> f32 {
    blend(a, b, shape::circ_out(t))
}

/// Circular smooth start and stop, two arcs joined at `t = 0.5`.
#[inline]
pub fn circ_ease_in_out(a: f32, b: f32, t: f32) -> f32 {
    blend(a, b, shape::circ_in_out(t))
}
