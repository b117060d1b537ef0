//! Value transforms that can be applied before or after a curve.
//!
//! None of these clamp their input. Degenerate inputs (`power(-1.0, 0.5)`,
//! for instance) return whatever the float math produces.

/// Default distance for [`flip`].
pub const DEFAULT_FLIP_DISTANCE: f32 = 1.0;

/// Default peak for [`mirror`].
pub const DEFAULT_MIRROR_PEAK: f32 = 1.0;

/// `1 - value`.
#[inline]
pub fn flip(value: f32) -> f32 {
    flip_by(value, DEFAULT_FLIP_DISTANCE)
}

/// `distance - value`.
#[inline]
pub fn flip_by(value: f32, distance: f32) -> f32 {
    distance - value
}

#[inline]
pub fn power(value: f32, power: f32) -> f32 {
    value.powf(power)
}

/// Unclamped linear blend; weights outside `[0, 1]` extrapolate. Weights 0
/// and 1 return `a` and `b` exactly.
#[inline]
pub fn mix(a: f32, b: f32, weight_b: f32) -> f32 {
    a * (1.0 - weight_b) + b * weight_b
}

#[inline]
pub fn scale(value: f32, scale: f32) -> f32 {
    value * scale
}

#[inline]
pub fn inverse_scale(value: f32, scale: f32) -> f32 {
    value * (1.0 - scale)
}

/// Parabola through 0 at both ends with a 0.25 peak at 0.5.
#[inline]
pub fn arch(value: f32) -> f32 {
    value * (1.0 - value)
}

/// Triangle wave: up to 1 and back to 0 as `value` runs over `[0, 1]`.
#[inline]
pub fn mirror(value: f32) -> f32 {
    mirror_by(value, DEFAULT_MIRROR_PEAK)
}

/// Ramp `value * peak * 2` up to `value = peak / 2`, then `(1 - value) * peak * 2`.
#[inline]
pub fn mirror_by(value: f32, peak: f32) -> f32 {
    if value <= peak / 2.0 {
        value * peak * 2.0
    } else {
        (1.0 - value) * peak * 2.0
    }
}
