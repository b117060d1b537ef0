//! Normalized shape functions `x(t)`.
//!
//! Each function maps a progress value onto `[0, 1]` with `x(0) = 0` and
//! `x(1) = 1`. Input is clamped first, so any `t` is accepted. The
//! transcendental curves pin `t = 1` so the end value does not depend on
//! libm rounding.

use std::f32::consts::PI;

/// Clamp progress into `[0, 1]`.
#[inline]
pub fn clamp_t(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

#[inline]
pub fn linear(t: f32) -> f32 {
    clamp_t(t)
}

#[inline]
pub fn sin_in(t: f32) -> f32 {
    let t = clamp_t(t);
    if t >= 1.0 {
        return 1.0;
    }
    1.0 - (t * PI / 2.0).cos()
}

#[inline]
pub fn sin_out(t: f32) -> f32 {
    let t = clamp_t(t);
    if t >= 1.0 {
        return 1.0;
    }
    (t * PI / 2.0).sin()
}

#[inline]
pub fn sin_in_out(t: f32) -> f32 {
    let t = clamp_t(t);
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    ((PI * (t + 1.0)).cos() + 1.0) / 2.0
}

/// Power ease-in. `power <= 1` takes the multiply path (`t²`); larger powers
/// go through `powf`, so powers 1 and 2 produce the same curve.
#[inline]
pub fn quad_in(t: f32, power: i32) -> f32 {
    let t = clamp_t(t);
    if power <= 1 {
        t * t
    } else {
        t.powf(power as f32)
    }
}

/// Power ease-out, mirror image of [`quad_in`].
#[inline]
pub fn quad_out(t: f32, power: i32) -> f32 {
    let t = clamp_t(t);
    if power <= 1 {
        1.0 - (1.0 + t * t - 2.0 * t)
    } else {
        1.0 - (1.0 - t).powf(power as f32)
    }
}

/// Two quadratic halves joined at `t = 0.5`. Always squared.
#[inline]
pub fn quad_in_out(t: f32) -> f32 {
    let t = clamp_t(t);
    if t <= 0.5 {
        2.0 * t * t
    } else {
        let u = t - 0.5;
        2.0 * u * (1.0 - u) + 0.5
    }
}

// The raw exponential never reaches its endpoints (2^-10 at t = 0), so the
// exact bounds are pinned.
#[inline]
pub fn expo_in(t: f32, power: i32) -> f32 {
    let t = clamp_t(t);
    if t <= 0.0 {
        return 0.0;
    }
    2f32.powf(power as f32 * 10.0 * (t - 1.0))
}

#[inline]
pub fn expo_out(t: f32, power: i32) -> f32 {
    let t = clamp_t(t);
    if t >= 1.0 {
        return 1.0;
    }
    1.0 - 2f32.powf(power as f32 * -10.0 * t)
}

/// Exponential halves split at `t = 0.5`; `power` steepens both halves.
#[inline]
pub fn expo_in_out(t: f32, power: i32) -> f32 {
    let t = clamp_t(t);
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let p = power as f32;
    if t <= 0.5 {
        0.5 * 2f32.powf(p * 10.0 * (t * 2.0 - 1.0))
    } else {
        0.5 * (2.0 - 2f32.powf(p * -10.0 * (t * 2.0 - 1.0)))
    }
}

#[inline]
pub fn circ_in(t: f32) -> f32 {
    let t = clamp_t(t);
    1.0 - (1.0 - t * t).sqrt()
}

#[inline]
pub fn circ_out(t: f32) -> f32 {
    let t = clamp_t(t);
    let u = t - 1.0;
    (1.0 - u * u).sqrt()
}

/// Two quarter-circle arcs meeting at `(0.5, 0.5)`.
#[inline]
pub fn circ_in_out(t: f32) -> f32 {
    let t = clamp_t(t);
    if t <= 0.5 {
        -0.5 * ((1.0 - 4.0 * t * t).sqrt() - 1.0)
    } else {
        (-(t - 0.5) * (t - 1.5)).sqrt() + 0.5
    }
}
