//! easefx-core: scalar easing curves (engine-agnostic)
//!
//! Curves live in [`curve`], one function per family and phase. [`dispatch`]
//! routes phase-generic calls through a [`Mode`], either the process-wide
//! default in [`mode`] or a caller-owned [`Easing`]. [`fx`] holds standalone
//! value transforms.

pub mod config;
pub mod curve;
pub mod dispatch;
pub mod error;
pub mod fx;
pub mod mode;

pub use config::Config;
pub use curve::{
    circ_ease_in, circ_ease_in_out, circ_ease_out, expo_ease_in, expo_ease_in_out,
    expo_ease_in_out_pow, expo_ease_in_pow, expo_ease_out, expo_ease_out_pow, linear,
    quad_ease_in, quad_ease_in_out, quad_ease_in_pow, quad_ease_out, quad_ease_out_pow,
    sin_ease_in, sin_ease_in_out, sin_ease_out, Phase, DEFAULT_POWER,
};
pub use dispatch::{ease, ease_in, ease_in_out, ease_out, ease_pow, sample, Easing};
pub use error::EasingError;
pub use mode::{default_mode, set_default_mode, Mode};
