use js_sys::Float32Array;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use easefx_core::{fx, Config, Easing, EasingError, Mode, Phase};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn to_js_error(err: EasingError) -> JsError {
    JsError::new(&err.to_string())
}

fn parse_mode(name: &str) -> Result<Mode, JsError> {
    name.parse().map_err(to_js_error)
}

fn parse_phase(name: &str) -> Result<Phase, JsError> {
    name.parse().map_err(to_js_error)
}

/// Caller-owned easing with its own mode and power.
#[wasm_bindgen]
pub struct EasefxEasing {
    inner: Easing,
}

#[wasm_bindgen]
impl EasefxEasing {
    /// Create an easing from a config object or undefined/null for defaults.
    /// Example:
    ///   new EasefxEasing({ mode: "exponential", power: 2 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<EasefxEasing, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(EasefxEasing {
            inner: Easing::new(cfg),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.inner.mode.name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn power(&self) -> i32 {
        self.inner.power
    }

    #[wasm_bindgen(js_name = ease_in)]
    pub fn ease_in(&self, a: f32, b: f32, t: f32) -> f32 {
        self.inner.ease_in(a, b, t)
    }

    #[wasm_bindgen(js_name = ease_out)]
    pub fn ease_out(&self, a: f32, b: f32, t: f32) -> f32 {
        self.inner.ease_out(a, b, t)
    }

    #[wasm_bindgen(js_name = ease_in_out)]
    pub fn ease_in_out(&self, a: f32, b: f32, t: f32) -> f32 {
        self.inner.ease_in_out(a, b, t)
    }

    /// Evaluate by phase name ("in", "out", "in_out").
    pub fn ease(&self, phase: &str, a: f32, b: f32, t: f32) -> Result<f32, JsError> {
        Ok(self.inner.ease(parse_phase(phase)?, a, b, t))
    }

    /// `steps + 1` evenly spaced samples, endpoints included.
    pub fn sample(
        &self,
        phase: &str,
        a: f32,
        b: f32,
        steps: usize,
    ) -> Result<Float32Array, JsError> {
        let points = self.inner.sample(parse_phase(phase)?, a, b, steps);
        Ok(Float32Array::from(points.as_slice()))
    }
}

#[wasm_bindgen]
pub fn linear(a: f32, b: f32, t: f32) -> f32 {
    easefx_core::linear(a, b, t)
}

/// Evaluate a curve by mode and phase name.
#[wasm_bindgen]
pub fn ease(mode: &str, phase: &str, a: f32, b: f32, t: f32) -> Result<f32, JsError> {
    Ok(easefx_core::ease(parse_mode(mode)?, parse_phase(phase)?, a, b, t))
}

#[wasm_bindgen(js_name = ease_in)]
pub fn ease_in(a: f32, b: f32, t: f32) -> f32 {
    easefx_core::ease_in(a, b, t)
}

#[wasm_bindgen(js_name = ease_out)]
pub fn ease_out(a: f32, b: f32, t: f32) -> f32 {
    easefx_core::ease_out(a, b, t)
}

#[wasm_bindgen(js_name = ease_in_out)]
pub fn ease_in_out(a: f32, b: f32, t: f32) -> f32 {
    easefx_core::ease_in_out(a, b, t)
}

/// Replace the module-wide default mode used by `ease_in`/`ease_out`/`ease_in_out`.
#[wasm_bindgen(js_name = set_default_mode)]
pub fn set_default_mode(mode: &str) -> Result<(), JsError> {
    easefx_core::set_default_mode(parse_mode(mode)?);
    Ok(())
}

#[wasm_bindgen(js_name = default_mode)]
pub fn default_mode() -> String {
    easefx_core::default_mode().name().to_string()
}

#[wasm_bindgen(js_name = fx_flip)]
pub fn fx_flip(value: f32, distance: Option<f32>) -> f32 {
    fx::flip_by(value, distance.unwrap_or(fx::DEFAULT_FLIP_DISTANCE))
}

#[wasm_bindgen(js_name = fx_power)]
pub fn fx_power(value: f32, power: f32) -> f32 {
    fx::power(value, power)
}

#[wasm_bindgen(js_name = fx_mix)]
pub fn fx_mix(a: f32, b: f32, weight_b: f32) -> f32 {
    fx::mix(a, b, weight_b)
}

#[wasm_bindgen(js_name = fx_scale)]
pub fn fx_scale(value: f32, scale: f32) -> f32 {
    fx::scale(value, scale)
}

#[wasm_bindgen(js_name = fx_inverse_scale)]
pub fn fx_inverse_scale(value: f32, scale: f32) -> f32 {
    fx::inverse_scale(value, scale)
}

#[wasm_bindgen(js_name = fx_arch)]
pub fn fx_arch(value: f32) -> f32 {
    fx::arch(value)
}

#[wasm_bindgen(js_name = fx_mirror)]
pub fn fx_mirror(value: f32, peak: Option<f32>) -> f32 {
    fx::mirror_by(value, peak.unwrap_or(fx::DEFAULT_MIRROR_PEAK))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
