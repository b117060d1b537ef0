#![cfg(target_arch = "wasm32")]
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use easefx_core::{curve, Config, Mode};
use easefx_wasm::{
    abi_version, default_mode, ease, fx_flip, fx_mirror, set_default_mode, EasefxEasing,
};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    let easing = EasefxEasing::new(JsValue::UNDEFINED).unwrap();
    assert_eq!(easing.mode(), "sinusoidal");
    assert_eq!(easing.power(), 1);
}

#[wasm_bindgen_test]
fn construct_from_config_object() {
    let cfg = swb::to_value(&Config {
        mode: Mode::Quadratic,
        power: 3,
    })
    .unwrap();
    let easing = EasefxEasing::new(cfg).unwrap();
    assert_eq!(easing.mode(), "quadratic");
    assert!((easing.ease_in(0.0, 1.0, 0.5) - 0.125).abs() < 1e-6);

    let samples = easing.sample("out", 0.0, 1.0, 2).unwrap().to_vec();
    assert_eq!(samples.len(), 3);
    assert_eq!(samples[0], 0.0);
    assert_eq!(samples[2], 1.0);
}

#[wasm_bindgen_test]
fn ease_by_name_matches_core() {
    let y = ease("circular", "in_out", 0.0, 4.0, 0.3).unwrap();
    assert_eq!(y, curve::circ_ease_in_out(0.0, 4.0, 0.3));
    assert!(ease("bounce", "in", 0.0, 1.0, 0.5).is_err());
    assert!(ease("circular", "sideways", 0.0, 1.0, 0.5).is_err());
}

#[wasm_bindgen_test]
fn default_mode_round_trips() {
    set_default_mode("exponential").unwrap();
    assert_eq!(default_mode(), "exponential");
    assert!(set_default_mode("bounce").is_err());
    assert_eq!(default_mode(), "exponential");
    set_default_mode("sinusoidal").unwrap();
}

#[wasm_bindgen_test]
fn fx_defaults_apply_when_omitted() {
    assert_eq!(fx_flip(0.25, None), 0.75);
    assert_eq!(fx_flip(0.25, Some(2.0)), 1.75);
    assert_eq!(fx_mirror(0.5, None), 1.0);
    assert_eq!(fx_mirror(0.5, Some(0.5)), 0.5);
}
