use easefx_core::{curve, fx};

#[test]
fn flip_is_its_own_inverse() {
    for v in [0.0, 0.25, 0.9, -3.0, 42.5] {
        assert_eq!(fx::flip(fx::flip(v)), v);
        for d in [1.0, 2.0, 0.5, -4.0] {
            assert!((fx::flip_by(fx::flip_by(v, d), d) - v).abs() < 1e-5);
        }
    }
    assert_eq!(fx::flip(0.25), 0.75);
    assert_eq!(fx::flip_by(3.0, 10.0), 7.0);
}

#[test]
fn mix_hits_endpoints_and_extrapolates() {
    assert_eq!(fx::mix(2.0, 6.0, 0.0), 2.0);
    assert_eq!(fx::mix(2.0, 6.0, 1.0), 6.0);
    assert_eq!(fx::mix(2.0, 6.0, 0.5), 4.0);
    assert_eq!(fx::mix(2.0, 6.0, 1.5), 8.0);
    assert_eq!(fx::mix(2.0, 6.0, -0.5), 0.0);
}

#[test]
fn mix_endpoints_are_exact_for_extreme_ranges() {
    for (a, b) in [(1e8, 1.0), (-3e38, 3e38), (f32::MAX, f32::MIN), (-0.1, 0.3)] {
        assert_eq!(fx::mix(a, b, 0.0), a);
        assert_eq!(fx::mix(a, b, 1.0), b);
    }
}

#[test]
fn scale_and_inverse_scale() {
    assert_eq!(fx::scale(4.0, 0.25), 1.0);
    assert_eq!(fx::inverse_scale(4.0, 0.25), 3.0);
    assert_eq!(fx::scale(4.0, 0.25) + fx::inverse_scale(4.0, 0.25), 4.0);
}

#[test]
fn power_passes_degenerate_results_through() {
    assert_eq!(fx::power(0.5, 2.0), 0.25);
    assert!((fx::power(8.0, 1.0 / 3.0) - 2.0).abs() < 1e-5);
    assert!(fx::power(-1.0, 0.5).is_nan());
    assert!(fx::power(0.0, -1.0).is_infinite());
}

#[test]
fn arch_peaks_at_the_middle() {
    assert_eq!(fx::arch(0.0), 0.0);
    assert_eq!(fx::arch(1.0), 0.0);
    assert_eq!(fx::arch(0.5), 0.25);
    assert!(fx::arch(0.2) < fx::arch(0.4));
}

#[test]
fn mirror_ramps_up_then_down() {
    assert_eq!(fx::mirror(0.0), 0.0);
    assert_eq!(fx::mirror(1.0), 0.0);
    assert_eq!(fx::mirror(0.5), 1.0);
    assert_eq!(fx::mirror(0.25), 0.5);
    assert_eq!(fx::mirror(0.75), 0.5);
    for peak in [0.5, 1.0, 1.5] {
        assert_eq!(fx::mirror_by(0.0, peak), 0.0);
        assert_eq!(fx::mirror_by(1.0, peak), 0.0);
        assert_eq!(fx::mirror_by(0.5, peak), peak);
    }
}

#[test]
fn transforms_compose_with_curves() {
    // Flipping the input and output of an ease-in gives the matching ease-out.
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let flipped = fx::flip(curve::quad_ease_in(0.0, 1.0, fx::flip(t)));
        assert!((flipped - curve::quad_ease_out(0.0, 1.0, t)).abs() < 1e-6);
    }
    // Mirror turns a one-way ease into an out-and-back pulse.
    let there_and_back = curve::sin_ease_in_out(0.0, 10.0, fx::mirror(0.5));
    assert!((there_and_back - 10.0).abs() < 1e-4);
    assert!(curve::sin_ease_in_out(0.0, 10.0, fx::mirror(1.0)).abs() < 1e-4);
}
