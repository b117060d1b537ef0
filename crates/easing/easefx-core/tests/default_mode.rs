// Kept to a single test: the default mode is process-wide and the test
// harness runs tests of one binary in parallel.

use easefx_core::{
    curve, default_mode, ease_in, ease_in_out, ease_out, set_default_mode, Config, Easing, Mode,
};

#[test]
fn default_mode_drives_free_entry_points() {
    assert_eq!(default_mode(), Mode::Sinusoidal);
    assert_eq!(ease_in(0.0, 1.0, 0.3), curve::sin_ease_in(0.0, 1.0, 0.3));

    for mode in Mode::ALL {
        set_default_mode(mode);
        assert_eq!(default_mode(), mode);
        let easing = Easing::from_default_mode();
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert_eq!(ease_in(-1.0, 1.0, t), easing.ease_in(-1.0, 1.0, t));
            assert_eq!(ease_out(-1.0, 1.0, t), easing.ease_out(-1.0, 1.0, t));
            assert_eq!(ease_in_out(-1.0, 1.0, t), easing.ease_in_out(-1.0, 1.0, t));
        }
    }

    set_default_mode(Mode::Circular);
    assert_eq!(ease_out(0.0, 1.0, 0.25), curve::circ_ease_out(0.0, 1.0, 0.25));

    // A caller-owned Easing is unaffected by later registry writes.
    let pinned = Easing::from_default_mode();
    Config {
        mode: Mode::Exponential,
        power: 1,
    }
    .apply_as_default();
    assert_eq!(default_mode(), Mode::Exponential);
    assert_eq!(pinned.mode, Mode::Circular);
    assert_eq!(ease_in(0.0, 1.0, 0.5), curve::expo_ease_in(0.0, 1.0, 0.5));

    set_default_mode(Mode::Sinusoidal);
}
