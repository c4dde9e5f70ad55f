// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod params {
        include!("../src/core/params.rs");
    }
}

use crate::core::constants::*;
use crate::core::params::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_sane() {
    assert!((CAMERA_FOV_DEGREES - 45.0).abs() < f32::EPSILON);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert_eq!(CAMERA_START, [0.0, -2.0, 14.0]);
    // Start position must be outside the cube
    assert!(CAMERA_START[2] > CUBE_SIDE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_coefficients_are_fractions() {
    for c in [CAMERA_EASE_X, CAMERA_EASE_Y] {
        assert!(c > 0.0 && c < 1.0);
    }
    // Vertical follow is faster than horizontal
    assert!(CAMERA_EASE_Y > CAMERA_EASE_X);
    assert!(EASE_REFERENCE_HZ > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_constants_match_gesture_rules() {
    assert!((DRAG_SENSITIVITY - 0.01).abs() < f32::EPSILON);
    assert!((PITCH_LIMIT - std::f32::consts::FRAC_PI_2).abs() < f32::EPSILON);
    assert!((DOUBLE_CLICK_WINDOW_MS - 300.0).abs() < f64::EPSILON);
}

#[test]
fn analyser_fft_size_is_a_power_of_two() {
    assert!(ANALYSER_FFT_SIZE.is_power_of_two());
    assert!((32..=32768).contains(&ANALYSER_FFT_SIZE));
}

#[test]
fn defaults_lie_inside_their_panel_ranges() {
    let p = VisualParams::default();
    for key in ParamKey::ALL {
        let (lo, hi) = key.range();
        let v = p.get(key);
        assert!(lo < hi, "{:?} has an empty range", key);
        assert!(v >= lo && v <= hi, "{:?} default {} outside [{}, {}]", key, v, lo, hi);
    }
}

#[test]
fn strength_range_is_wider_than_colors() {
    assert_eq!(ParamKey::Strength.range(), (0.0, 3.0));
    for key in [ParamKey::Red, ParamKey::Green, ParamKey::Blue, ParamKey::Threshold, ParamKey::Radius] {
        assert_eq!(key.range(), (0.0, 1.0));
    }
}

#[test]
fn track_catalog_constant_is_well_formed() {
    assert!(!TRACKS.is_empty());
    for (i, (label, path)) in TRACKS.iter().enumerate() {
        assert!(!label.is_empty());
        assert!(path.ends_with(".mp3"));
        for (other, _) in &TRACKS[i + 1..] {
            assert_ne!(label, other, "duplicate label");
        }
    }
}
