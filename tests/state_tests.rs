// Host-side tests for the consolidated application state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod params {
        include!("../src/core/params.rs");
    }
    pub mod catalog {
        include!("../src/core/catalog.rs");
    }
    pub mod playback {
        include!("../src/core/playback.rs");
    }
    pub mod interaction {
        include!("../src/core/interaction.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
}

use crate::core::constants::*;
use crate::core::params::*;
use crate::core::playback::PlaybackAction;
use crate::core::state::*;
use glam::{Mat4, Vec3};

#[test]
fn new_state_uses_defaults() {
    let s = AppState::new(800, 600);
    assert_eq!(s.params, VisualParams::default());
    assert_eq!(s.uniforms.color(), [DEFAULT_RED, DEFAULT_GREEN, DEFAULT_BLUE]);
    assert_eq!(s.uniforms.time, 0.0);
    assert_eq!(s.uniforms.frequency, 0.0);
    assert_eq!(s.bloom, BloomSettings::default());
    assert!(!s.playback.is_playing);
    assert!(!s.playback.has_buffer);
    assert!(s.selected_track.is_none());
    assert_eq!(s.model_matrix(), Mat4::IDENTITY);
}

#[test]
fn set_param_touches_only_its_field() {
    for key in ParamKey::ALL {
        let mut s = AppState::new(800, 600);
        let before_uniforms = s.uniforms;
        let before_bloom = s.bloom;
        let (lo, hi) = key.range();
        let target = lo + (hi - lo) * 0.25;
        assert_eq!(s.set_param(key, target), target);
        assert_eq!(s.params.get(key), target);
        for other in ParamKey::ALL.into_iter().filter(|&k| k != key) {
            assert_eq!(s.params.get(other), VisualParams::default().get(other));
        }
        match key.folder() {
            PanelFolder::Colors => {
                assert_eq!(s.bloom, before_bloom);
                assert_ne!(s.uniforms, before_uniforms);
            }
            _ => {
                assert_eq!(s.uniforms, before_uniforms);
                assert_ne!(s.bloom, before_bloom);
            }
        }
    }
}

#[test]
fn set_param_clamps_out_of_range_values() {
    let mut s = AppState::new(800, 600);
    assert_eq!(s.set_param(ParamKey::Red, 2.5), 1.0);
    assert_eq!(s.uniforms.red, 1.0);
    assert_eq!(s.set_param(ParamKey::Strength, 9.0), 3.0);
    assert_eq!(s.bloom.strength, 3.0);
    assert_eq!(s.set_param(ParamKey::Radius, -1.0), 0.0);
    assert_eq!(s.set_param(ParamKey::Threshold, f32::NAN), 0.0);
}

#[test]
fn resize_updates_aspect_and_bloom_extent() {
    let mut s = AppState::new(800, 600);
    let vp = s.resize(1920, 1080);
    assert_eq!(vp, Viewport { width: 1920, height: 1080 });
    assert!((s.camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    assert_eq!(vp.bloom_extent(), (960, 540));
}

#[test]
fn resize_to_zero_is_clamped() {
    let mut s = AppState::new(800, 600);
    let vp = s.resize(0, 0);
    assert_eq!(vp, Viewport { width: 1, height: 1 });
    assert_eq!(s.camera.aspect, 1.0);
    assert_eq!(vp.bloom_extent(), (1, 1));
}

#[test]
fn advance_frame_writes_time_and_frequency() {
    let mut s = AppState::new(800, 600);
    s.advance_frame(2.5, 1.0 / 60.0, 128.0);
    assert_eq!(s.uniforms.time, 2.5);
    assert_eq!(s.uniforms.frequency, 128.0);
    assert_eq!(s.camera.target, Vec3::ZERO);
}

#[test]
fn camera_drifts_toward_pointer() {
    let mut s = AppState::new(800, 600);
    s.pointer_move(0.0, 0.0, [1.0, 1.0]);
    for _ in 0..600 {
        s.advance_frame(0.0, 1.0 / 60.0, 0.0);
    }
    assert!((s.camera.eye.x - POINTER_CAMERA_RANGE).abs() < 1e-3);
    assert!((s.camera.eye.y - POINTER_CAMERA_RANGE).abs() < 1e-3);
}

#[test]
fn drag_rotates_model() {
    let mut s = AppState::new(800, 600);
    s.pointer_down();
    s.pointer_move(50.0, 0.0, [0.0, 0.0]);
    s.pointer_up();
    s.pointer_move(50.0, 0.0, [0.0, 0.0]);
    let expected = Mat4::from_rotation_y(-50.0 * DRAG_SENSITIVITY);
    assert!(s.model_matrix().abs_diff_eq(expected, 1e-6));
}

#[test]
fn click_needs_a_loaded_track() {
    let mut s = AppState::new(800, 600);
    assert_eq!(s.click(1_000.0), PlaybackAction::None);
    let (_, ticket) = s.request_track("Beat1").expect("catalog entry");
    assert!(s.load_succeeded(ticket));
    assert_eq!(s.click(5_000.0), PlaybackAction::Start);
}

#[test]
fn request_track_selects_catalog_entry() {
    let mut s = AppState::new(800, 600);
    let (track, _) = s.request_track("Beat2").expect("catalog entry");
    assert_eq!(track.path, "./assets/Beat2.mp3");
    assert_eq!(s.selected_track, Some(track));
    assert!(s.request_track("Nope").is_none());
    assert_eq!(s.selected_track, Some(track));
}

#[test]
fn superseded_load_is_dropped() {
    let mut s = AppState::new(800, 600);
    let (_, first) = s.request_track("Beat1").expect("catalog entry");
    let (_, second) = s.request_track("Beat3").expect("catalog entry");
    assert!(!s.load_succeeded(first));
    assert!(!s.playback.has_buffer);
    assert!(s.load_succeeded(second));
    assert!(s.playback.has_buffer);
}

#[test]
fn failed_load_keeps_previous_buffer() {
    let mut s = AppState::new(800, 600);
    let (_, ok) = s.request_track("Beat1").expect("catalog entry");
    s.load_succeeded(ok);
    let (_, bad) = s.request_track("Beat2").expect("catalog entry");
    assert!(s.load_failed(bad));
    assert!(s.playback.has_buffer);
}

#[test]
fn switching_tracks_does_not_stop_playback() {
    let mut s = AppState::new(800, 600);
    let (_, t) = s.request_track("Beat1").expect("catalog entry");
    s.load_succeeded(t);
    s.playback.started();
    let (_, t2) = s.request_track("Beat2").expect("catalog entry");
    s.load_succeeded(t2);
    assert!(s.playback.is_playing);
}
