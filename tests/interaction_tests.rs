// Host-side tests for drag rotation and pointer tracking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod interaction {
        include!("../src/core/interaction.rs");
    }
}

use crate::core::constants::{DRAG_SENSITIVITY, PITCH_LIMIT};
use crate::core::interaction::*;

// Deterministic xorshift32 for property-style loops
struct Rng(u32);

impl Rng {
    fn next_f32(&mut self) -> f32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x as f32 / u32::MAX as f32
    }

    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }
}

#[test]
fn drag_state_machine_transitions() {
    let mut it = Interaction::default();
    assert_eq!(it.phase, DragPhase::Idle);
    it.pointer_down();
    assert!(it.is_dragging());
    it.pointer_up();
    assert!(!it.is_dragging());
    it.pointer_down();
    it.pointer_leave();
    assert_eq!(it.phase, DragPhase::Idle);
}

#[test]
fn moves_without_drag_do_not_rotate() {
    let mut it = Interaction::default();
    it.pointer_move(120.0, -40.0, [0.3, 0.2]);
    assert_eq!(it.rotation, MeshRotation::default());
    assert_eq!(it.pointer.ndc, [0.3, 0.2]);
}

#[test]
fn drag_rotates_against_pointer_motion() {
    let mut it = Interaction::default();
    it.pointer_down();
    it.pointer_move(10.0, 20.0, [0.0, 0.0]);
    assert!((it.rotation.yaw - (-10.0 * DRAG_SENSITIVITY)).abs() < 1e-6);
    assert!((it.rotation.pitch - (-20.0 * DRAG_SENSITIVITY)).abs() < 1e-6);
}

#[test]
fn yaw_is_unclamped() {
    let mut it = Interaction::default();
    it.pointer_down();
    for _ in 0..100 {
        it.pointer_move(-100.0, 0.0, [0.0, 0.0]);
    }
    // 100 moves * 100 px * 0.01 rad
    assert!((it.rotation.yaw - 100.0).abs() < 1e-3);
}

#[test]
fn pitch_saturates_and_recovers() {
    let mut it = Interaction::default();
    it.pointer_down();
    it.pointer_move(0.0, -10_000.0, [0.0, 0.0]);
    assert_eq!(it.rotation.pitch, PITCH_LIMIT);
    // Clamping discards the overshoot, so a small move back leaves the limit at once
    it.pointer_move(0.0, 10.0, [0.0, 0.0]);
    assert!((it.rotation.pitch - (PITCH_LIMIT - 0.1)).abs() < 1e-5);
}

#[test]
fn pitch_stays_within_limits_for_random_drags() {
    let mut rng = Rng(0x9E37_79B9);
    for _ in 0..200 {
        let mut it = Interaction::default();
        it.pointer_down();
        for _ in 0..50 {
            let dy = rng.range(-5_000.0, 5_000.0);
            let dx = rng.range(-500.0, 500.0);
            it.pointer_move(dx, dy, [0.0, 0.0]);
            assert!(
                it.rotation.pitch >= -PITCH_LIMIT && it.rotation.pitch <= PITCH_LIMIT,
                "pitch {} escaped the clamp",
                it.rotation.pitch
            );
        }
    }
}

#[test]
fn pointer_ndc_is_clamped() {
    let mut it = Interaction::default();
    it.pointer_move(0.0, 0.0, [3.0, -7.0]);
    assert_eq!(it.pointer.ndc, [1.0, -1.0]);
}

#[test]
fn pixel_to_ndc_maps_corners_and_center() {
    assert_eq!(pixel_to_ndc(0.0, 0.0, 800.0, 600.0), [-1.0, 1.0]);
    assert_eq!(pixel_to_ndc(800.0, 600.0, 800.0, 600.0), [1.0, -1.0]);
    assert_eq!(pixel_to_ndc(400.0, 300.0, 800.0, 600.0), [0.0, 0.0]);
}

#[test]
fn pixel_to_ndc_handles_degenerate_viewport() {
    assert_eq!(pixel_to_ndc(10.0, 10.0, 0.0, 600.0), [0.0, 0.0]);
    assert_eq!(pixel_to_ndc(10.0, 10.0, 800.0, 0.0), [0.0, 0.0]);
}
