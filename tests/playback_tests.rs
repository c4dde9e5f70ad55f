// Host-side tests for click gestures and track-load bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod playback {
        include!("../src/core/playback.rs");
    }
}

use crate::core::playback::*;

fn loaded() -> PlaybackState {
    let mut p = PlaybackState::default();
    p.has_buffer = true;
    p
}

#[test]
fn click_tracker_classifies_by_window() {
    let mut t = ClickTracker::default();
    assert_eq!(t.register(1_000.0), ClickKind::Single);
    assert_eq!(t.register(1_200.0), ClickKind::Double);
    // The window is measured from the previous click, so a third quick click is double too
    assert_eq!(t.register(1_450.0), ClickKind::Double);
    assert_eq!(t.register(1_750.0), ClickKind::Single);
    assert_eq!(t, ClickTracker::Pending { at_ms: 1_750.0 });
}

#[test]
fn click_at_exact_window_is_single() {
    let mut t = ClickTracker::default();
    t.register(0.0);
    assert_eq!(t.register(300.0), ClickKind::Single);
}

#[test]
fn first_click_ever_is_single_even_at_time_zero() {
    let mut t = ClickTracker::default();
    assert_eq!(t.register(0.0), ClickKind::Single);
}

#[test]
fn single_click_while_stopped_starts() {
    let mut p = loaded();
    assert_eq!(p.click(5_000.0), PlaybackAction::Start);
}

#[test]
fn single_click_without_buffer_does_nothing() {
    let mut p = PlaybackState::default();
    assert_eq!(p.click(5_000.0), PlaybackAction::None);
    assert!(!p.is_playing);
}

#[test]
fn clicks_before_first_load_do_not_arm_double_click() {
    let mut p = PlaybackState::default();
    assert_eq!(p.click(1_000.0), PlaybackAction::None);
    p.has_buffer = true;
    // 200 ms later, but the earlier click never counted
    assert_eq!(p.click(1_200.0), PlaybackAction::Start);
}

#[test]
fn double_click_while_playing_stops() {
    let mut p = loaded();
    assert_eq!(p.click(1_000.0), PlaybackAction::Start);
    p.started();
    assert_eq!(p.click(1_150.0), PlaybackAction::Stop);
    p.stopped();
    assert!(!p.is_playing);
}

#[test]
fn double_click_while_stopped_leaves_state_unchanged() {
    let mut p = loaded();
    // First click is swallowed as a start that we decline to apply
    p.click(1_000.0);
    assert_eq!(p.click(1_100.0), PlaybackAction::None);
    assert!(!p.is_playing);
}

#[test]
fn slow_click_while_playing_is_ignored() {
    let mut p = loaded();
    p.click(1_000.0);
    p.started();
    assert_eq!(p.click(2_000.0), PlaybackAction::None);
    assert!(p.is_playing);
}

#[test]
fn ended_event_only_counts_for_current_session() {
    let mut p = loaded();
    let first = p.started();
    p.stopped();
    let second = p.started();
    // The stopped source reports its end late
    assert!(!p.ended(first));
    assert!(p.is_playing);
    assert!(p.ended(second));
    assert!(!p.is_playing);
    // Repeated end for the same session is a no-op
    assert!(!p.ended(second));
}

#[test]
fn newest_load_request_wins() {
    let mut loads = LoadTracker::default();
    let a = loads.begin();
    let b = loads.begin();
    // b finishes before a; a must not overwrite it afterwards
    assert!(loads.finish(b));
    assert!(!loads.finish(a));
}

#[test]
fn stale_load_is_rejected_even_if_it_finishes_first() {
    let mut loads = LoadTracker::default();
    let a = loads.begin();
    let b = loads.begin();
    assert!(!loads.finish(a));
    assert!(loads.is_current(b));
    assert!(loads.finish(b));
}
