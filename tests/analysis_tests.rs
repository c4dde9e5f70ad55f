// Host-side tests for reducing analyser output to one frequency value.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod analysis {
        include!("../src/core/analysis.rs");
    }
}

use crate::core::analysis::*;

#[test]
fn analyser_reports_sixteen_bins() {
    assert_eq!(ANALYSER_BIN_COUNT, 16);
}

#[test]
fn silence_averages_to_zero() {
    assert_eq!(average_magnitude(&[0; ANALYSER_BIN_COUNT]), 0.0);
}

#[test]
fn full_scale_averages_to_255() {
    assert_eq!(average_magnitude(&[255; ANALYSER_BIN_COUNT]), 255.0);
}

#[test]
fn mixed_bins_average_over_all_bins() {
    let mut bins = [0u8; ANALYSER_BIN_COUNT];
    bins[0] = 255;
    bins[1] = 128;
    bins[15] = 1;
    // (255 + 128 + 1) / 16
    assert!((average_magnitude(&bins) - 24.0).abs() < 1e-6);
}

#[test]
fn sum_does_not_overflow_a_byte() {
    let bins = [200u8, 200, 200, 200];
    assert_eq!(average_magnitude(&bins), 200.0);
}

#[test]
fn empty_input_reads_as_silence() {
    assert_eq!(average_magnitude(&[]), 0.0);
}
