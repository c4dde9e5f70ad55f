// Reduction of analyser output to the single value the shader consumes.

use super::constants::ANALYSER_FFT_SIZE;

/// Frequency bins reported by an analyser of [`ANALYSER_FFT_SIZE`].
pub const ANALYSER_BIN_COUNT: usize = (ANALYSER_FFT_SIZE / 2) as usize;

/// Mean of byte frequency data, on the analyser's 0..=255 scale. Empty input
/// reads as silence.
#[inline]
pub fn average_magnitude(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let sum: u32 = bins.iter().map(|&b| b as u32).sum();
    sum as f32 / bins.len() as f32
}
