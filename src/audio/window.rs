//! Window function generation.
//!
//! Analysis frames are tapered before the FFT to reduce spectral leakage
//! from cutting a finite-length frame out of the recording.

/// Shape parameter of the raised-cosine taper (the classic Hamming value).
pub const HAMMING_A0: f32 = 25.0 / 46.0;

/// Generate raised-cosine window coefficients for a frame of `size` samples.
///
/// `w[i] = a0 - (1 - a0) * cos(2π·i / (size - 1))` with `a0 = 25/46`.
///
/// The coefficients are symmetric around the center index and lie in
/// `0.0..=1.0`. A frame of one sample (or none) gets an all-ones window,
/// since there is nothing to taper.
pub fn hamming(size: usize) -> Vec<f32> {
    if size <= 1 {
        return vec![1.0; size];
    }

    (0..size)
        .map(|i| {
            let t = i as f32 / (size - 1) as f32;
            HAMMING_A0 - (1.0 - HAMMING_A0) * (2.0 * std::f32::consts::PI * t).cos()
        })
        .collect()
}
