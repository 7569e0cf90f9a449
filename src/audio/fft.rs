//! Windowed frame transform using RustFFT.
//!
//! Converts one analysis frame of raw samples into its frequency-domain
//! representation. Frames are DC-centered and tapered before the transform.

use rustfft::{num_complex::Complex, FftPlanner};

use super::loader::SAMPLE_CENTER;
use super::window::hamming;

/// Magnitudes are clamped to this floor before taking `log10`, so silent
/// frames produce a finite value (-10.0) instead of negative infinity.
pub const MAGNITUDE_FLOOR: f32 = 1e-10;

/// Windowed FFT over fixed-size analysis frames.
///
/// Owns the window coefficients (computed once) and the FFT planner, so
/// repeated per-column analysis reuses both.
pub struct FrameAnalyzer {
    planner: FftPlanner<f32>,
    fft_size: usize,
    window: Vec<f32>,
}

impl FrameAnalyzer {
    /// Create an analyzer for frames of `fft_size` samples.
    ///
    /// # Panics
    ///
    /// Panics if `fft_size` is not a power of two.
    pub fn new(fft_size: usize) -> Self {
        assert!(fft_size.is_power_of_two(), "FFT size must be a power of 2");

        Self {
            planner: FftPlanner::new(),
            fft_size,
            window: hamming(fft_size),
        }
    }

    /// Frame size being analyzed.
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Number of usable frequency bins (positive frequencies only).
    ///
    /// The input frames are real-valued, so the upper half of the spectrum
    /// is the conjugate mirror of the lower half and carries no extra
    /// information.
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2
    }

    /// The window coefficients applied to each frame.
    pub fn window(&self) -> &[f32] {
        &self.window
    }

    /// Transform one frame of raw samples into the full complex spectrum.
    ///
    /// Each sample is centered on [`SAMPLE_CENTER`] and multiplied by the
    /// window coefficient at its frame position.
    ///
    /// # Panics
    ///
    /// Panics if `frame.len() < self.fft_size()`.
    pub fn analyze(&mut self, frame: &[u16]) -> Vec<Complex<f32>> {
        assert!(
            frame.len() >= self.fft_size,
            "Not enough samples: need {} but got {}",
            self.fft_size,
            frame.len()
        );

        let mut buffer: Vec<Complex<f32>> = frame[..self.fft_size]
            .iter()
            .zip(&self.window)
            .map(|(&s, &w)| Complex::new((s as f32 - SAMPLE_CENTER) * w, 0.0))
            .collect();

        let fft = self.planner.plan_fft_forward(self.fft_size);
        fft.process(&mut buffer);

        buffer
    }

    /// `log10` of the magnitude of each positive-frequency bin.
    ///
    /// Returns `fft_size / 2` values. Magnitudes below [`MAGNITUDE_FLOOR`]
    /// are clamped to it, so an all-silent frame yields `-10.0` everywhere
    /// rather than negative infinity.
    pub fn log_magnitudes(&mut self, frame: &[u16]) -> Vec<f32> {
        let spectrum = self.analyze(frame);
        spectrum[..self.fft_size / 2]
            .iter()
            .map(|bin| bin.norm().max(MAGNITUDE_FLOOR).log10())
            .collect()
    }
}
