//! Spectrogram assembly.
//!
//! Slides fixed-size analysis frames across a sample buffer, transforms
//! each frame, and maps the per-bin log magnitudes onto an RGBA pixel grid.
//! Column `i` of the grid is one analysis frame; row 0 is the highest
//! frequency bin so low frequencies render at the bottom.

pub mod color;

pub use color::hsl_to_rgba;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::audio::FrameAnalyzer;
use crate::view::Viewport;

/// Default analysis frame size.
pub const DEFAULT_FFT_SIZE: usize = 512;

/// Samples advanced per rendered column for full-buffer renders.
pub const DEFAULT_DECIMATION: usize = 128;

/// Offset added to `log10(magnitude)` before normalizing to an intensity.
pub const LOG_OFFSET: f32 = 0.4;

/// Top of the calibrated `log10(magnitude)` range.
pub const LOG_SPAN: f32 = 6.0;

/// Map a log magnitude onto the nominal `0.0..=1.0` intensity range.
///
/// The `-0.4..=6.0` input range was calibrated against real captures;
/// values outside it are passed through unclamped and the color mapper's
/// saturating conversion absorbs them.
pub fn intensity(z: f32) -> f32 {
    (z + LOG_OFFSET) / (LOG_SPAN + LOG_OFFSET)
}

/// Spectrogram build settings.
#[derive(Debug, Clone)]
pub struct SpectrogramConfig {
    /// Analysis frame size. Must be a power of two.
    pub fft_size: usize,
    /// Samples per column when deriving the grid width from a full buffer.
    pub decimation: usize,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            fft_size: DEFAULT_FFT_SIZE,
            decimation: DEFAULT_DECIMATION,
        }
    }
}

/// Observed `log10(magnitude)` range across a rendered grid.
///
/// Reported so the `-0.4..=6.0` intensity mapping can be recalibrated
/// against new capture hardware.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub min_z: f32,
    pub max_z: f32,
}

/// A rendered spectrogram: the pixel grid plus its calibration stats.
#[derive(Debug, Clone)]
pub struct Spectrogram {
    /// RGBA pixel grid, `width × fft_size/2`, full opacity.
    pub pixels: RgbaImage,
    pub calibration: Calibration,
}

/// Builds spectrogram pixel grids from raw sample buffers.
///
/// Owns the frame analyzer (window + FFT plan) so successive renders of
/// the same recording, e.g. after a zoom, reuse both.
pub struct SpectrogramBuilder {
    analyzer: FrameAnalyzer,
}

impl SpectrogramBuilder {
    pub fn new(config: &SpectrogramConfig) -> Self {
        Self {
            analyzer: FrameAnalyzer::new(config.fft_size),
        }
    }

    /// Grid height in pixels (one row per positive frequency bin).
    pub fn height(&self) -> u32 {
        self.analyzer.num_bins() as u32
    }

    /// Render the full sample range into a `width`-column grid.
    ///
    /// # Panics
    ///
    /// Panics if `width == 0` or `samples.len()` is shorter than one
    /// analysis frame.
    pub fn render(&mut self, samples: &[u16], width: u32) -> Spectrogram {
        let (columns, calibration) = self.log_magnitude_grid(samples, width);
        self.colorize(&columns, calibration)
    }

    /// Render the sub-range of the time axis selected by `view`.
    ///
    /// Only the horizontal component of the viewport narrows the sample
    /// range; the full frequency axis is always rendered. The derived
    /// range is clamped to the buffer so degenerate or drifted viewports
    /// degrade the picture instead of indexing out of bounds.
    pub fn render_view(&mut self, samples: &[u16], width: u32, view: &Viewport) -> Spectrogram {
        let (start, end) = self.sample_span(samples.len(), view);
        let (columns, calibration) = self.grid_for_range(&samples[start..end], start, width);
        self.colorize(&columns, calibration)
    }

    /// Per-column log magnitudes over the full sample range.
    ///
    /// `columns[i][j]` is the floored `log10` magnitude of bin `j` in
    /// column `i`. Exposed separately from [`render`](Self::render) so the
    /// numeric grid can be inspected without decoding pixel colors.
    pub fn log_magnitude_grid(
        &mut self,
        samples: &[u16],
        width: u32,
    ) -> (Vec<Vec<f32>>, Calibration) {
        self.grid_for_range(samples, 0, width)
    }

    fn grid_for_range(
        &mut self,
        samples: &[u16],
        range_start: usize,
        width: u32,
    ) -> (Vec<Vec<f32>>, Calibration) {
        let fft_size = self.analyzer.fft_size();
        assert!(width > 0, "grid width must be at least one column");
        assert!(
            samples.len() >= fft_size,
            "Not enough samples: need {} but got {}",
            fft_size,
            samples.len()
        );

        // Evenly distribute `width` frame starts across the usable range.
        let usable = samples.len() - fft_size;
        let mut min_z = f32::INFINITY;
        let mut max_z = f32::NEG_INFINITY;

        let columns: Vec<Vec<f32>> = (0..width as usize)
            .map(|i| {
                let index = if width > 1 {
                    usable * i / (width as usize - 1)
                } else {
                    0
                };
                let log_mags = self.analyzer.log_magnitudes(&samples[index..index + fft_size]);
                for &z in &log_mags {
                    min_z = min_z.min(z);
                    max_z = max_z.max(z);
                }
                log_mags
            })
            .collect();

        log::info!(
            "rendered {} columns from sample {} ({} samples): log-magnitude range {:.3}..{:.3}",
            width,
            range_start,
            samples.len(),
            min_z,
            max_z
        );

        (columns, Calibration { min_z, max_z })
    }

    fn colorize(&self, columns: &[Vec<f32>], calibration: Calibration) -> Spectrogram {
        let height = self.analyzer.num_bins();
        let mut pixels = RgbaImage::new(columns.len() as u32, height as u32);

        for (i, column) in columns.iter().enumerate() {
            for (j, &z) in column.iter().enumerate() {
                let ang = intensity(z);
                // Row 0 is the highest bin: low frequencies at the bottom.
                let y = (height - j - 1) as u32;
                pixels.put_pixel(i as u32, y, hsl_to_rgba(ang, 1.0, ang));
            }
        }

        Spectrogram {
            pixels,
            calibration,
        }
    }

    /// Project the viewport's horizontal span onto sample indices, clamped
    /// so the range stays in bounds and holds at least one frame.
    fn sample_span(&self, total: usize, view: &Viewport) -> (usize, usize) {
        let fft_size = self.analyzer.fft_size();
        assert!(
            total >= fft_size,
            "Not enough samples: need {} but got {}",
            fft_size,
            total
        );

        let x0 = view.offset.x;
        let x1 = view.offset.x + view.size.x;
        // An inverted selection leaves size negative; render the span it
        // covers rather than an empty range.
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };

        let start = ((lo.max(0.0) as f64 * total as f64) as usize).min(total - fft_size);
        let end = ((hi.min(1.0) as f64 * total as f64) as usize)
            .max(start + fft_size)
            .min(total);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::synth::{nyquist_tone, silence, sine};
    use crate::audio::MAGNITUDE_FLOOR;
    use crate::view::Vec2;

    fn builder() -> SpectrogramBuilder {
        SpectrogramBuilder::new(&SpectrogramConfig::default())
    }

    #[test]
    fn test_single_column_exact_frame() {
        // A buffer of exactly one frame with width 1 must not divide by
        // zero and must produce one pixel per bin.
        let samples = sine(16, 512, 512, 800.0);
        let grid = builder().render(&samples, 1);

        assert_eq!(grid.pixels.width(), 1);
        assert_eq!(grid.pixels.height(), 256);
    }

    #[test]
    fn test_silence_renders_finite_floor() {
        let samples = silence(2048);
        let grid = builder().render(&samples, 8);

        let floor = MAGNITUDE_FLOOR.log10();
        assert!(grid.calibration.min_z.is_finite());
        assert!((grid.calibration.min_z - floor).abs() < 1e-6);
        assert!((grid.calibration.max_z - floor).abs() < 1e-6);
    }

    #[test]
    fn test_nyquist_tone_concentrates_in_top_row() {
        let samples = nyquist_tone(1024, 1000);
        let width = 4;
        let mut b = builder();
        let (columns, _) = b.log_magnitude_grid(&samples, width);

        for column in &columns {
            let peak_bin = column
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
                .map(|(j, _)| j)
                .unwrap();
            // Highest positive-frequency bin, which colorize maps to row 0.
            assert_eq!(peak_bin, 255);
        }

        let grid = b.render(&samples, width);
        let top = *grid.pixels.get_pixel(0, 0);
        let expected = hsl_to_rgba(intensity(columns[0][255]), 1.0, intensity(columns[0][255]));
        assert_eq!(top, expected);
    }

    #[test]
    fn test_column_indices_cover_usable_range() {
        // First column starts at 0, last column starts at len - fft_size:
        // both ends of the recording appear in the grid.
        let mut samples = silence(4096);
        // Mark the final frame with a tone so the last column differs.
        let tail = sine(32, 512, 512, 1500.0);
        samples[4096 - 512..].copy_from_slice(&tail);

        let grid = builder().render(&samples, 8);
        let first = *grid.pixels.get_pixel(0, 128);
        let last = *grid.pixels.get_pixel(7, 256 - 32 - 1);
        assert_ne!(first, last);
    }

    #[test]
    fn test_render_view_narrows_sample_range() {
        // Tone only in the second half of the recording.
        let mut samples = silence(4096);
        let tone = sine(64, 512, 2048, 1500.0);
        samples[2048..].copy_from_slice(&tone);

        let mut b = builder();

        // Right half: every column sees the tone.
        let right = Viewport {
            offset: Vec2 { x: 0.5, y: 0.0 },
            size: Vec2 { x: 0.5, y: 1.0 },
        };
        let grid = b.render_view(&samples, 4, &right);
        assert!(grid.calibration.max_z > 2.0);

        // Left half: silence only (the clamped range still ends before the
        // tone for the first columns, and the last frame may graze it).
        let left = Viewport {
            offset: Vec2 { x: 0.0, y: 0.0 },
            size: Vec2 { x: 0.25, y: 1.0 },
        };
        let grid = b.render_view(&samples, 4, &left);
        let floor = MAGNITUDE_FLOOR.log10();
        assert!((grid.calibration.max_z - floor).abs() < 1e-6);
    }

    #[test]
    fn test_render_view_clamps_degenerate_viewport() {
        let samples = sine(16, 512, 1024, 800.0);
        let degenerate = Viewport {
            offset: Vec2 { x: 0.9, y: 0.0 },
            size: Vec2 { x: 0.0, y: 0.0 },
        };

        // Zero-size viewport still renders one frame's worth of range.
        let grid = builder().render_view(&samples, 2, &degenerate);
        assert_eq!(grid.pixels.width(), 2);
        assert_eq!(grid.pixels.height(), 256);
    }

    #[test]
    fn test_intensity_mapping_constants() {
        assert!((intensity(-0.4)).abs() < 1e-6);
        assert!((intensity(6.0) - 1.0).abs() < 1e-6);
    }
}
