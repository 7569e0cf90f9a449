//! End-to-end render pipeline: load a recording, build its spectrogram.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::audio::{LoadError, SampleBuffer};
use crate::spectrogram::{Calibration, Spectrogram, SpectrogramBuilder, SpectrogramConfig};
use crate::view::Viewport;

/// Errors that can occur while rendering a recording.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Recording too short: {got} samples, one analysis frame needs {need}")]
    TooShort { got: usize, need: usize },
}

/// Serializable description of a completed render.
///
/// Carries the grid dimensions, the input length, and the observed
/// log-magnitude range used to recalibrate the intensity mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSummary {
    pub width: u32,
    pub height: u32,
    pub num_samples: usize,
    pub calibration: Calibration,
}

impl RenderSummary {
    pub fn new(spectrogram: &Spectrogram, num_samples: usize) -> Self {
        Self {
            width: spectrogram.pixels.width(),
            height: spectrogram.pixels.height(),
            num_samples,
            calibration: spectrogram.calibration,
        }
    }
}

/// Grid width for a full-buffer render: one column per `decimation`
/// samples, at least one.
fn derive_width(num_samples: usize, decimation: usize) -> u32 {
    assert!(decimation > 0, "decimation must be at least 1");
    (num_samples / decimation).max(1) as u32
}

fn check_length(buffer: &SampleBuffer, config: &SpectrogramConfig) -> Result<(), PipelineError> {
    if buffer.len() < config.fft_size {
        return Err(PipelineError::TooShort {
            got: buffer.len(),
            need: config.fft_size,
        });
    }
    Ok(())
}

/// Render the whole recording.
///
/// The grid width is derived from the buffer length and the configured
/// decimation, so longer recordings get proportionally wider grids.
pub fn render_buffer(
    buffer: &SampleBuffer,
    config: &SpectrogramConfig,
) -> Result<Spectrogram, PipelineError> {
    check_length(buffer, config)?;

    let width = derive_width(buffer.len(), config.decimation);
    log::debug!(
        "rendering {} samples at {} columns (decimation {})",
        buffer.len(),
        width,
        config.decimation
    );

    let mut builder = SpectrogramBuilder::new(config);
    Ok(builder.render(buffer.samples(), width))
}

/// Render the sub-range of the recording selected by `view`.
///
/// The grid keeps the width of the full-buffer render, so zooming in
/// re-renders the narrowed range at the same on-screen resolution.
pub fn render_buffer_view(
    buffer: &SampleBuffer,
    config: &SpectrogramConfig,
    view: &Viewport,
) -> Result<Spectrogram, PipelineError> {
    check_length(buffer, config)?;

    let width = derive_width(buffer.len(), config.decimation);
    log::debug!(
        "rendering viewport offset ({:.4}, {:.4}) size ({:.4}, {:.4}) at {} columns",
        view.offset.x,
        view.offset.y,
        view.size.x,
        view.size.y,
        width
    );

    let mut builder = SpectrogramBuilder::new(config);
    Ok(builder.render_view(buffer.samples(), width, view))
}

/// Load a raw recording and render the whole of it.
pub fn render_file<P: AsRef<Path>>(
    path: P,
    config: &SpectrogramConfig,
) -> Result<Spectrogram, PipelineError> {
    let buffer = SampleBuffer::from_raw_file(path.as_ref())?;
    render_buffer(&buffer, config)
}

/// Load a raw recording and render the sub-range selected by `view`.
pub fn render_file_view<P: AsRef<Path>>(
    path: P,
    config: &SpectrogramConfig,
    view: &Viewport,
) -> Result<Spectrogram, PipelineError> {
    let buffer = SampleBuffer::from_raw_file(path.as_ref())?;
    render_buffer_view(&buffer, config, view)
}
