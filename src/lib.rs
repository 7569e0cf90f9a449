//! Spectroscope
//!
//! Spectrogram rendering and interactive zoom library for raw waveform recordings.
//!
//! # Features
//!
//! - Raw recording loading (headerless little-endian u16 dumps)
//! - Windowed per-frame spectral analysis via RustFFT
//! - Log-magnitude spectrogram assembly into an RGBA pixel grid
//! - Normalized viewport algebra composing nested zoom selections
//! - Pointer-event state machine turning drag selections into viewports

pub mod audio;
pub mod pipeline;
pub mod spectrogram;
pub mod view;

// Re-export commonly used types
pub use audio::{hamming, FrameAnalyzer, LoadError, SampleBuffer, MAGNITUDE_FLOOR, SAMPLE_CENTER};
pub use pipeline::{
    render_buffer, render_buffer_view, render_file, render_file_view, PipelineError, RenderSummary,
};
pub use spectrogram::{
    hsl_to_rgba, Calibration, Spectrogram, SpectrogramBuilder, SpectrogramConfig,
};
pub use view::{Bounds, Point, PointerEvent, SelectionState, Vec2, Viewport};
