//! Sample loading and spectral analysis.
//!
//! This module provides:
//! - Raw recording loading (headerless little-endian u16 dumps)
//! - Window coefficient generation for frame tapering
//! - Windowed per-frame FFT via RustFFT
//! - Synthetic signal generation for tests and benchmarks

pub mod fft;
pub mod loader;
pub mod synth;
pub mod window;

// Re-export commonly used types
pub use fft::{FrameAnalyzer, MAGNITUDE_FLOOR};
pub use loader::{LoadError, SampleBuffer, SAMPLE_CENTER};
pub use window::hamming;
