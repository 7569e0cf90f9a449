//! Raw recording loading.
//!
//! Recordings are headerless binary dumps of little-endian unsigned 16-bit
//! samples. The waveform is centered on [`SAMPLE_CENTER`], not zero, so the
//! analysis path subtracts the center before windowing.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// DC center of the recorded waveform.
///
/// The capture hardware stores 12-bit converter output in 16-bit words, so
/// the zero line of the signal sits at 2048 rather than at the u16 midpoint.
pub const SAMPLE_CENTER: f32 = 2048.0;

/// Errors that can occur while loading a recording.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read sample file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file size {0}: expected an even number of bytes")]
    OddLength(u64),

    #[error("Sample file is empty")]
    Empty,
}

/// An immutable buffer of raw waveform samples.
///
/// The length is fixed at load time; zero-length and odd-byte-length inputs
/// are rejected before any analysis runs.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: Vec<u16>,
}

impl SampleBuffer {
    /// Load a recording from a headerless little-endian u16 file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use spectroscope::audio::SampleBuffer;
    /// use std::path::Path;
    ///
    /// let buffer = SampleBuffer::from_raw_file(Path::new("capture.raw")).unwrap();
    /// println!("{} samples", buffer.len());
    /// ```
    pub fn from_raw_file(path: &Path) -> Result<Self, LoadError> {
        let bytes = fs::read(path)?;

        if bytes.len() % 2 != 0 {
            return Err(LoadError::OddLength(bytes.len() as u64));
        }

        let samples: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        Self::from_samples(samples)
    }

    /// Wrap an in-memory sample vector, applying the same emptiness check
    /// as the file loader.
    pub fn from_samples(samples: Vec<u16>) -> Result<Self, LoadError> {
        if samples.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self { samples })
    }

    /// Number of samples in the recording.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The raw samples.
    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    /// Duration of the recording in seconds at the given sample rate.
    pub fn duration(&self, sample_rate: u32) -> f64 {
        if sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_little_endian_samples() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // 0x0102 and 0x0a0b, little-endian on disk.
        file.write_all(&[0x02, 0x01, 0x0b, 0x0a]).unwrap();

        let buffer = SampleBuffer::from_raw_file(file.path()).unwrap();
        assert_eq!(buffer.samples(), &[0x0102, 0x0a0b]);
    }

    #[test]
    fn test_odd_length_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x00, 0x01, 0x02]).unwrap();

        match SampleBuffer::from_raw_file(file.path()) {
            Err(LoadError::OddLength(3)) => {}
            other => panic!("expected OddLength, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_file_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            SampleBuffer::from_raw_file(file.path()),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SampleBuffer::from_raw_file(Path::new("/nonexistent/capture.raw"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_duration() {
        let buffer = SampleBuffer::from_samples(vec![2048; 250_000]).unwrap();
        assert!((buffer.duration(250_000) - 1.0).abs() < 1e-9);
        assert_eq!(buffer.duration(0), 0.0);
    }
}
