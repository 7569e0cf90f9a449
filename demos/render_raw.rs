//! Demo: render a raw capture to PNG spectrograms.
//!
//! Renders the full recording, prints the render summary as JSON, then
//! re-renders the middle half of the middle half the way two nested zoom
//! selections would.
//!
//! Run with:
//!     cargo run --example render_raw -- capture.raw

use std::path::Path;

use spectroscope::audio::SampleBuffer;
use spectroscope::pipeline::{self, RenderSummary};
use spectroscope::spectrogram::SpectrogramConfig;
use spectroscope::view::{Vec2, Viewport};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "capture.raw".to_string());

    println!("Spectroscope - Raw Capture Demo");
    println!("===============================\n");

    println!("Loading {}...", path);
    let buffer = SampleBuffer::from_raw_file(Path::new(&path))?;
    println!("  {} samples\n", buffer.len());

    let config = SpectrogramConfig::default();

    println!("Rendering full recording...");
    let full = pipeline::render_buffer(&buffer, &config)?;
    let summary = RenderSummary::new(&full, buffer.len());
    println!("{}\n", serde_json::to_string_pretty(&summary)?);

    let output = Path::new("spectrogram.png");
    full.pixels.save(output)?;
    println!("  Saved {}", output.display());

    // Two nested selections of the middle half compose into the middle
    // quarter of the original time axis.
    let middle = Viewport::new(Vec2::new(0.25, 0.0), Vec2::new(0.5, 1.0));
    let zoomed = middle.subview(&middle);

    println!("\nRendering zoomed viewport...");
    println!(
        "  offset ({:.3}, {:.3}) size ({:.3}, {:.3})",
        zoomed.offset.x, zoomed.offset.y, zoomed.size.x, zoomed.size.y
    );
    let detail = pipeline::render_buffer_view(&buffer, &config, &zoomed)?;

    let zoom_output = Path::new("spectrogram_zoom.png");
    detail.pixels.save(zoom_output)?;
    println!("  Saved {}", zoom_output.display());

    Ok(())
}
