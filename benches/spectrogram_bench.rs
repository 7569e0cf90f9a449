//! Benchmarks for frame analysis and spectrogram assembly.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use spectroscope::audio::synth::{sine, white_noise};
use spectroscope::audio::FrameAnalyzer;
use spectroscope::spectrogram::{SpectrogramBuilder, SpectrogramConfig};
use spectroscope::view::{Vec2, Viewport};

fn bench_frame_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("Frame Transform");

    for fft_size in [256, 512, 1024, 2048] {
        let samples = sine(16, fft_size, fft_size, 1000.0);

        group.throughput(Throughput::Elements(fft_size as u64));
        group.bench_with_input(BenchmarkId::new("analyze", fft_size), &fft_size, |b, &size| {
            let mut analyzer = FrameAnalyzer::new(size);
            b.iter(|| {
                black_box(analyzer.analyze(&samples));
            });
        });
    }

    group.finish();
}

fn bench_full_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("Spectrogram Render");

    for num_samples in [65_536, 262_144] {
        let samples = white_noise(num_samples, 1000.0, 42);
        let width = (num_samples / 128) as u32;

        group.throughput(Throughput::Elements(num_samples as u64));
        group.bench_with_input(
            BenchmarkId::new("render", num_samples),
            &samples,
            |b, samples| {
                let mut builder = SpectrogramBuilder::new(&SpectrogramConfig::default());
                b.iter(|| {
                    black_box(builder.render(samples, width));
                });
            },
        );
    }

    group.finish();
}

fn bench_zoomed_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("Zoomed Render");

    let samples = white_noise(262_144, 1000.0, 42);
    let width = (samples.len() / 128) as u32;

    for zoom in [2u32, 8, 32] {
        let view = Viewport::new(
            Vec2::new(0.5 - 0.5 / zoom as f32, 0.0),
            Vec2::new(1.0 / zoom as f32, 1.0),
        );

        group.bench_with_input(BenchmarkId::new("render_view", zoom), &view, |b, view| {
            let mut builder = SpectrogramBuilder::new(&SpectrogramConfig::default());
            b.iter(|| {
                black_box(builder.render_view(&samples, width, view));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_frame_transform,
    bench_full_render,
    bench_zoomed_render,
);
criterion_main!(benches);
