use criterion::{Criterion, black_box, criterion_group, criterion_main};
use orthovec::{ConvertConfig, Dispatch, Image, Rgba, convert};

/// Banded gradient with a few dozen colors, each split into many islands.
fn synthetic_poster(width: usize, height: usize) -> Image<Rgba> {
    Image::from_fn(width, height, |x, y| {
        let band = ((x / 5) ^ (y / 7)) % 24;
        let shade = (band * 10) as i32;
        Rgba::clamped(shade, 255 - shade, (x % 3) as i32 * 60, 255)
    })
}

fn bench_convert(c: &mut Criterion) {
    let img = synthetic_poster(256, 256);
    let parallel = ConvertConfig::default();
    let sequential = ConvertConfig {
        dispatch: Dispatch::Sequential,
        ..ConvertConfig::default()
    };

    c.bench_function("orthovec_convert_256_parallel", |b| {
        b.iter(|| {
            let svg = convert(black_box(&img), black_box(&parallel)).expect("converts");
            black_box(svg.len());
        });
    });

    c.bench_function("orthovec_convert_256_sequential", |b| {
        b.iter(|| {
            let svg = convert(black_box(&img), black_box(&sequential)).expect("converts");
            black_box(svg.len());
        });
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
