use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ov_contour::{ResolveConfig, collect_edges, resolve_boundaries};
use ov_core::{ColorKey, Image, Rgba};

const INK: Rgba = Rgba::opaque(20, 20, 20);
const PAPER: Rgba = Rgba::opaque(240, 240, 240);

/// Checkerboard-ish sprite sheet: 8x8 tiles with holes and diagonal pinches.
fn synthetic_sprite(width: usize, height: usize) -> Image<Rgba> {
    Image::from_fn(width, height, |x, y| {
        let (tx, ty) = (x % 8, y % 8);
        let ring = (1..7).contains(&tx) && (1..7).contains(&ty) && !(3..5).contains(&tx);
        let pinch = tx == ty && (x / 8 + y / 8) % 2 == 0;
        if ring || pinch { INK } else { PAPER }
    })
}

fn bench_resolve(c: &mut Criterion) {
    let img = synthetic_sprite(512, 512);
    let edges = collect_edges(&img);
    let ink = edges
        .get(ColorKey::from(INK))
        .expect("ink present")
        .to_vec();
    let cfg = ResolveConfig::default();

    c.bench_function("ov_contour_collect_512", |b| {
        b.iter(|| {
            let e = collect_edges(black_box(&img));
            black_box(e.len());
        });
    });

    c.bench_function("ov_contour_resolve_ink_512", |b| {
        b.iter(|| {
            let polygons = resolve_boundaries(black_box(ink.clone()), black_box(&cfg))
                .expect("resolvable");
            black_box(polygons.len());
        });
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
