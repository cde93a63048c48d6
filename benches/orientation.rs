use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flatgeom::algorithm::robust::{orientation_index, orientation_index_exact};

fn create_data() -> Vec<[f64; 2]> {
    // Points scattered around the line y = x, most of them close enough to need exact
    // arithmetic.
    (0..1000)
        .map(|i| {
            let t = f64::from(i) * 0.1;
            [t, t + f64::from(i % 7 - 3) * f64::EPSILON * t]
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();
    let origin = [0.5, 0.5];
    let end = [12., 12.];

    c.bench_function("orientation_index near-collinear", |b| {
        b.iter(|| {
            for p in &data {
                black_box(orientation_index(&origin, &end, p));
            }
        })
    });

    c.bench_function("orientation_index_exact near-collinear", |b| {
        b.iter(|| {
            for p in &data {
                black_box(orientation_index_exact(&origin, &end, p));
            }
        })
    });

    let far = [0., 10.];
    c.bench_function("orientation_index well-separated", |b| {
        b.iter(|| {
            for p in &data {
                black_box(orientation_index(&origin, &far, p));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
