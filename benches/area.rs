use criterion::{criterion_group, criterion_main, Criterion};
use flatgeom::algorithm::Centroid;
use flatgeom::{Layout, MultiPolygon, Polygon};

fn create_data() -> MultiPolygon {
    // An L shape
    let poly = Polygon::new_flat(
        Layout::XY,
        vec![
            0., 0., 4., 0., 4., 1., 1., 1., 1., 4., 0., 4., 0., 0.,
        ],
        vec![14],
    );
    let mut multi_polygon = MultiPolygon::new(Layout::XY);
    for _ in 0..1000 {
        multi_polygon.push(&poly);
    }
    multi_polygon
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();

    c.bench_function("area MultiPolygon", |b| {
        b.iter(|| {
            let _ = data.area();
        })
    });

    c.bench_function("centroid MultiPolygon", |b| {
        b.iter(|| {
            let _ = data.centroid();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
