use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use geo_logic::{GeoPoint, GeodesicRay, distance, geohash, quadkey};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn generate_fixed_points(size: usize, seed: u64) -> Vec<GeoPoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed); // シード固定
    (0..size).map(|_| GeoPoint::random_using(&mut rng)).collect()
}

fn bench_codecs(c: &mut Criterion) {
    let mut group = c.benchmark_group("Codecs");
    let points = generate_fixed_points(1_000, 12345);

    for precision in [5u8, 12] {
        let hashes: Vec<String> = points
            .iter()
            .filter_map(|p| geohash::encode(p.lat(), p.lon(), precision).ok())
            .collect();

        group.bench_with_input(
            BenchmarkId::new("Geohash Encode", precision),
            &points,
            |b, points| {
                b.iter(|| {
                    for p in points {
                        black_box(geohash::encode(p.lat(), p.lon(), precision).ok());
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Geohash Decode", precision),
            &hashes,
            |b, hashes| {
                b.iter(|| {
                    for hash in hashes {
                        black_box(geohash::decode(hash).ok());
                    }
                });
            },
        );
    }

    for level in [10u8, quadkey::DEFAULT_LEVEL] {
        let keys: Vec<String> = points
            .iter()
            .filter_map(|p| quadkey::encode(p.lat(), p.lon(), level).ok())
            .collect();

        group.bench_with_input(
            BenchmarkId::new("Quadkey Encode", level),
            &points,
            |b, points| {
                b.iter(|| {
                    for p in points {
                        black_box(quadkey::encode(p.lat(), p.lon(), level).ok());
                    }
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("Quadkey Decode", level), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(quadkey::decode(key).ok());
                }
            });
        });
    }

    group.finish();
}

fn bench_geodesy(c: &mut Criterion) {
    let mut group = c.benchmark_group("Geodesy");

    let size = 1_000;
    let from = generate_fixed_points(size, 12345);
    let to = generate_fixed_points(size, 67890);
    let from_trig: Vec<GeoPoint> = from.iter().map(|p| p.with_trig()).collect();
    let to_trig: Vec<GeoPoint> = to.iter().map(|p| p.with_trig()).collect();

    group.bench_with_input(
        BenchmarkId::new("Distance", "lazy"),
        &(&from, &to),
        |b, (from, to)| {
            b.iter(|| {
                for (a, z) in from.iter().zip(to.iter()) {
                    black_box(distance(a, z));
                }
            });
        },
    );

    group.bench_with_input(
        BenchmarkId::new("Distance", "cached"),
        &(&from_trig, &to_trig),
        |b, (from, to)| {
            b.iter(|| {
                for (a, z) in from.iter().zip(to.iter()) {
                    black_box(distance(a, z));
                }
            });
        },
    );

    group.bench_with_input(BenchmarkId::new("Ray", size), &from_trig, |b, pivots| {
        b.iter(|| {
            for pivot in pivots {
                let mut ray = GeodesicRay::new(pivot, 1_000.0, 0.0);
                for bearing in [90.0, 180.0, 270.0] {
                    ray.set_bearing(bearing);
                    black_box(ray.destination());
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_codecs, bench_geodesy);
criterion_main!(benches);
