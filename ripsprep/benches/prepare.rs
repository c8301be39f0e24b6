use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ripsprep::{
    enclosing_radius, prepare, read_matrix, CompressedLowerDistanceMatrix, InputFormat,
    ParsedInput, PrepConfig,
};

/// Point counts benchmarked
const SIZES: &[usize] = &[100, 400, 1000];

fn point_cloud_text(seed: u64, n: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut text = String::new();
    for _ in 0..n {
        let (x, y, z): (f32, f32, f32) = (rng.gen(), rng.gen(), rng.gen());
        text.push_str(&format!("{x} {y} {z}\n"));
    }
    text
}

fn lower_matrix_text(seed: u64, n: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut text = String::new();
    for i in 1..n {
        let row: Vec<String> = (0..i)
            .map(|_| rng.gen_range(0.0f32..10.0).to_string())
            .collect();
        text.push_str(&row.join(","));
        text.push('\n');
    }
    text
}

fn bench_parse_lower(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parse lower-triangular");
    let config = PrepConfig::default();

    for &n in SIZES {
        let text = lower_matrix_text(42, n);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("text", n), &text, |bencher, text| {
            bencher.iter(|| read_matrix(black_box(text.as_bytes()), &config))
        });
    }

    group.finish();
}

fn bench_enclosing_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("Enclosing radius");

    for &n in SIZES {
        let mut rng = StdRng::seed_from_u64(7);
        let values = (0..n * (n - 1) / 2).map(|_| rng.gen_range(0.0..10.0)).collect();
        let matrix = CompressedLowerDistanceMatrix::from_distances(values);
        group.bench_with_input(BenchmarkId::new("dense", n), &matrix, |bencher, matrix| {
            bencher.iter(|| enclosing_radius(black_box(matrix)))
        });
    }

    group.finish();
}

fn bench_select_point_cloud(c: &mut Criterion) {
    let mut group = c.benchmark_group("Prepare point cloud");
    let config = PrepConfig::default().with_format(InputFormat::PointCloud);

    for &n in SIZES {
        let text = point_cloud_text(123, n);
        let parsed = read_matrix(text.as_bytes(), &config).unwrap();
        for (label, threshold) in [("unbounded", config.threshold), ("bounded", 0.25)] {
            let config = config.clone().with_threshold(threshold);
            group.bench_with_input(BenchmarkId::new(label, n), &parsed, |bencher, parsed| {
                bencher.iter(|| prepare(black_box(parsed.clone()), &config))
            });
        }
    }

    group.finish();
}

fn bench_point_cloud_to_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("Point cloud to dense");
    let config = PrepConfig::default().with_format(InputFormat::PointCloud);

    for &n in SIZES {
        let text = point_cloud_text(5, n);
        let Ok(ParsedInput::PointCloud(cloud)) = read_matrix(text.as_bytes(), &config) else {
            panic!("point cloud did not parse");
        };
        group.bench_with_input(BenchmarkId::new("from_matrix", n), &cloud, |bencher, cloud| {
            bencher.iter(|| CompressedLowerDistanceMatrix::from_matrix(black_box(cloud)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_lower,
    bench_enclosing_radius,
    bench_select_point_cloud,
    bench_point_cloud_to_dense
);
criterion_main!(benches);
