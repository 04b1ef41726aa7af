// benches/lookup_bench.rs
//
// Lookup throughput against the bundled indices:
//   • get_language               (lowercase + one map probe)
//   • get_language_by_file_name  (basename scan, filename probe, extension probe)
//   • index build                (full rebuild from the bundled snapshot)
//
// Run with `cargo bench --bench lookup`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use langmap::{build_indices, bundled, bundled_dataset};

// ---------------------------------------------------------------------------
// Path corpus – one of each resolution outcome
// ---------------------------------------------------------------------------
const PATHS: &[(&str, &str)] = &[
    ("exact", "docker/Dockerfile"),
    ("single", "assets/css/style.css"),
    ("ambiguous", "src/lib.rs"),
    ("windows", r"C:\Users\dev\project\include\header.h"),
    ("dotfile", "repo/.gitignore"),
    ("miss", "build/output/random_file_no_ext"),
];

const NAMES: &[&str] = &["Rust", "javascript", "JSON WITH COMMENTS", "nope", ""];

fn bench_file_lookup(c: &mut Criterion) {
    let resolver = bundled();
    let mut group = c.benchmark_group("get_language_by_file_name");

    for &(label, path) in PATHS {
        group.bench_with_input(BenchmarkId::new("unfiltered", label), path, |b, path| {
            b.iter(|| black_box(resolver.get_language_by_file_name(black_box(path), None)))
        });
        group.bench_with_input(BenchmarkId::new("programming", label), path, |b, path| {
            b.iter(|| {
                black_box(resolver.get_language_by_file_name(black_box(path), Some("programming")))
            })
        });
    }
    group.finish();
}

fn bench_name_lookup(c: &mut Criterion) {
    let resolver = bundled();
    c.bench_function("get_language/mixed", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(resolver.get_language(black_box(name)));
            }
        })
    });
}

fn bench_build(c: &mut Criterion) {
    let dataset = bundled_dataset();
    c.bench_function("build_indices/bundled", |b| {
        b.iter(|| black_box(build_indices(black_box(&dataset))))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(1))
        .warm_up_time(std::time::Duration::from_secs(1))
        .sample_size(200)
        .noise_threshold(0.02);
    targets = bench_file_lookup, bench_name_lookup, bench_build
);
criterion_main!(benches);
