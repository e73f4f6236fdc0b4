//! Benchmarks for the large-file scan
//!
//! Measures walking and ranking a synthetic source tree of a few thousand
//! files spread across nested component directories.

use std::fs;
use std::path::Path;

use bundlescope::scan::{find_large_files, ScanConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tempfile::TempDir;

/// Create `total_files` source files under `components/` and `app/`
fn create_tree(root: &Path, total_files: usize) {
    for i in 0..total_files {
        let dir = if i % 2 == 0 { "components" } else { "app" };
        let dir = root.join(dir).join(format!("group-{}", i % 25));
        fs::create_dir_all(&dir).unwrap();

        let ext = ["ts", "tsx", "js", "md"][i % 4];
        let body = "export const value = 1;\n".repeat(i % 300 + 1);
        fs::write(dir.join(format!("file-{i}.{ext}")), body).unwrap();
    }
}

fn bench_find_large_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_large_files");

    for size in [100, 1000, 4000] {
        let dir = TempDir::new().unwrap();
        create_tree(dir.path(), size);
        let config = ScanConfig::default();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(find_large_files(dir.path(), &config)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_large_files);
criterion_main!(benches);
