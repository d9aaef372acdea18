//! Performance benchmarks for grove

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use grove::test_utils::TestTree;
use grove::{Entry, ScanConfig, Scanner, SortMode, sort_entries};

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    // depth 3, width 4: 340 files and 84 directories
    let tree = TestTree::wide(3, 4);

    for jobs in [1, 4, 0] {
        let scanner = Scanner::new(ScanConfig {
            jobs,
            ..Default::default()
        });
        group.bench_with_input(BenchmarkId::new("recursive", jobs), &scanner, |b, scanner| {
            b.iter(|| scanner.scan(black_box(tree.path()), true).unwrap())
        });
    }

    let scanner = Scanner::new(ScanConfig::default());
    group.bench_function("direct_children", |b| {
        b.iter(|| scanner.scan(black_box(tree.path()), false).unwrap())
    });

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let tree = TestTree::wide(3, 4);
    let entries: Vec<Entry> = Scanner::new(ScanConfig::default())
        .scan(tree.path(), true)
        .unwrap();

    let mut group = c.benchmark_group("sort");
    for mode in [
        SortMode::Name,
        SortMode::Size,
        SortMode::Modified,
        SortMode::Permissions,
    ] {
        group.bench_function(mode.label(), |b| {
            b.iter(|| {
                let mut list = entries.clone();
                sort_entries(black_box(&mut list), mode);
                list
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan, bench_sort);
criterion_main!(benches);
