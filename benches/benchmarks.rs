//! Performance benchmarks for sapling

use std::io;
use std::path::Path;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sapling::test_utils::{MockSource, TestDir};
use sapling::{ConsoleFormatter, OutputConfig, TreeWalker, WalkerConfig};
use termcolor::NoColor;

/// Build `width` directories, each with `width` files, plus ignored clutter.
fn create_tree(width: usize) -> TestDir {
    let dir = TestDir::new();
    for d in 0..width {
        for f in 0..width {
            dir.add_file(&format!("dir_{}/file_{}.rs", d, f), "");
        }
        dir.add_file(&format!("dir_{}/node_modules/pkg/index.js", d), "");
    }
    dir.add_file(".git/HEAD", "ref: refs/heads/main");
    dir
}

fn walk_to_sink(walker: &TreeWalker, root: &Path) {
    let mut out = ConsoleFormatter::new(NoColor::new(io::sink()), OutputConfig::plain());
    walker.walk(root, &mut out).unwrap();
}

fn bench_filesystem_walk(c: &mut Criterion) {
    let walker = TreeWalker::new(WalkerConfig::default());
    let mut group = c.benchmark_group("filesystem_walk");

    let small = create_tree(5);
    group.bench_function("small_tree_25_files", |b| {
        b.iter(|| walk_to_sink(&walker, black_box(small.path())))
    });

    let medium = create_tree(20);
    group.bench_function("medium_tree_400_files", |b| {
        b.iter(|| walk_to_sink(&walker, black_box(medium.path())))
    });

    group.finish();
}

fn bench_in_memory_walk(c: &mut Criterion) {
    let names: Vec<String> = (0..200).map(|i| format!("entry_{}", i)).collect();
    let mut children: Vec<(&str, bool)> = names.iter().map(|n| (n.as_str(), false)).collect();
    children.push(("node_modules", true));
    children.push((".git", true));

    let walker = TreeWalker::new(WalkerConfig::default())
        .with_source(MockSource::new().dir("/root", &children));

    c.bench_function("in_memory_walk_200_entries", |b| {
        b.iter(|| {
            let mut out = ConsoleFormatter::new(NoColor::new(io::sink()), OutputConfig::plain());
            walker.walk(black_box(Path::new("/root")), &mut out).unwrap()
        })
    });
}

criterion_group!(benches, bench_filesystem_walk, bench_in_memory_walk);
criterion_main!(benches);
