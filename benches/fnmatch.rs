// std imports
use std::{alloc::System, hint::black_box};

// third-party imports
use criterion::{Criterion, criterion_group, criterion_main};
use stats_alloc::{INSTRUMENTED_SYSTEM, Region, StatsAlloc};
use wildmatch::WildMatch;

// workspace imports
use fnmatch::{Flags, fnmatch, fnmatch_extended};

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

const SHORT: &str = "_TEST";
const LONG: &str = "_TEST_SOME_VERY_VERY_LONG_NAME";
const PATH: &str = "src/app/formatting/records/tests.rs";

fn benchmark(c: &mut Criterion) {
    let mut c = c.benchmark_group("fnmatch");

    let mut c1 = None;
    let mut n1 = 0;
    c.bench_function("fnmatch-short-match", |b| {
        let reg = Region::new(GLOBAL);
        b.iter(|| {
            assert!(fnmatch(black_box("_*"), black_box(SHORT), Flags::empty()));
            n1 += 1;
        });
        c1 = Some(reg.change());
    });
    println!("allocations at 1 ({:?} iterations): {:#?}", n1, c1);

    c.bench_function("fnmatch-long-match", |b| {
        b.iter(|| {
            assert!(fnmatch(black_box("_*_NAME"), black_box(LONG), Flags::empty()));
        });
    });
    c.bench_function("fnmatch-long-non-match", |b| {
        b.iter(|| {
            assert!(!fnmatch(black_box("*_*_*_X"), black_box(LONG), Flags::empty()));
        });
    });
    c.bench_function("fnmatch-casefold-match", |b| {
        b.iter(|| {
            assert!(fnmatch(black_box("_test_*_[m-n]ame"), black_box(LONG), Flags::CASEFOLD));
        });
    });
    c.bench_function("fnmatch-pathname-recursive-match", |b| {
        b.iter(|| {
            assert!(fnmatch(black_box("src/**/*.rs"), black_box(PATH), Flags::PATHNAME));
        });
    });

    let mut c2 = None;
    let mut n2 = 0;
    c.bench_function("fnmatch-extended-match", |b| {
        let reg = Region::new(GLOBAL);
        b.iter(|| {
            assert!(fnmatch_extended(
                black_box("src/**/{lib,main,tests}.rs"),
                black_box(PATH),
                Flags::PATHNAME
            ));
            n2 += 1;
        });
        c2 = Some(reg.change());
    });
    println!("allocations at 2 ({:?} iterations): {:#?}", n2, c2);

    c.bench_function("wild-short-match", |b| {
        let pattern = WildMatch::new("_*");
        b.iter(|| {
            assert!(pattern.matches(black_box(SHORT)));
        });
    });
    c.bench_function("wild-long-match", |b| {
        let pattern = WildMatch::new("_*_NAME");
        b.iter(|| {
            assert!(pattern.matches(black_box(LONG)));
        });
    });
    c.bench_function("wild-long-non-match", |b| {
        let pattern = WildMatch::new("*_*_*_X");
        b.iter(|| {
            assert!(!pattern.matches(black_box(LONG)));
        });
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
