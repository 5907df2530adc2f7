// ============================================================================
// Metrics Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Single Metrics - Individual formula evaluation cost
// 2. Full Report - All ten metrics computed for one producer
// 3. Validation - Overhead of the positivity guard

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use petro_metrics::prelude::*;
use rust_decimal_macros::dec;

// ============================================================================
// Single Metric Benchmarks
// ============================================================================

fn benchmark_single_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_metrics");

    group.bench_function("finding_development_cost", |b| {
        b.iter(|| {
            black_box(finding_development_cost(
                black_box(dec!(50000000)),
                black_box(dec!(150000000)),
                black_box(dec!(10000000)),
            ))
        });
    });

    group.bench_function("netback", |b| {
        b.iter(|| {
            black_box(netback(
                black_box(dec!(70.00)),
                black_box(dec!(10.00)),
                black_box(dec!(5.00)),
                black_box(dec!(15.00)),
            ))
        });
    });

    group.bench_function("recycle_ratio", |b| {
        b.iter(|| black_box(recycle_ratio(black_box(dec!(40.00)), black_box(dec!(20.00)))));
    });

    group.finish();
}

// ============================================================================
// Full Report Benchmark
// All ten metrics for one producer's annual numbers
// ============================================================================

fn benchmark_full_report(c: &mut Criterion) {
    c.bench_function("full_report", |b| {
        b.iter(|| {
            let fd = finding_development_cost(dec!(50000000), dec!(150000000), dec!(10000000))
                .unwrap();
            let rrr = reserve_replacement_ratio(dec!(12000000), dec!(10000000)).unwrap();
            let rli = reserve_life_index(dec!(100000000), dec!(10000000)).unwrap();
            let rps = reserves_per_share(dec!(100000000), dec!(500000000)).unwrap();
            let lift = lifting_cost(dec!(50000000), dec!(10000000)).unwrap();
            let be = breakeven_price(dec!(500000000), dec!(10000000)).unwrap();
            let nb = netback(dec!(70.00), dec!(10.00), dec!(5.00), dec!(15.00)).unwrap();
            let margin = operating_netback_margin(nb, dec!(70.00)).unwrap();
            let ce = capital_efficiency(dec!(10000), dec!(500000000)).unwrap();
            let recycle = recycle_ratio(nb, fd).unwrap();
            black_box((fd, rrr, rli, rps, lift, be, nb, margin, ce, recycle))
        });
    });
}

// ============================================================================
// Validation Overhead
// ============================================================================

fn benchmark_validation(c: &mut Criterion) {
    c.bench_function("validate_positive", |b| {
        b.iter(|| black_box(validate_positive(black_box(dec!(10000000)), "production")));
    });
}

criterion_group!(
    benches,
    benchmark_single_metrics,
    benchmark_full_report,
    benchmark_validation
);
criterion_main!(benches);
