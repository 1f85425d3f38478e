//! Criterion benchmarks for the aggregation hot paths.
//!
//! Benchmarks:
//! 1. Full report over journals of realistic sizes
//! 2. The single-pass summary reducer alone
//! 3. Equity curve + drawdown scan
//! 4. Grouped per-strategy reports (rayon fan-out)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use edgebook_core::synthetic::synthetic_journal;
use edgebook_stats::{
    batch::reports_by_strategy, equity_curve, AnalyticsConfig, AnalyticsReport, DrawdownStats,
    TradeSummary,
};

fn bench_full_report(c: &mut Criterion) {
    let config = AnalyticsConfig::default();
    let mut group = c.benchmark_group("full_report");
    for size in [100, 1_000, 5_000] {
        let trades = synthetic_journal(size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &trades, |b, trades| {
            b.iter(|| AnalyticsReport::compute(black_box(trades), &config));
        });
    }
    group.finish();
}

fn bench_summary(c: &mut Criterion) {
    let trades = synthetic_journal(1_000, 42);
    c.bench_function("summary_1000", |b| {
        b.iter(|| TradeSummary::compute(black_box(&trades)));
    });
}

fn bench_equity_and_drawdown(c: &mut Criterion) {
    let trades = synthetic_journal(1_000, 42);
    c.bench_function("equity_drawdown_1000", |b| {
        b.iter(|| {
            let curve = equity_curve(black_box(&trades));
            DrawdownStats::compute(&curve)
        });
    });
}

fn bench_grouped_reports(c: &mut Criterion) {
    let config = AnalyticsConfig::default();
    let trades = synthetic_journal(2_000, 42);
    c.bench_function("grouped_by_strategy_2000", |b| {
        b.iter(|| reports_by_strategy(black_box(&trades), &config));
    });
}

criterion_group!(
    benches,
    bench_full_report,
    bench_summary,
    bench_equity_and_drawdown,
    bench_grouped_reports
);
criterion_main!(benches);
