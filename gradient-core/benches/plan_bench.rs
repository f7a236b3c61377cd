//! Criterion benchmarks for plan construction.
//!
//! Benchmarks:
//! 1. Entry-point generation for growing ladders
//! 2. Full `build_plan` for each side/placement combination

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gradient_core::{DynamicGradientEntry, PlanRequest, PriceRange, Side, StrategyConfig};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_builder(num_orders: usize) -> DynamicGradientEntry {
    let sizes = vec![1.0 / num_orders as f64; num_orders];
    DynamicGradientEntry::new(StrategyConfig::new(0.5, sizes)).unwrap()
}

fn make_request(side: Side, num_orders: usize, current_price: f64) -> PlanRequest {
    let take_profit_prices = (1..=num_orders)
        .map(|i| match side {
            Side::Buy => 110.0 + i as f64,
            Side::Sell => 90.0 - i as f64,
        })
        .collect();
    PlanRequest {
        side,
        entry_range: PriceRange::new(95.0, 105.0),
        take_profit_prices,
        stop_loss_price: match side {
            Side::Buy => 90.0,
            Side::Sell => 110.0,
        },
        current_price,
        balance: 10_000.0,
        precision: 2,
    }
}

// ── 1. Entry Points ──────────────────────────────────────────────────

fn bench_entry_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry_points");

    for num_orders in [4usize, 16, 64] {
        let builder = make_builder(num_orders);
        group.bench_with_input(
            BenchmarkId::new("generate", num_orders),
            &num_orders,
            |b, _| {
                b.iter(|| builder.generate_entry_points(black_box(PriceRange::new(95.0, 105.0))));
            },
        );
    }

    group.finish();
}

// ── 2. Build Plan ────────────────────────────────────────────────────

fn bench_build_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_plan");
    let builder = make_builder(4);

    let cases = [
        ("buy_below", Side::Buy, 90.0),
        ("buy_above", Side::Buy, 110.0),
        ("sell_below", Side::Sell, 90.0),
        ("sell_above", Side::Sell, 110.0),
    ];
    for (name, side, price) in cases {
        let request = make_request(side, 4, price);
        group.bench_function(name, |b| {
            b.iter(|| builder.build_plan(black_box(&request)));
        });
    }

    let builder_64 = make_builder(64);
    let request_64 = make_request(Side::Buy, 64, 90.0);
    group.bench_function("buy_below_64_orders", |b| {
        b.iter(|| builder_64.build_plan(black_box(&request_64)));
    });

    group.finish();
}

criterion_group!(benches, bench_entry_points, bench_build_plan);
criterion_main!(benches);
