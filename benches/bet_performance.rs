//! Performance benchmarks for the BET pipeline and Virial inversion
//!
//! # What We're Measuring
//!
//! 1. **BET pipeline** (`area_bet_raw`):
//!    - Region selection is two linear scans
//!    - Regression is a single accumulator pass
//!    - Expect linear scaling with point count
//!
//! 2. **Virial loading inversion**:
//!    - One derivative-free minimization per point
//!    - The dominant cost of model-based loading prediction
//!    - The vector path parallelizes per point
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --bench bet_performance
//!
//! # Run only the pipeline benchmarks
//! cargo bench --bench bet_performance area_bet
//!
//! # Run only the inversion benchmarks
//! cargo bench --bench bet_performance virial
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use sorb_rs::characterization::area_bet_raw;
use sorb_rs::models::{IsothermModel, Virial};

// =================================================================================================
// Synthetic Data
// =================================================================================================

/// Ideal BET isotherm over p/p0 = 0..0.3
fn bet_arrays(n_points: usize) -> (Vec<f64>, Vec<f64>) {
    let n_m = 0.003;
    let c = 100.0;
    let pressure: Vec<f64> = (1..=n_points)
        .map(|i| 0.30 * i as f64 / n_points as f64)
        .collect();
    let loading: Vec<f64> = pressure
        .iter()
        .map(|&p| n_m * c * p / ((1.0 - p) * (1.0 + (c - 1.0) * p)))
        .collect();
    (loading, pressure)
}

// =================================================================================================
// Benchmarks
// =================================================================================================

fn bench_area_bet(c: &mut Criterion) {
    let mut group = c.benchmark_group("area_bet");

    for n_points in [20, 100, 1000] {
        let (loading, pressure) = bet_arrays(n_points);
        group.bench_with_input(
            BenchmarkId::new("automatic_region", n_points),
            &n_points,
            |b, _| {
                b.iter(|| {
                    area_bet_raw(
                        black_box(&loading),
                        black_box(&pressure),
                        black_box(0.162),
                        None,
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

fn bench_virial_inversion(c: &mut Criterion) {
    let model = Virial::new(5.0, 0.05, 0.005, 0.0005);
    let pressures: Vec<f64> = (1..=64)
        .map(|i| model.pressure(0.15 * i as f64).unwrap())
        .collect();

    let mut group = c.benchmark_group("virial_loading");

    group.bench_function("scalar_point", |b| {
        b.iter(|| model.loading(black_box(pressures[32])).unwrap())
    });

    group.bench_function("vector_64_points", |b| {
        b.iter(|| model.loading_many(black_box(&pressures)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_area_bet, bench_virial_inversion);
criterion_main!(benches);
