//! Benchmarks for sweep conversion
//!
//! Compares sequential and rayon conversion over growing sweep sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use permea_core::frequency::{Frequency, FrequencyUnit, SweepType};
use permea_core::source::SyntheticFerrite;
use permea_core::{CalculatorConfig, CoreGeometry, MeasurementSource, PermeabilityCalculator};

fn create_calculator() -> PermeabilityCalculator {
    let geometry = CoreGeometry::new(0.005, 0.010, 0.005).unwrap();
    PermeabilityCalculator::new(geometry, CalculatorConfig::with_turns(10)).unwrap()
}

fn bench_compute_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_sweep");
    let calc = create_calculator();
    let ferrite = SyntheticFerrite::default();

    for npoints in [101, 1601, 10_001, 100_001].iter() {
        let freq = Frequency::new(10.0, 100_000.0, *npoints, FrequencyUnit::KHz, SweepType::Log);
        let sweep = ferrite.measure(&freq).unwrap();

        group.bench_with_input(BenchmarkId::new("sequential", npoints), npoints, |b, _| {
            b.iter(|| black_box(calc.compute_sweep(&sweep).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("parallel", npoints), npoints, |b, _| {
            b.iter(|| black_box(calc.compute_sweep_par(&sweep).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_sweep);
criterion_main!(benches);
