//! Measurement Source Tests
//!
//! Runs the synthetic sources through the calculator and checks the
//! recovered spectra against the models that generated them.

use approx::assert_relative_eq;
use num_complex::Complex64;
use permea_core::constants::MU_0;
use permea_core::geometry::PathModel;
use permea_core::source::{example_frequency, KnownPermeability, SyntheticFerrite};
use permea_core::{CalculatorConfig, CoreGeometry, MeasurementSource, PermeabilityCalculator};
use std::f64::consts::PI;

/// 20 mm / 10 mm / 5 mm toroid with ten turns, described by diameters
fn bench_setup() -> (CoreGeometry, CalculatorConfig) {
    let geometry = CoreGeometry::from_diameters(10e-3, 20e-3, 5e-3).unwrap();
    let config = CalculatorConfig {
        turns: 10,
        path_model: PathModel::MeanDiameter,
        ..CalculatorConfig::default()
    };
    (geometry, config)
}

#[test]
fn test_synthetic_ferrite_spectrum() {
    let (geometry, config) = bench_setup();
    let calc = PermeabilityCalculator::new(geometry, config).unwrap();
    let ferrite = SyntheticFerrite::default();
    let freq = example_frequency();

    let sweep = ferrite.measure(&freq).unwrap();
    let mu = calc.compute_sweep(&sweep).unwrap();

    assert_eq!(mu.len(), freq.npoints());
    assert!(!mu.has_warnings());

    // μ' = L(f)·ℓ / (μ0·N²·A)
    let path = PI * 15e-3;
    let area = 5e-3 * 5e-3;
    let mu_real = mu.mu_real();
    for (i, &f) in freq.f().iter().enumerate() {
        let expected = ferrite.inductance(f) * path / (MU_0 * 100.0 * area);
        assert_relative_eq!(mu_real[i], expected, max_relative = 1e-10);
    }

    // constant loss ratio shows up as constant loss tangent
    for tan_d in mu.loss_tangent().iter() {
        assert_relative_eq!(*tan_d, 0.1, max_relative = 1e-10);
    }

    // μ' falls monotonically through the relaxation
    assert!(mu_real.windows(2).into_iter().all(|w| w[1] < w[0]));
}

#[test]
fn test_known_permeability_recovered_across_sweep() {
    let (geometry, config) = bench_setup();
    let source = KnownPermeability::new(&geometry, &config, |f| {
        // Debye-like relaxation at 5 MHz
        let mu_static = 2300.0;
        Complex64::new(mu_static, 0.0) / Complex64::new(1.0, f / 5e6)
    })
    .unwrap();
    let calc = PermeabilityCalculator::new(geometry, config).unwrap();

    let freq = example_frequency();
    let mu = calc.compute_sweep(&source.measure(&freq).unwrap()).unwrap();

    for p in mu.iter() {
        let target = source.mu(p.frequency);
        assert_relative_eq!(p.mu.re, target.re, max_relative = 1e-9);
        assert_relative_eq!(p.mu.im, target.im, max_relative = 1e-9);
        assert!(p.mu_loss() > 0.0);
    }
}

#[test]
fn test_known_permeability_constant() {
    let geometry = CoreGeometry::new(0.01, 0.02, 0.005).unwrap();
    let config = CalculatorConfig::default();
    let mu_known = Complex64::new(100.0, -5.0);
    let source = KnownPermeability::constant(&geometry, &config, mu_known).unwrap();
    let calc = PermeabilityCalculator::new(geometry, config).unwrap();

    let mu = calc
        .compute_sweep_par(&source.measure(&example_frequency()).unwrap())
        .unwrap();
    for p in mu.iter() {
        assert!((p.mu - mu_known).norm() / mu_known.norm() < 1e-9);
    }
    assert_eq!(source.name(), "known permeability");
}

#[test]
fn test_sources_are_object_safe() {
    let (geometry, config) = bench_setup();
    let sources: Vec<Box<dyn MeasurementSource>> = vec![
        Box::new(SyntheticFerrite::default()),
        Box::new(
            KnownPermeability::constant(&geometry, &config, Complex64::new(50.0, -1.0)).unwrap(),
        ),
    ];

    let freq = example_frequency();
    for source in &sources {
        let sweep = source.measure(&freq).unwrap();
        assert_eq!(sweep.len(), freq.npoints(), "{}", source.name());
    }
}
