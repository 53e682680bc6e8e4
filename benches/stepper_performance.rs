//! Performance benchmarks for the explicit steppers
//!
//! Compares the staggered four-point scheme against the classical
//! three-point scheme on identical pure-diffusion problems, and measures
//! the full carrier-pair update.
//!
//! # What We're Measuring
//!
//! 1. **Classical diffusion** (three-point):
//!    - 1 source + 1 potential evaluation per step
//!    - Three reads per interior node
//!
//! 2. **Staggered flux** (four-point):
//!    - 1 source + 1 mobility + 1 potential evaluation per step
//!    - Five reads per interior node
//!
//! # Expected Results
//!
//! Both schemes scale linearly with node count; the staggered scheme pays
//! roughly one extra flux evaluation and two extra reads per node.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all stepper benchmarks
//! cargo bench --bench stepper_performance
//!
//! # Run only the comparison group
//! cargo bench --bench stepper_performance comparison
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use drift_rs::models::{CarrierPair, PureDiffusion};
use drift_rs::physics::Grid;
use drift_rs::solver::{
    DiffusionStepper, EdgePolicy, Integrator, RunConfiguration, Scenario, StaggeredStepper,
};

// =================================================================================================
// Scenario Builders
// =================================================================================================

/// Pure-diffusion scenario with the requested number of physical intervals
fn diffusion_scenario(intervals: usize, ghost: usize) -> Scenario {
    let dx = 1.0 / intervals as f64;
    let grid = Grid::new(0.0, 1.0, dx, ghost).unwrap();
    Scenario::new(
        Box::new(PureDiffusion::new()),
        grid,
        EdgePolicy::Dirichlet(0.0),
        EdgePolicy::Dirichlet(0.0),
        |_c, x| x * (1.0 - x),
    )
}

/// Two-component carrier scenario away from depletion
fn carrier_scenario(intervals: usize) -> Scenario {
    let dx = 1.0 / intervals as f64;
    let grid = Grid::new(0.0, 1.0, dx, 2).unwrap();
    Scenario::new(
        Box::new(CarrierPair::new(0.1, 0.1)),
        grid,
        EdgePolicy::ZeroFlux,
        EdgePolicy::ZeroFlux,
        |_c, x| 0.1 * (1.0 + 0.1 * (4.0 * std::f64::consts::PI * x).sin()),
    )
}

/// Stable step size for the given interval count (dt/dx^2 = 0.1)
fn stable_dt(intervals: usize) -> f64 {
    let dx = 1.0 / intervals as f64;
    0.1 * dx * dx
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Classical scheme scaling with node count
fn benchmark_classical_stepper(c: &mut Criterion) {
    let mut group = c.benchmark_group("Classical Diffusion Stepper");

    for intervals in [50, 100, 500, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(intervals),
            intervals,
            |b, &intervals| {
                let scenario = diffusion_scenario(intervals, 1);
                let config = RunConfiguration::new(stable_dt(intervals), 100);
                let integrator = Integrator::new(Box::new(DiffusionStepper::new()));

                b.iter(|| {
                    integrator
                        .run(black_box(&scenario), black_box(&config))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Staggered scheme scaling with node count
fn benchmark_staggered_stepper(c: &mut Criterion) {
    let mut group = c.benchmark_group("Staggered Flux Stepper");

    for intervals in [50, 100, 500, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(intervals),
            intervals,
            |b, &intervals| {
                let scenario = diffusion_scenario(intervals, 2);
                let config = RunConfiguration::new(stable_dt(intervals), 100);
                let integrator = Integrator::new(Box::new(StaggeredStepper::new()));

                b.iter(|| {
                    integrator
                        .run(black_box(&scenario), black_box(&config))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Full carrier-pair update (nonlinear fluxes, two components)
fn benchmark_carrier_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("Carrier Pair");

    for intervals in [50, 200].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(intervals),
            intervals,
            |b, &intervals| {
                let scenario = carrier_scenario(intervals);
                let config = RunConfiguration::new(1e-7, 100);
                let integrator = Integrator::new(Box::new(StaggeredStepper::new()));

                b.iter(|| {
                    integrator
                        .run(black_box(&scenario), black_box(&config))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_classical_stepper,
    benchmark_staggered_stepper,
    benchmark_carrier_pair
);
criterion_main!(benches);
