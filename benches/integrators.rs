//! Integrator benchmarks
//!
//! Measures per-step throughput of each integrator over a small gravitating
//! cluster, plus the cost of one pairwise force evaluation on its own.
//! Accuracy is covered by the integration tests; these benchmarks are about
//! speed.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use orrery::physics::bodies::{Body, BodySet};
use orrery::physics::gravity::NewtonianGravity;
use orrery::physics::integrators::registry::IntegratorRegistry;
use orrery::physics::math::Vector;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

/// Deterministic cluster of gravitating bodies
fn cluster(count: usize) -> BodySet {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let bodies: Vec<Body> = (0..count)
        .map(|_| {
            Body::new(
                rng.random_range(1e23..1e30),
                Vector::new(
                    rng.random_range(-10.0..=10.0),
                    rng.random_range(-10.0..=10.0),
                    rng.random_range(-10.0..=10.0),
                ),
                Vector::new(
                    rng.random_range(-0.01..=0.01),
                    rng.random_range(-0.01..=0.01),
                    rng.random_range(-0.01..=0.01),
                ),
            )
        })
        .collect();
    BodySet::from_bodies(bodies)
}

fn bench_integrator_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrator_step");
    let registry = IntegratorRegistry::new();
    let gravity = NewtonianGravity;

    for body_count in [9, 64] {
        for name in registry.list_available() {
            let mut integrator = registry.create(&name).unwrap();
            let mut bodies = cluster(body_count);
            integrator.prepare(bodies.len()).unwrap();

            group.bench_function(BenchmarkId::new(name.as_str(), body_count), |b| {
                b.iter(|| {
                    integrator.step(&mut bodies, &gravity, black_box(0.01));
                    black_box(bodies.positions());
                });
            });
        }
    }

    group.finish();
}

fn bench_gravity_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gravity_evaluation");
    let gravity = NewtonianGravity;

    for body_count in [9, 64, 256] {
        let mut bodies = cluster(body_count);

        group.bench_function(BenchmarkId::from_parameter(body_count), |b| {
            b.iter(|| {
                bodies.refresh_accelerations(&gravity);
                black_box(bodies.accelerations());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_integrator_step, bench_gravity_evaluation);
criterion_main!(benches);
