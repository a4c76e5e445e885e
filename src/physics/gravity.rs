//! Pairwise Newtonian gravity
//!
//! Direct summation over all unordered pairs. The design assumes a small,
//! fixed body count where O(N²) evaluation is acceptable.

use super::bodies::BodySet;
use super::integrators::AccelerationField;
use super::math::{self, Scalar, Vector};

/// Direct-summation gravitational acceleration evaluator
///
/// Positions come in as AU and masses as kg; output accelerations are
/// AU/day². Every call recomputes from scratch: the output is zeroed first,
/// then each unordered pair (i, j) contributes once. Both bodies of a pair
/// receive mass-scaled accelerations derived from a single displacement
/// vector, so their contributions are equal and opposite by construction
/// rather than two independently rounded results.
///
/// Coincident bodies are a caller precondition violation: the division by
/// zero is not guarded, and the resulting non-finite accelerations propagate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonianGravity;

impl AccelerationField for NewtonianGravity {
    fn accelerations_into(&self, masses: &[Scalar], positions: &[Vector], out: &mut [Vector]) {
        out.fill(Vector::ZERO);

        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let displacement = (positions[j] - positions[i]) * math::METERS_PER_AU;
                let r_squared = displacement.length_squared();
                let r = r_squared.sqrt();

                // G / r³ in acceleration units; the extra power of r
                // normalizes the displacement direction.
                let magnitude = math::ACCEL_SI_TO_AU_DAY * math::G / (r_squared * r);

                out[i] += displacement * (magnitude * masses[j]);
                out[j] -= displacement * (magnitude * masses[i]);
            }
        }
    }
}

/// Total mechanical energy of the set, in joules
///
/// Kinetic terms convert velocities from AU/day to m/s; potential terms sum
/// −G·mᵢ·mⱼ/r over unordered pairs with separations in meters. Used by the
/// energy-conservation tests to compare integrators.
pub fn total_energy(bodies: &BodySet) -> Scalar {
    let au_per_day_to_ms = math::METERS_PER_AU / math::SECONDS_PER_DAY;
    let masses = bodies.masses();
    let positions = bodies.positions();
    let velocities = bodies.velocities();

    let mut energy = 0.0;
    for i in 0..bodies.len() {
        let speed = velocities[i].length() * au_per_day_to_ms;
        energy += 0.5 * masses[i] * speed * speed;

        for j in (i + 1)..bodies.len() {
            let r = (positions[j] - positions[i]).length() * math::METERS_PER_AU;
            energy -= math::G * masses[i] * masses[j] / r;
        }
    }
    energy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::bodies::Body;
    use rand::Rng;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    const SOLAR_MASS: Scalar = 1.989e30;

    fn random_set(count: usize, seed: u64) -> BodySet {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let bodies = (0..count).map(|_| {
            Body::new(
                rng.random_range(1e23..1e30),
                Vector::new(
                    rng.random_range(-10.0..=10.0),
                    rng.random_range(-10.0..=10.0),
                    rng.random_range(-10.0..=10.0),
                ),
                Vector::ZERO,
            )
        });
        BodySet::from_bodies(bodies.collect::<Vec<_>>())
    }

    #[test]
    fn test_pairwise_newton_third_law() {
        let gravity = NewtonianGravity;
        let masses = [SOLAR_MASS, 5.972e24];
        let positions = [Vector::ZERO, Vector::new(1.0, 0.3, -0.2)];
        let mut accelerations = [Vector::ZERO; 2];

        gravity.accelerations_into(&masses, &positions, &mut accelerations);

        // m₀·a₀ + m₁·a₁ = 0 along the pair's contribution
        let residual = accelerations[0] * masses[0] + accelerations[1] * masses[1];
        let scale = (accelerations[0] * masses[0]).length();
        assert!(
            residual.length() < scale * 1e-12,
            "momentum rate residual too large: {residual:?}"
        );

        // The lighter body accelerates harder, in the opposite direction
        assert!(accelerations[1].length() > accelerations[0].length());
        assert!(accelerations[0].dot(positions[1] - positions[0]) > 0.0);
        assert!(accelerations[1].dot(positions[1] - positions[0]) < 0.0);
    }

    #[test]
    fn test_many_body_momentum_balance() {
        let gravity = NewtonianGravity;
        let mut bodies = random_set(8, 42);
        bodies.refresh_accelerations(&gravity);

        let total: Vector = bodies
            .masses()
            .iter()
            .zip(bodies.accelerations())
            .map(|(mass, acceleration)| *acceleration * *mass)
            .sum();

        let scale: Scalar = bodies
            .masses()
            .iter()
            .zip(bodies.accelerations())
            .map(|(mass, acceleration)| (*acceleration * *mass).length())
            .sum();

        assert!(
            total.length() < scale * 1e-12,
            "net momentum rate should cancel, got {total:?}"
        );
    }

    #[test]
    fn test_acceleration_magnitude_matches_force_law() {
        // Test particle 1 AU from a solar mass: a = G·M/r² converted to
        // AU/day², about 2.96e-4.
        let gravity = NewtonianGravity;
        let masses = [SOLAR_MASS, 1.0];
        let positions = [Vector::ZERO, Vector::new(1.0, 0.0, 0.0)];
        let mut accelerations = [Vector::ZERO; 2];

        gravity.accelerations_into(&masses, &positions, &mut accelerations);

        let expected = math::ACCEL_SI_TO_AU_DAY * math::G * SOLAR_MASS
            / (math::METERS_PER_AU * math::METERS_PER_AU);
        let actual = accelerations[1].length();
        assert!(
            (actual - expected).abs() < expected * 1e-12,
            "expected {expected}, got {actual}"
        );
        assert!((expected - 2.96e-4).abs() < 1e-6);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let gravity = NewtonianGravity;
        let mut bodies = random_set(6, 7);

        bodies.refresh_accelerations(&gravity);
        let first = bodies.accelerations().to_vec();

        bodies.refresh_accelerations(&gravity);
        assert_eq!(
            bodies.accelerations(),
            &first[..],
            "same positions must give bitwise-identical accelerations"
        );
    }

    #[test]
    fn test_no_accumulation_across_calls() {
        let gravity = NewtonianGravity;
        let masses = [1e30, 1e30];
        let positions = [Vector::ZERO, Vector::new(2.0, 0.0, 0.0)];

        // Poison the output buffer; the evaluator must zero it first.
        let mut out = [Vector::splat(1e12); 2];
        let mut fresh = [Vector::ZERO; 2];
        gravity.accelerations_into(&masses, &positions, &mut out);
        gravity.accelerations_into(&masses, &positions, &mut fresh);

        assert_eq!(out, fresh);
    }

    #[test]
    fn test_bound_system_has_negative_energy() {
        let bodies = BodySet::from_bodies([
            Body::new(SOLAR_MASS, Vector::ZERO, Vector::ZERO),
            Body::new(5.972e24, Vector::new(1.0, 0.0, 0.0), Vector::new(0.0, 0.01, 0.0)),
        ]);

        assert!(total_energy(&bodies) < 0.0);
    }
}
