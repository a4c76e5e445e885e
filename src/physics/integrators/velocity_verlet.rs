//! Velocity Verlet integration method

use super::{AccelerationField, Integrator};
use crate::physics::bodies::BodySet;
use crate::physics::math::Scalar;

/// Velocity Verlet integrator
///
/// A second-order symplectic integrator with one force evaluation per step,
/// arranged as a drift-kick-drift sequence:
///
/// 1. Drift every position a half step on the current velocity
/// 2. Recompute accelerations at the half-step positions
/// 3. Kick every velocity a full step on the new acceleration
/// 4. Drift every position the remaining half step on the updated velocity
///
/// Energy error stays bounded instead of drifting, which makes this the
/// default recommendation for long-duration orbital runs.
#[derive(Debug, Clone, Default)]
pub struct VelocityVerlet;

impl Integrator for VelocityVerlet {
    fn step(&mut self, bodies: &mut BodySet, field: &dyn AccelerationField, dt: Scalar) {
        bodies.drift(0.5 * dt);
        bodies.refresh_accelerations(field);
        bodies.kick(dt);
        bodies.drift(0.5 * dt);
    }

    fn name(&self) -> &'static str {
        "velocity_verlet"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["verlet"]
    }

    fn convergence_order(&self) -> usize {
        2
    }
}
