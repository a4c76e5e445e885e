//! Explicit Euler integration method
//!
//! Provided as the cheapest scheme and as a baseline for comparing the
//! others. Expect visible drift on anything but short runs.

use super::{AccelerationField, Integrator};
use crate::physics::bodies::BodySet;
use crate::physics::math::Scalar;

/// Explicit Euler integrator
///
/// One force evaluation per step. Velocity is advanced first with the
/// current acceleration, then position is advanced with the freshly
/// updated velocity:
///
/// ```text
/// v(t+dt) = v(t) + a(t) * dt
/// x(t+dt) = x(t) + v(t+dt) * dt
/// ```
///
/// First-order accurate. Over long integrations its trajectory error
/// dominates every other method offered here; use Velocity Verlet or PEFRL
/// for orbital runs of any real length.
#[derive(Debug, Clone, Default)]
pub struct ExplicitEuler;

impl Integrator for ExplicitEuler {
    fn step(&mut self, bodies: &mut BodySet, field: &dyn AccelerationField, dt: Scalar) {
        bodies.refresh_accelerations(field);
        bodies.kick(dt);
        bodies.drift(dt);
    }

    fn name(&self) -> &'static str {
        "explicit_euler"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["euler"]
    }

    fn convergence_order(&self) -> usize {
        1
    }
}
