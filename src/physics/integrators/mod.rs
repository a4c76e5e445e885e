//! Numerical integration methods for n-body simulation

use crate::physics::bodies::BodySet;
use crate::physics::math::{Scalar, Vector};
use std::collections::TryReserveError;

pub mod explicit_euler;
pub mod pefrl;
pub mod registry;
pub mod runge_kutta;
pub mod velocity_verlet;

pub use explicit_euler::ExplicitEuler;
pub use pefrl::Pefrl;
pub use runge_kutta::RungeKuttaFourthOrder;
pub use velocity_verlet::VelocityVerlet;

/// Source of accelerations for a whole system of bodies
///
/// Implementations must be pure with respect to their inputs: two calls with
/// identical positions produce identical output. Multi-stage integrators rely
/// on this to evaluate trial states without disturbing authoritative state.
pub trait AccelerationField: Send + Sync {
    /// Write the net acceleration of every body at `positions` into `out`,
    /// overwriting any previous contents.
    fn accelerations_into(&self, masses: &[Scalar], positions: &[Vector], out: &mut [Vector]);
}

/// Base trait for all integrators
///
/// An integrator advances every body in the set by one time step, invoking
/// the acceleration field one or more times according to its scheme. `step`
/// takes `&mut self` so multi-stage integrators can reuse scratch buffers
/// across the steps of a run.
pub trait Integrator: std::fmt::Debug + Send + Sync {
    /// Advance all bodies by one time step of `dt`
    fn step(&mut self, bodies: &mut BodySet, field: &dyn AccelerationField, dt: Scalar);

    /// Reserve any per-run scratch state for the given body count
    ///
    /// Called by the simulation driver before stepping begins so allocation
    /// failure surfaces as a recoverable error instead of an abort mid-run.
    /// Stateless integrators keep the default no-op.
    fn prepare(&mut self, _body_count: usize) -> Result<(), TryReserveError> {
        Ok(())
    }

    /// Release any per-run scratch state
    fn release(&mut self) {}

    /// Canonical name of this integrator
    fn name(&self) -> &'static str;

    /// Alternative names accepted by the registry
    fn aliases(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Order of convergence of this integrator
    fn convergence_order(&self) -> usize;
}
