//! Classical fourth-order Runge-Kutta integration

use super::{AccelerationField, Integrator};
use crate::physics::bodies::BodySet;
use crate::physics::math::{Scalar, Vector};
use std::collections::TryReserveError;

/// Full position/velocity snapshot of every body
///
/// Used both as a stage sample point and as a stage derivative; for a
/// derivative, `positions` holds dx/dt (the sampled velocities) and
/// `velocities` holds dv/dt (the evaluated accelerations).
#[derive(Debug, Clone)]
struct StageState {
    positions: Vec<Vector>,
    velocities: Vec<Vector>,
}

impl StageState {
    fn zeroed(body_count: usize) -> Self {
        Self {
            positions: vec![Vector::ZERO; body_count],
            velocities: vec![Vector::ZERO; body_count],
        }
    }

    fn try_zeroed(body_count: usize) -> Result<Self, TryReserveError> {
        let mut positions = Vec::new();
        positions.try_reserve_exact(body_count)?;
        positions.resize(body_count, Vector::ZERO);

        let mut velocities = Vec::new();
        velocities.try_reserve_exact(body_count)?;
        velocities.resize(body_count, Vector::ZERO);

        Ok(Self {
            positions,
            velocities,
        })
    }
}

/// Scratch buffers for the four Runge-Kutta stages
///
/// Four sample snapshots, four derivative snapshots, and one combined
/// output. Sized once from the fixed body count, reused across every step
/// of a run, never resized.
#[derive(Debug, Clone)]
struct StageBuffers {
    samples: [StageState; 4],
    derivatives: [StageState; 4],
    combined: StageState,
}

impl StageBuffers {
    fn new(body_count: usize) -> Self {
        Self {
            samples: [
                StageState::zeroed(body_count),
                StageState::zeroed(body_count),
                StageState::zeroed(body_count),
                StageState::zeroed(body_count),
            ],
            derivatives: [
                StageState::zeroed(body_count),
                StageState::zeroed(body_count),
                StageState::zeroed(body_count),
                StageState::zeroed(body_count),
            ],
            combined: StageState::zeroed(body_count),
        }
    }

    fn try_new(body_count: usize) -> Result<Self, TryReserveError> {
        Ok(Self {
            samples: [
                StageState::try_zeroed(body_count)?,
                StageState::try_zeroed(body_count)?,
                StageState::try_zeroed(body_count)?,
                StageState::try_zeroed(body_count)?,
            ],
            derivatives: [
                StageState::try_zeroed(body_count)?,
                StageState::try_zeroed(body_count)?,
                StageState::try_zeroed(body_count)?,
                StageState::try_zeroed(body_count)?,
            ],
            combined: StageState::try_zeroed(body_count)?,
        })
    }

    fn body_count(&self) -> usize {
        self.combined.positions.len()
    }
}

/// Derivative of a full state snapshot: dx/dt is the sampled velocity,
/// dv/dt is the acceleration field at the sampled positions. Pure — the
/// authoritative body set is never touched by stage evaluation.
fn derivative(
    field: &dyn AccelerationField,
    masses: &[Scalar],
    sample: &StageState,
    out: &mut StageState,
) {
    out.positions.copy_from_slice(&sample.velocities);
    field.accelerations_into(masses, &sample.positions, &mut out.velocities);
}

/// `out = base + derivative * scale`, component-wise over every body
fn write_offset(base: &StageState, derivative: &StageState, scale: Scalar, out: &mut StageState) {
    for i in 0..base.positions.len() {
        out.positions[i] = base.positions[i] + derivative.positions[i] * scale;
        out.velocities[i] = base.velocities[i] + derivative.velocities[i] * scale;
    }
}

/// Fourth-order Runge-Kutta integrator (RK4)
///
/// The classic four-stage scheme:
///
/// 1. k₁ = f(y)
/// 2. k₂ = f(y + k₁·dt/2)
/// 3. k₃ = f(y + k₂·dt/2)
/// 4. k₄ = f(y + k₃·dt)
/// 5. y(t+dt) = y + dt/6 · (k₁ + 2k₂ + 2k₃ + k₄)
///
/// where y is the full (position, velocity) state of every body at once.
/// Highest per-step accuracy of the methods offered, but not symplectic:
/// prefer it when trajectory smoothness over shorter windows matters more
/// than long-term energy conservation.
///
/// Stage scratch is allocated lazily on the first step (or fallibly through
/// [`Integrator::prepare`]) and reused for the rest of the run.
#[derive(Debug, Clone, Default)]
pub struct RungeKuttaFourthOrder {
    scratch: Option<StageBuffers>,
}

impl Integrator for RungeKuttaFourthOrder {
    fn step(&mut self, bodies: &mut BodySet, field: &dyn AccelerationField, dt: Scalar) {
        let body_count = bodies.len();
        // Lazy path for direct use; the driver preallocates fallibly
        // through prepare() instead.
        let scratch = self
            .scratch
            .get_or_insert_with(|| StageBuffers::new(body_count));
        debug_assert_eq!(scratch.body_count(), body_count);

        let [y1, y2, y3, y4] = &mut scratch.samples;
        let [k1, k2, k3, k4] = &mut scratch.derivatives;
        let combined = &mut scratch.combined;

        // Stage 1 samples the current state directly.
        y1.positions.copy_from_slice(bodies.positions());
        y1.velocities.copy_from_slice(bodies.velocities());
        derivative(field, bodies.masses(), y1, k1);

        // Stages 2 and 3 sample the midpoint, stage 4 the endpoint.
        write_offset(y1, k1, 0.5 * dt, y2);
        derivative(field, bodies.masses(), y2, k2);

        write_offset(y1, k2, 0.5 * dt, y3);
        derivative(field, bodies.masses(), y3, k3);

        write_offset(y1, k3, dt, y4);
        derivative(field, bodies.masses(), y4, k4);

        // Weighted combination becomes the authoritative next state.
        let weight = dt / 6.0;
        for i in 0..body_count {
            combined.positions[i] = y1.positions[i]
                + (k1.positions[i]
                    + k2.positions[i] * 2.0
                    + k3.positions[i] * 2.0
                    + k4.positions[i])
                    * weight;
            combined.velocities[i] = y1.velocities[i]
                + (k1.velocities[i]
                    + k2.velocities[i] * 2.0
                    + k3.velocities[i] * 2.0
                    + k4.velocities[i])
                    * weight;
        }

        bodies.set_state(&combined.positions, &combined.velocities);
    }

    fn prepare(&mut self, body_count: usize) -> Result<(), TryReserveError> {
        match &self.scratch {
            Some(buffers) if buffers.body_count() == body_count => Ok(()),
            _ => {
                self.scratch = Some(StageBuffers::try_new(body_count)?);
                Ok(())
            }
        }
    }

    fn release(&mut self) {
        self.scratch = None;
    }

    fn name(&self) -> &'static str {
        "runge_kutta_fourth_order"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["rk4"]
    }

    fn convergence_order(&self) -> usize {
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::bodies::Body;

    struct ConstantField(Vector);

    impl AccelerationField for ConstantField {
        fn accelerations_into(&self, _masses: &[Scalar], _positions: &[Vector], out: &mut [Vector]) {
            out.fill(self.0);
        }
    }

    struct SpringField {
        k: Scalar,
    }

    impl AccelerationField for SpringField {
        fn accelerations_into(&self, _masses: &[Scalar], positions: &[Vector], out: &mut [Vector]) {
            for (out, position) in out.iter_mut().zip(positions) {
                *out = *position * -self.k;
            }
        }
    }

    #[test]
    fn test_rk4_constant_acceleration_is_exact() {
        let mut integrator = RungeKuttaFourthOrder::default();
        let acceleration = Vector::new(0.0, 0.0, -9.81);
        let field = ConstantField(acceleration);

        let initial_position = Vector::new(1.0, 0.0, 0.0);
        let initial_velocity = Vector::new(0.0, 1.0, 0.0);
        let mut bodies = BodySet::from_bodies([Body::new(1.0, initial_position, initial_velocity)]);
        let dt = 0.01;

        integrator.step(&mut bodies, &field, dt);

        // RK4 reproduces quadratic kinematics exactly:
        // x + v·dt + a·dt²/2 and v + a·dt.
        let expected_position =
            initial_position + initial_velocity * dt + acceleration * (0.5 * dt * dt);
        let expected_velocity = initial_velocity + acceleration * dt;
        assert!((bodies.position(0) - expected_position).length() < 1e-15);
        assert!((bodies.velocity(0) - expected_velocity).length() < 1e-15);
    }

    #[test]
    fn test_rk4_stage_evaluation_is_pure() {
        // A single step must not leave trial-state residue: stepping the
        // same initial state twice gives identical results.
        let field = SpringField { k: 1.0 };
        let initial = BodySet::from_bodies([
            Body::new(1.0, Vector::new(1.0, 0.0, 0.0), Vector::new(0.0, 0.5, 0.0)),
            Body::new(1.0, Vector::new(-1.0, 0.0, 0.0), Vector::new(0.0, -0.5, 0.0)),
        ]);

        let mut first = initial.clone();
        let mut second = initial.clone();
        let mut integrator = RungeKuttaFourthOrder::default();
        integrator.step(&mut first, &field, 0.1);
        integrator.step(&mut second, &field, 0.1);

        assert_eq!(first.positions(), second.positions());
        assert_eq!(first.velocities(), second.velocities());
    }

    #[test]
    fn test_rk4_scratch_lifecycle() {
        let field = SpringField { k: 1.0 };
        let mut bodies = BodySet::from_bodies([Body::new(
            1.0,
            Vector::new(1.0, 0.0, 0.0),
            Vector::ZERO,
        )]);

        let mut integrator = RungeKuttaFourthOrder::default();
        integrator.prepare(bodies.len()).unwrap();
        integrator.step(&mut bodies, &field, 0.01);

        // Release and keep stepping: scratch reallocates lazily.
        integrator.release();
        integrator.step(&mut bodies, &field, 0.01);
        assert!(bodies.position(0).x < 1.0);
    }

    #[test]
    fn test_properties() {
        let integrator = RungeKuttaFourthOrder::default();
        assert_eq!(integrator.name(), "runge_kutta_fourth_order");
        assert_eq!(integrator.aliases(), vec!["rk4"]);
        assert_eq!(integrator.convergence_order(), 4);
    }
}
