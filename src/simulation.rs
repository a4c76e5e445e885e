//! Simulation driver
//!
//! Owns the body set, the gravity evaluator, the per-run integrator, and the
//! per-run trajectory. Single-threaded and synchronous: a run executes every
//! requested step before returning, and `&mut self` rules out a second run
//! touching the same state concurrently.

use crate::config::SimulationConfig;
use crate::physics::bodies::{Body, BodySet};
use crate::physics::gravity::NewtonianGravity;
use crate::physics::integrators::Integrator;
use crate::physics::integrators::registry::IntegratorRegistry;
use crate::physics::math::Scalar;
use crate::trajectory::Trajectory;
use log::info;
use std::collections::TryReserveError;
use std::fmt;

/// Errors reported by [`Simulation::run`]
#[derive(Debug)]
pub enum SimulationError {
    /// The requested method does not name a registered integrator
    UnknownIntegrator(String),
    /// Trajectory or integrator scratch memory could not be reserved
    Allocation(TryReserveError),
    /// A previous run's trajectory is still held; call [`Simulation::reset`]
    /// before starting another run
    RunAlreadyRecorded,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::UnknownIntegrator(msg) => write!(f, "{msg}"),
            SimulationError::Allocation(err) => {
                write!(f, "failed to allocate simulation buffers: {err}")
            }
            SimulationError::RunAlreadyRecorded => {
                write!(f, "a recorded run is still held; reset the simulation first")
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Allocation(err) => Some(err),
            _ => None,
        }
    }
}

/// Simulation driver: selects an integrator, runs it for a requested number
/// of steps, and records the trajectory
///
/// The body set is the only state integration mutates; the trajectory and
/// any integrator scratch live exactly as long as the run they belong to.
pub struct Simulation {
    bodies: BodySet,
    gravity: NewtonianGravity,
    registry: IntegratorRegistry,
    integrator: Option<Box<dyn Integrator>>,
    trajectory: Option<Trajectory>,
}

impl Simulation {
    pub fn new(bodies: impl IntoIterator<Item = Body>) -> Self {
        Self {
            bodies: BodySet::from_bodies(bodies),
            gravity: NewtonianGravity,
            registry: IntegratorRegistry::new(),
            integrator: None,
            trajectory: None,
        }
    }

    /// Build a simulation from a configuration's body list
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.bodies.iter().map(|body| body.to_body()))
    }

    /// Current state of every body
    pub fn bodies(&self) -> &BodySet {
        &self.bodies
    }

    /// The trajectory recorded by the last completed run, if any
    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref()
    }

    /// Run `total_steps` integration steps of `dt` days with the named
    /// method, recording every body's position at every step
    ///
    /// Records the initial positions as snapshot 0 before any stepping, so
    /// the returned trajectory holds `total_steps + 1` snapshots. Fails
    /// before mutating anything if the method is unknown, if buffers cannot
    /// be allocated, or if a previous run has not been [`reset`].
    ///
    /// [`reset`]: Simulation::reset
    pub fn run(
        &mut self,
        method: &str,
        total_steps: usize,
        dt: Scalar,
    ) -> Result<&Trajectory, SimulationError> {
        if self.trajectory.is_some() {
            return Err(SimulationError::RunAlreadyRecorded);
        }

        let mut integrator = self
            .registry
            .create(method)
            .map_err(SimulationError::UnknownIntegrator)?;
        integrator
            .prepare(self.bodies.len())
            .map_err(SimulationError::Allocation)?;

        let mut trajectory = match Trajectory::with_capacity(total_steps, self.bodies.len()) {
            Ok(trajectory) => trajectory,
            Err(err) => {
                // Nothing allocated this call may outlive the failure.
                integrator.release();
                return Err(SimulationError::Allocation(err));
            }
        };

        trajectory.record(&self.bodies);
        for _ in 0..total_steps {
            integrator.step(&mut self.bodies, &self.gravity, dt);
            trajectory.record(&self.bodies);
        }

        info!(
            "completed {total_steps} steps of {dt} d using {}",
            integrator.name()
        );

        self.integrator = Some(integrator);
        Ok(&*self.trajectory.insert(trajectory))
    }

    /// Tear down the last run: release integrator scratch and drop the
    /// trajectory so a fresh run can start
    pub fn reset(&mut self) {
        if let Some(mut integrator) = self.integrator.take() {
            integrator.release();
        }
        self.trajectory = None;
    }
}
