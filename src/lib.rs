//! Orrery library
//!
//! Classical N-body gravitational integrator: pairwise Newtonian gravity,
//! four selectable stepping schemes (explicit Euler, velocity Verlet,
//! classical RK4, PEFRL), and trajectory recording across a run.

pub mod config;
pub mod physics;
pub mod prelude;
pub mod simulation;
pub mod trajectory;

// Re-export commonly used items
pub use config::SimulationConfig;
pub use physics::{
    bodies::{Body, BodySet},
    gravity::NewtonianGravity,
    integrators,
    math::{Scalar, Vector},
};
pub use simulation::{Simulation, SimulationError};
pub use trajectory::Trajectory;
