//! Orrery prelude module
//!
//! Re-exports the most commonly used types, traits, and functions to reduce
//! import boilerplate.

pub use crate::config::{BodyConfig, PhysicsConfig, SimulationConfig};
pub use crate::physics::bodies::{Body, BodySet};
pub use crate::physics::gravity::{NewtonianGravity, total_energy};
pub use crate::physics::integrators::registry::IntegratorRegistry;
pub use crate::physics::integrators::{AccelerationField, Integrator};
pub use crate::physics::math::{Scalar, Vector};
pub use crate::simulation::{Simulation, SimulationError};
pub use crate::trajectory::Trajectory;
