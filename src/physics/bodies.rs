//! Body state storage for n-body simulation
//!
//! A [`BodySet`] is the single shared mutable state every integrator call
//! advances in place. The body count is fixed at construction and index
//! identity is stable for the lifetime of the set: "body 2" refers to the
//! same body in every component that mentions it.

use super::integrators::AccelerationField;
use super::math::{Scalar, Vector};

/// Initial conditions for one point mass
///
/// Mass in kg, position in AU, velocity in AU/day — the vectors the
/// ephemeris fetch utility produces for a chosen epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub mass: Scalar,
    pub position: Vector,
    pub velocity: Vector,
}

impl Body {
    pub fn new(mass: Scalar, position: Vector, velocity: Vector) -> Self {
        Self {
            mass,
            position,
            velocity,
        }
    }
}

/// Fixed-size, index-stable collection of bodies stored as parallel columns
///
/// Masses are immutable after construction; positions and velocities are the
/// only state integration mutates. Accelerations are derived: every force
/// evaluation overwrites them wholesale and nothing treats them as
/// authoritative between steps.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySet {
    masses: Vec<Scalar>,
    positions: Vec<Vector>,
    velocities: Vec<Vector>,
    accelerations: Vec<Vector>,
}

impl BodySet {
    pub fn from_bodies(bodies: impl IntoIterator<Item = Body>) -> Self {
        let mut masses = Vec::new();
        let mut positions = Vec::new();
        let mut velocities = Vec::new();

        for body in bodies {
            masses.push(body.mass);
            positions.push(body.position);
            velocities.push(body.velocity);
        }

        let accelerations = vec![Vector::ZERO; masses.len()];
        Self {
            masses,
            positions,
            velocities,
            accelerations,
        }
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn masses(&self) -> &[Scalar] {
        &self.masses
    }

    pub fn positions(&self) -> &[Vector] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vector] {
        &self.velocities
    }

    pub fn accelerations(&self) -> &[Vector] {
        &self.accelerations
    }

    pub fn mass(&self, index: usize) -> Scalar {
        self.masses[index]
    }

    pub fn position(&self, index: usize) -> Vector {
        self.positions[index]
    }

    pub fn velocity(&self, index: usize) -> Vector {
        self.velocities[index]
    }

    /// Recompute every body's acceleration from the current positions
    ///
    /// Overwrites the acceleration column; no contribution survives from
    /// previous calls.
    pub fn refresh_accelerations(&mut self, field: &dyn AccelerationField) {
        field.accelerations_into(&self.masses, &self.positions, &mut self.accelerations);
    }

    /// Advance every position by its velocity over `dt`
    pub fn drift(&mut self, dt: Scalar) {
        for (position, velocity) in self.positions.iter_mut().zip(&self.velocities) {
            *position += *velocity * dt;
        }
    }

    /// Advance every velocity by its acceleration over `dt`
    ///
    /// Uses whatever accelerations the last [`refresh_accelerations`] call
    /// left behind.
    ///
    /// [`refresh_accelerations`]: BodySet::refresh_accelerations
    pub fn kick(&mut self, dt: Scalar) {
        for (velocity, acceleration) in self.velocities.iter_mut().zip(&self.accelerations) {
            *velocity += *acceleration * dt;
        }
    }

    /// Overwrite positions and velocities from full-state slices
    ///
    /// Panics if the slice lengths differ from the body count.
    pub fn set_state(&mut self, positions: &[Vector], velocities: &[Vector]) {
        self.positions.copy_from_slice(positions);
        self.velocities.copy_from_slice(velocities);
    }
}
