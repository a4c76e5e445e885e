//! Recorded position history of a simulation run

use crate::physics::bodies::BodySet;
use crate::physics::math::Vector;
use std::collections::TryReserveError;

/// Flat per-step, per-body position history
///
/// Slot `step * body_count + body` holds the position of `body` after `step`
/// integration steps; row 0 is the initial condition, recorded before any
/// stepping. Capacity is reserved once for the whole run — the caller knows
/// the total step count up front and the buffer is never grown past it.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<Vector>,
    body_count: usize,
}

impl Trajectory {
    /// Reserve room for `total_steps` integration steps plus the initial
    /// snapshot. Fails cleanly, retaining nothing, if the memory cannot be
    /// obtained.
    pub fn with_capacity(total_steps: usize, body_count: usize) -> Result<Self, TryReserveError> {
        let mut samples = Vec::new();
        samples.try_reserve_exact((total_steps + 1) * body_count)?;
        Ok(Self {
            samples,
            body_count,
        })
    }

    pub fn body_count(&self) -> usize {
        self.body_count
    }

    /// Number of snapshots recorded so far (steps plus the initial row)
    pub fn recorded_snapshots(&self) -> usize {
        if self.body_count == 0 {
            0
        } else {
            self.samples.len() / self.body_count
        }
    }

    /// Position of `body` after `step` integration steps (step 0 is the
    /// initial condition)
    pub fn position(&self, step: usize, body: usize) -> Vector {
        self.samples[step * self.body_count + body]
    }

    /// All body positions for one snapshot, in body-index order
    pub fn snapshot(&self, step: usize) -> &[Vector] {
        let start = step * self.body_count;
        &self.samples[start..start + self.body_count]
    }

    /// The raw flat sample sequence, for rendering and analysis consumers
    pub fn as_flat(&self) -> &[Vector] {
        &self.samples
    }

    /// Append a snapshot of every body's current position
    pub fn record(&mut self, bodies: &BodySet) {
        debug_assert_eq!(bodies.len(), self.body_count);
        self.samples.extend_from_slice(bodies.positions());
    }
}
