//! Physics engine: body storage, pairwise gravity, and integrators

pub mod bodies;
pub mod gravity;
pub mod integrators;
pub mod math;
