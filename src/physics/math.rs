//! Scalar and vector aliases plus the unit-conversion constants shared by
//! force evaluation and integration.
//!
//! The simulation works in mixed units: masses in kilograms, positions in
//! astronomical units, velocities in AU per day. Accelerations come out of
//! the SI force law and are converted to AU/day² through a single combined
//! factor so each pair contributes one multiply, not a chain of conversions.

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 3D vector type for positions, velocities, and accelerations
pub type Vector = glam::DVec3;

/// Gravitational constant, m³ kg⁻¹ s⁻²
pub const G: Scalar = 6.6743e-11;

/// Seconds per day, the simulation's unit of time
pub const SECONDS_PER_DAY: Scalar = 86_400.0;

/// Meters per astronomical unit, the simulation's unit of distance
pub const METERS_PER_AU: Scalar = 1.496e11;

/// Conversion factor from m/s² to AU/day²
pub const ACCEL_SI_TO_AU_DAY: Scalar = SECONDS_PER_DAY * SECONDS_PER_DAY / METERS_PER_AU;
