//! Position-Extended Forest-Ruth-Like (PEFRL) integration method

use super::{AccelerationField, Integrator};
use crate::physics::bodies::BodySet;
use crate::physics::math::Scalar;

/// PEFRL integrator - a 4th order symplectic integrator
///
/// A palindromic drift-kick composition whose coefficients were optimized to
/// minimize the leading error term while keeping the symplectic structure:
///
/// ```text
/// drift(ξ) kick(P₁) drift(χ) kick(λ) drift(P₂) kick(λ) drift(χ) kick(P₁) drift(ξ)
/// ```
///
/// with P₁ = (1−2λ)/2 and P₂ = 1−2(χ+ξ). Each kick recomputes accelerations
/// first, so a step costs four force evaluations — roughly 4× Velocity
/// Verlet — in exchange for bounded energy error several orders smaller.
/// The preferred method for multi-century solar-system integration.
///
/// Reference: Omelyan, Mryglod, Folk (2002) "Optimized Forest-Ruth- and
/// Suzuki-like algorithms for integration of motion in many-body systems"
#[derive(Debug, Clone, Default)]
pub struct Pefrl;

impl Pefrl {
    /// Optimized coefficients for minimal error
    const XI: Scalar = 0.178_617_895_844_809_1;
    const LAMBDA: Scalar = -0.212_341_831_062_605_4;
    const CHI: Scalar = -0.066_264_582_669_818_5;
    const COEFF_A: Scalar = 0.5 * (1.0 - 2.0 * Pefrl::LAMBDA);
    const COEFF_B: Scalar = 1.0 - 2.0 * (Pefrl::CHI + Pefrl::XI);
}

impl Integrator for Pefrl {
    fn step(&mut self, bodies: &mut BodySet, field: &dyn AccelerationField, dt: Scalar) {
        bodies.drift(Pefrl::XI * dt);

        bodies.refresh_accelerations(field);
        bodies.kick(Pefrl::COEFF_A * dt);

        bodies.drift(Pefrl::CHI * dt);

        bodies.refresh_accelerations(field);
        bodies.kick(Pefrl::LAMBDA * dt);

        // Middle stage
        bodies.drift(Pefrl::COEFF_B * dt);

        bodies.refresh_accelerations(field);
        bodies.kick(Pefrl::LAMBDA * dt);

        bodies.drift(Pefrl::CHI * dt);

        bodies.refresh_accelerations(field);
        bodies.kick(Pefrl::COEFF_A * dt);

        bodies.drift(Pefrl::XI * dt);
    }

    fn name(&self) -> &'static str {
        "pefrl"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["forest_ruth"]
    }

    fn convergence_order(&self) -> usize {
        4
    }
}
