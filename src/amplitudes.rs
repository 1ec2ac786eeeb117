//! State-vector amplitudes.
//!
//! |ψ⟩ = cos(θ/2)|0⟩ + e^{iφ}·sin(θ/2)|1⟩. The global phase is fixed so that
//! the |0⟩ amplitude α is real; on the enforced θ domain [0, 180] it is also
//! non-negative (exactly 0 at θ = 180). Normalization α² + |β|² = 1 holds by
//! construction within floating-point tolerance.

use num_complex::Complex;

use crate::angles::Angles;

/// Amplitudes of a pure single-qubit state in the computational basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amplitudes {
    /// Coefficient of |0⟩. Real and non-negative for θ ∈ [0, 180].
    pub alpha: f64,
    /// Coefficient of |1⟩: sin(θ/2)·e^{iφ}.
    pub beta: Complex<f64>,
}

impl Amplitudes {
    /// Born-rule probability of measuring |0⟩ in the σ_z basis.
    pub fn prob_zero(&self) -> f64 {
        self.alpha * self.alpha
    }

    /// Born-rule probability of measuring |1⟩ in the σ_z basis.
    pub fn prob_one(&self) -> f64 {
        self.beta.norm_sqr()
    }

    /// Sum of squared magnitudes. 1 within tolerance for any value produced
    /// by [`state_amplitudes`].
    pub fn norm_sqr(&self) -> f64 {
        self.prob_zero() + self.prob_one()
    }
}

/// Compute the state-vector amplitudes for the given Bloch angles.
pub fn state_amplitudes(angles: Angles) -> Amplitudes {
    let half_theta = angles.theta_rad() / 2.0;
    let phi = angles.phi_rad();
    let beta_mag = half_theta.sin();
    Amplitudes {
        alpha: half_theta.cos(),
        beta: Complex::new(beta_mag * phi.cos(), beta_mag * phi.sin()),
    }
}
