//! Density-matrix projection ρ = |ψ⟩⟨ψ|.
//!
//! For a pure state with real α and complex β:
//! ρ00 = α², ρ11 = |β|², ρ01 = α·conj(β), ρ10 = conj(ρ01).
//! Trace 1, Hermitian, and positive semi-definite whenever the input
//! amplitudes are normalized. No renormalization is performed here; the
//! caller supplies normalized amplitudes (see `state_amplitudes`).

use num_complex::Complex;

use crate::amplitudes::Amplitudes;

/// 2×2 Hermitian density matrix of a pure single-qubit state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityMatrix {
    /// ⟨0|ρ|0⟩, real.
    pub rho00: f64,
    /// ⟨0|ρ|1⟩.
    pub rho01: Complex<f64>,
    /// ⟨1|ρ|0⟩ = conj(ρ01).
    pub rho10: Complex<f64>,
    /// ⟨1|ρ|1⟩, real.
    pub rho11: f64,
}

impl DensityMatrix {
    /// Tr ρ = ρ00 + ρ11.
    pub fn trace(&self) -> f64 {
        self.rho00 + self.rho11
    }

    /// Tr ρ² — equals 1 exactly for pure states, < 1 for mixed ones.
    pub fn purity(&self) -> f64 {
        self.rho00 * self.rho00 + self.rho11 * self.rho11 + 2.0 * self.rho01.norm_sqr()
    }

    /// Eigenvalues of the 2×2 Hermitian matrix, ascending.
    ///
    /// Closed form: λ = (tr ± √(tr² − 4·det)) / 2 with
    /// det = ρ00·ρ11 − |ρ01|². The discriminant is clamped at zero to
    /// absorb rounding for the degenerate case.
    pub fn eigenvalues(&self) -> (f64, f64) {
        let tr = self.trace();
        let det = self.rho00 * self.rho11 - self.rho01.norm_sqr();
        let disc = (tr * tr - 4.0 * det).max(0.0).sqrt();
        ((tr - disc) / 2.0, (tr + disc) / 2.0)
    }
}

/// Project normalized amplitudes onto their density matrix.
///
/// Since α is real, α·conj(β) = (α·β.re, −α·β.im).
pub fn density_matrix(amps: &Amplitudes) -> DensityMatrix {
    let rho01 = Complex::new(amps.alpha * amps.beta.re, -amps.alpha * amps.beta.im);
    DensityMatrix {
        rho00: amps.alpha * amps.alpha,
        rho01,
        rho10: rho01.conj(),
        rho11: amps.beta.norm_sqr(),
    }
}
