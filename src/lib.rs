//! # bloch-state-sim
//!
//! Pure single-qubit state engine: maps two Bloch-sphere angles to a state
//! vector, Bloch coordinates, a density matrix, and simulated Z-basis
//! measurement statistics.
//!
//! ## Physics
//!
//! A pure single-qubit state is parameterized by a polar angle θ ∈ [0°, 180°]
//! and an azimuthal angle φ ∈ [0°, 360°):
//!
//! - **State vector**: |ψ⟩ = cos(θ/2)|0⟩ + e^{iφ}·sin(θ/2)|1⟩ (global phase
//!   fixed so the |0⟩ amplitude is real and non-negative)
//! - **Bloch vector**: (sinθ·cosφ, sinθ·sinφ, cosθ) on the unit sphere
//! - **Density matrix**: ρ = |ψ⟩⟨ψ|, trace 1, Hermitian, rank 1
//! - **Born rule**: P(0) = cos²(θ/2), P(1) = sin²(θ/2) in the σ_z basis
//!
//! Every operation is a stateless pure function of its inputs. Measurement
//! simulation is per-shot Bernoulli sampling against an explicit `Rng`, so
//! runs are reproducible when a seeded generator is supplied.
//!
//! ## Usage
//!
//! ```
//! use bloch_state_sim::prelude::*;
//!
//! let angles = Angles::new(90.0, 0.0).unwrap(); // |+⟩
//! let bloch = bloch_vector(angles);
//! assert!((bloch.x - 1.0).abs() < 1e-9);
//!
//! let amps = state_amplitudes(angles);
//! let rho = density_matrix(&amps);
//! assert!((rho.trace() - 1.0).abs() < 1e-9);
//!
//! let shots = ShotRequest::new(1000).unwrap();
//! let result = simulate_measurement_seeded(angles, shots, 42);
//! assert_eq!(result.shots(), 1000);
//! ```

pub mod error;
pub mod angles;
pub mod presets;
pub mod bloch;
pub mod amplitudes;
pub mod density;
pub mod measurement;
pub mod format;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::angles::*;
    pub use crate::presets::*;
    pub use crate::bloch::*;
    pub use crate::amplitudes::*;
    pub use crate::density::*;
    pub use crate::measurement::*;
    pub use crate::format::*;
}
