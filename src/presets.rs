//! Named state presets and randomized angle selection.
//!
//! The six familiar pure states reachable from the preset buttons: the
//! computational basis poles, the ±X equator states, and the ±Y equator
//! states.

use rand::Rng;

use crate::angles::Angles;

/// A named point on the Bloch sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePreset {
    /// Ket label, e.g. `"|+i⟩"`.
    pub name: &'static str,
    pub theta_deg: f64,
    pub phi_deg: f64,
}

impl StatePreset {
    /// Angles for this preset. Preset values are always in-domain.
    pub fn angles(&self) -> Angles {
        Angles::clamped(self.theta_deg, self.phi_deg)
    }
}

/// The standard six single-qubit states.
pub const PRESETS: [StatePreset; 6] = [
    StatePreset { name: "|0⟩", theta_deg: 0.0, phi_deg: 0.0 },
    StatePreset { name: "|1⟩", theta_deg: 180.0, phi_deg: 0.0 },
    StatePreset { name: "|+⟩", theta_deg: 90.0, phi_deg: 0.0 },
    StatePreset { name: "|−⟩", theta_deg: 90.0, phi_deg: 180.0 },
    StatePreset { name: "|+i⟩", theta_deg: 90.0, phi_deg: 90.0 },
    StatePreset { name: "|−i⟩", theta_deg: 90.0, phi_deg: 270.0 },
];

/// Pick uniformly random whole-degree angles: θ ∈ [0, 180], φ ∈ [0, 360]
/// (φ = 360 wraps back to 0 through `Angles` normalization).
pub fn random_angles<R: Rng>(rng: &mut R) -> Angles {
    let theta = (rng.gen::<f64>() * 180.0).round();
    let phi = (rng.gen::<f64>() * 360.0).round();
    Angles::clamped(theta, phi)
}
