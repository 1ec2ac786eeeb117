//! Bloch vector computation.
//!
//! The Bloch sphere maps every pure single-qubit state to a point on the unit
//! sphere: x = sinθ·cosφ, y = sinθ·sinφ, z = cosθ. The north pole (0,0,1) is
//! |0⟩, the south pole (0,0,−1) is |1⟩.

use crate::angles::Angles;

/// Point on the unit Bloch sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BlochVector {
    /// Euclidean norm. 1 within floating-point tolerance for any vector
    /// produced by [`bloch_vector`].
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Map Bloch angles to the unit sphere.
///
/// Infallible: the `Angles` domain is enforced at construction, and sin/cos
/// are total over it.
pub fn bloch_vector(angles: Angles) -> BlochVector {
    let theta = angles.theta_rad();
    let phi = angles.phi_rad();
    BlochVector {
        x: theta.sin() * phi.cos(),
        y: theta.sin() * phi.sin(),
        z: theta.cos(),
    }
}
