//! Bloch-sphere angle pair with enforced domain.
//!
//! θ (polar) lives in [0, 180] degrees, φ (azimuth) in [0, 360). The checked
//! constructor rejects out-of-domain θ and non-finite inputs; `clamped` is the
//! UI-side policy that coerces instead of failing. φ is always wrapped into
//! [0, 360) with sign preserved (−30 → 330).

use crate::error::EngineError;

/// Immutable pair of Bloch-sphere angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angles {
    theta_deg: f64,
    phi_deg: f64,
}

impl Angles {
    /// Construct from degrees, enforcing the engine's domain.
    ///
    /// θ outside [0, 180] is flipped geometry (it changes which pole the state
    /// is closer to), so it is rejected rather than silently reinterpreted.
    /// φ may be any finite real and is wrapped into [0, 360).
    pub fn new(theta_deg: f64, phi_deg: f64) -> Result<Self, EngineError> {
        if !theta_deg.is_finite() {
            return Err(EngineError::NonFinite {
                name: "theta_deg",
                value: theta_deg,
            });
        }
        if !phi_deg.is_finite() {
            return Err(EngineError::NonFinite {
                name: "phi_deg",
                value: phi_deg,
            });
        }
        if !(0.0..=180.0).contains(&theta_deg) {
            return Err(EngineError::ThetaOutOfRange(theta_deg));
        }
        Ok(Self {
            theta_deg,
            phi_deg: phi_deg.rem_euclid(360.0),
        })
    }

    /// Coercing constructor matching the slider/number-input behavior:
    /// θ is clamped into [0, 180] (non-finite θ or φ falls back to 0),
    /// φ is wrapped into [0, 360).
    pub fn clamped(theta_deg: f64, phi_deg: f64) -> Self {
        let theta = if theta_deg.is_finite() {
            theta_deg.clamp(0.0, 180.0)
        } else {
            0.0
        };
        let phi = if phi_deg.is_finite() {
            phi_deg.rem_euclid(360.0)
        } else {
            0.0
        };
        Self {
            theta_deg: theta,
            phi_deg: phi,
        }
    }

    /// Polar angle in degrees, guaranteed in [0, 180].
    pub fn theta_deg(&self) -> f64 {
        self.theta_deg
    }

    /// Azimuthal angle in degrees, guaranteed in [0, 360).
    pub fn phi_deg(&self) -> f64 {
        self.phi_deg
    }

    /// Polar angle in radians.
    pub fn theta_rad(&self) -> f64 {
        self.theta_deg.to_radians()
    }

    /// Azimuthal angle in radians.
    pub fn phi_rad(&self) -> f64 {
        self.phi_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_domain() {
        assert!(Angles::new(0.0, 0.0).is_ok());
        assert!(Angles::new(180.0, 0.0).is_ok());
        assert!(Angles::new(90.0, 359.999).is_ok());
    }

    #[test]
    fn rejects_theta_out_of_range() {
        assert_eq!(
            Angles::new(180.1, 0.0),
            Err(EngineError::ThetaOutOfRange(180.1))
        );
        assert_eq!(
            Angles::new(-0.1, 0.0),
            Err(EngineError::ThetaOutOfRange(-0.1))
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            Angles::new(f64::NAN, 0.0),
            Err(EngineError::NonFinite { name: "theta_deg", .. })
        ));
        assert!(matches!(
            Angles::new(90.0, f64::INFINITY),
            Err(EngineError::NonFinite { name: "phi_deg", .. })
        ));
    }

    #[test]
    fn phi_wraps_preserving_sign() {
        let a = Angles::new(90.0, -30.0).unwrap();
        assert!((a.phi_deg() - 330.0).abs() < 1e-12);

        let b = Angles::new(90.0, 360.0).unwrap();
        assert!(b.phi_deg().abs() < 1e-12);

        let c = Angles::new(90.0, 725.0).unwrap();
        assert!((c.phi_deg() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn clamped_coerces_instead_of_failing() {
        let a = Angles::clamped(270.0, -90.0);
        assert!((a.theta_deg() - 180.0).abs() < 1e-12);
        assert!((a.phi_deg() - 270.0).abs() < 1e-12);

        let b = Angles::clamped(f64::NAN, f64::NAN);
        assert_eq!(b.theta_deg(), 0.0);
        assert_eq!(b.phi_deg(), 0.0);
    }

    #[test]
    fn radian_conversion() {
        let a = Angles::new(180.0, 90.0).unwrap();
        assert!((a.theta_rad() - std::f64::consts::PI).abs() < 1e-12);
        assert!((a.phi_rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
