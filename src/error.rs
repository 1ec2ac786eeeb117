//! Engine error taxonomy.
//!
//! The engine is pure math over well-formed numeric domains, so the only
//! failure mode is an invalid argument. Any invalid input rejects the whole
//! call; there is nothing transient to retry.

use thiserror::Error;

/// Error returned by fallible engine constructors and operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A numeric input was NaN or infinite. NaN is rejected at the boundary
    /// rather than propagated, which would silently corrupt every derived
    /// value downstream.
    #[error("non-finite value for {name}: {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// Polar angle outside [0, 180] degrees.
    #[error("theta {0} deg outside [0, 180]")]
    ThetaOutOfRange(f64),

    /// Shot count outside [1, 100000].
    #[error("shots {0} outside [1, 100000]")]
    ShotsOutOfRange(i64),
}
