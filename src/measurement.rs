//! Z-basis measurement simulation via per-shot Bernoulli sampling.
//!
//! Each shot draws a uniform number in [0, 1) and classifies it against
//! p0 = cos²(θ/2). No analytic binomial shortcut is taken, so the counts
//! carry the sampling variance a real repeated experiment would show.
//!
//! Reproducibility: every entry point threads an explicit generator. The
//! seeded variant splits the shots into fixed-size chunks with per-chunk
//! derived seeds, so sequential and rayon-parallel execution of the same
//! seed produce identical counts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::amplitudes::state_amplitudes;
use crate::angles::Angles;
use crate::error::EngineError;

/// Upper bound on the shot count accepted by [`ShotRequest`].
pub const MAX_SHOTS: u32 = 100_000;

/// Shots per independently-seeded chunk in the seeded simulation paths.
const CHUNK_SHOTS: u32 = 4096;

/// Validated number of measurement repetitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotRequest {
    shots: u32,
}

impl ShotRequest {
    /// Construct a request, rejecting shot counts outside [1, 100000].
    pub fn new(shots: u32) -> Result<Self, EngineError> {
        if shots == 0 || shots > MAX_SHOTS {
            return Err(EngineError::ShotsOutOfRange(shots as i64));
        }
        Ok(Self { shots })
    }

    /// Coercing constructor matching the shots input field: values are
    /// clamped into [1, 100000].
    pub fn clamped(shots: i64) -> Self {
        Self {
            shots: shots.clamp(1, MAX_SHOTS as i64) as u32,
        }
    }

    /// Number of shots, guaranteed in [1, 100000].
    pub fn shots(&self) -> u32 {
        self.shots
    }
}

/// Observed counts from a finite measurement run, alongside the Born-rule
/// probabilities the frequencies converge to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementResult {
    /// Shots that collapsed to |0⟩.
    pub count0: u32,
    /// Shots that collapsed to |1⟩.
    pub count1: u32,
    /// Theoretical P(0) = cos²(θ/2).
    pub prob_zero: f64,
    /// Theoretical P(1) = 1 − P(0).
    pub prob_one: f64,
}

impl MeasurementResult {
    /// Total number of trials. Always equals count0 + count1 exactly.
    pub fn shots(&self) -> u32 {
        self.count0 + self.count1
    }

    /// Empirical frequency of outcome 0.
    pub fn freq_zero(&self) -> f64 {
        self.count0 as f64 / self.shots() as f64
    }

    /// Empirical frequency of outcome 1.
    pub fn freq_one(&self) -> f64 {
        self.count1 as f64 / self.shots() as f64
    }
}

fn bernoulli_count<R: Rng>(p0: f64, shots: u32, rng: &mut R) -> u32 {
    let mut count0 = 0u32;
    for _ in 0..shots {
        if rng.gen::<f64>() < p0 {
            count0 += 1;
        }
    }
    count0
}

/// Simulate repeated σ_z measurements, drawing from the caller's generator.
///
/// The generator is an explicit parameter so callers control reproducibility;
/// pass a `StdRng::seed_from_u64` for deterministic runs or a thread rng for
/// interactive use.
pub fn simulate_measurement<R: Rng>(
    angles: Angles,
    request: ShotRequest,
    rng: &mut R,
) -> MeasurementResult {
    let p0 = state_amplitudes(angles).prob_zero();
    let shots = request.shots();
    let count0 = bernoulli_count(p0, shots, rng);
    MeasurementResult {
        count0,
        count1: shots - count0,
        prob_zero: p0,
        prob_one: 1.0 - p0,
    }
}

/// Per-chunk seed derivation for the seeded paths.
fn chunk_seed(seed: u64, chunk: u64) -> u64 {
    seed.wrapping_add(chunk.wrapping_mul(7919))
}

/// Deterministic seeded simulation.
///
/// Shots are partitioned into fixed 4096-shot chunks, each sampled from its
/// own `StdRng` seeded from `seed` and the chunk index. With the `parallel`
/// feature the chunks run on the rayon pool; the counts are identical either
/// way for a given seed.
pub fn simulate_measurement_seeded(
    angles: Angles,
    request: ShotRequest,
    seed: u64,
) -> MeasurementResult {
    let p0 = state_amplitudes(angles).prob_zero();
    let shots = request.shots();
    let n_chunks = shots.div_ceil(CHUNK_SHOTS);

    let chunk_count0 = |chunk: u32| -> u32 {
        let start = chunk * CHUNK_SHOTS;
        let len = CHUNK_SHOTS.min(shots - start);
        let mut rng = StdRng::seed_from_u64(chunk_seed(seed, chunk as u64));
        bernoulli_count(p0, len, &mut rng)
    };

    #[cfg(feature = "parallel")]
    let count0: u32 = (0..n_chunks).into_par_iter().map(chunk_count0).sum();
    #[cfg(not(feature = "parallel"))]
    let count0: u32 = (0..n_chunks).map(chunk_count0).sum();

    MeasurementResult {
        count0,
        count1: shots - count0,
        prob_zero: p0,
        prob_one: 1.0 - p0,
    }
}

/// Interactive-use variant: seeded freshly from OS entropy on every call.
pub fn simulate_measurement_entropy(angles: Angles, request: ShotRequest) -> MeasurementResult {
    let mut rng = StdRng::from_entropy();
    simulate_measurement(angles, request, &mut rng)
}
