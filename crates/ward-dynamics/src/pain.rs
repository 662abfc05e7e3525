//! Autonomous pain dynamics.
//!
//! Pain oscillates sinusoidally around each patient's baseline with a small
//! uniform perturbation per step.  The oscillation is tied to the step count,
//! not wall time, so the trajectory is fully determined by the baseline and
//! the shared RNG stream.

use ward_core::{PAIN_MAX, PAIN_MIN, SimRng, Step};

/// Half-width of the uniform per-step noise band.
const NOISE_HALF_WIDTH: f64 = 0.5;

/// Periodic drift component at `step`: `2.0 * sin(step / 5.0)`.
///
/// Exactly zero at step 0.
#[inline]
pub fn oscillation(step: Step) -> f64 {
    2.0 * (step.0 as f64 / 5.0).sin()
}

/// The deterministic core of the dynamics: baseline plus oscillation plus a
/// caller-supplied noise value, clamped to the pain scale.
///
/// Exposed separately so tests can pin the noise to a fixed value.
#[inline]
pub fn evolve_with_noise(base_pain: f64, step: Step, noise: f64) -> f64 {
    (base_pain + oscillation(step) + noise).clamp(PAIN_MIN, PAIN_MAX)
}

/// Compute a patient's next pain value for `step`.
///
/// Draws the noise uniformly from [-0.5, 0.5] — exactly one draw from the
/// shared RNG per call, which is what fixes the per-step draw order.
#[inline]
pub fn evolve(base_pain: f64, step: Step, rng: &mut SimRng) -> f64 {
    let noise = rng.gen_range(-NOISE_HALF_WIDTH..=NOISE_HALF_WIDTH);
    evolve_with_noise(base_pain, step, noise)
}
