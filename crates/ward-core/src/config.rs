//! Top-level simulation configuration.

use crate::error::{WardError, WardResult};
use crate::step::Step;

/// Lower bound of the pain scale.
pub const PAIN_MIN: f64 = 0.0;
/// Upper bound of the pain scale.
pub const PAIN_MAX: f64 = 10.0;

/// Top-level simulation configuration.
///
/// Typically assembled by the application's CLI/config loader and passed to
/// the simulation driver.  [`validate`][WardConfig::validate] is called at
/// construction time; the step loop itself assumes validated inputs and never
/// raises.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WardConfig {
    /// Number of patients.  The doctor is created in addition to these.
    pub patient_count: usize,

    /// Minimum `current_pain` required to qualify for treatment.
    pub pain_threshold: f64,

    /// Amount subtracted from `current_pain` on treatment (floored at 0).
    pub treatment_reduction: f64,

    /// Maximum number of patients the doctor may treat in one step.
    pub quota_per_step: usize,

    /// Inclusive range each patient's immutable `base_pain` is sampled from.
    pub base_pain_range: (f64, f64),

    /// Total steps to simulate.
    pub total_steps: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for WardConfig {
    /// Defaults matching the reference model: two patients, threshold 6,
    /// reduction 3, quota 1, base pain sampled from [3, 7], 20 steps.
    fn default() -> Self {
        Self {
            patient_count:       2,
            pain_threshold:      6.0,
            treatment_reduction: 3.0,
            quota_per_step:      1,
            base_pain_range:     (3.0, 7.0),
            total_steps:         20,
            seed:                42,
        }
    }
}

impl WardConfig {
    /// The step at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> Step {
        Step(self.total_steps)
    }

    /// Check every construction-time invariant, failing fast with a
    /// descriptive error before any step runs.
    pub fn validate(&self) -> WardResult<()> {
        if self.patient_count == 0 {
            return Err(WardError::Config("patient_count must be at least 1".into()));
        }
        if self.quota_per_step == 0 {
            return Err(WardError::Config("quota_per_step must be at least 1".into()));
        }
        if !(PAIN_MIN..=PAIN_MAX).contains(&self.pain_threshold) {
            return Err(WardError::Config(format!(
                "pain_threshold {} outside [{PAIN_MIN}, {PAIN_MAX}]",
                self.pain_threshold
            )));
        }
        if !self.treatment_reduction.is_finite() || self.treatment_reduction < 0.0 {
            return Err(WardError::Config(format!(
                "treatment_reduction {} must be finite and non-negative",
                self.treatment_reduction
            )));
        }
        let (lo, hi) = self.base_pain_range;
        if !(PAIN_MIN..=PAIN_MAX).contains(&lo)
            || !(PAIN_MIN..=PAIN_MAX).contains(&hi)
            || lo > hi
        {
            return Err(WardError::Config(format!(
                "base_pain_range [{lo}, {hi}] must be an ordered sub-range of [{PAIN_MIN}, {PAIN_MAX}]"
            )));
        }
        Ok(())
    }
}
