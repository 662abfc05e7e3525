//! Validated construction of a [`Ward`] from configuration.

use ward_core::{AgentId, SimRng, WardConfig, WardResult};

use crate::{Doctor, Patient, Ward};

impl Ward {
    /// Build the full roster from a validated configuration.
    ///
    /// Samples each patient's immutable `base_pain` uniformly from
    /// `config.base_pain_range`, one draw per patient in id order.  These
    /// draws come first in the shared RNG stream, before any stepping draw,
    /// so roster construction is part of the reproducibility contract.
    ///
    /// Fails fast with a configuration error before any step runs.
    pub fn from_config(config: &WardConfig, rng: &mut SimRng) -> WardResult<Ward> {
        config.validate()?;

        let (lo, hi) = config.base_pain_range;
        let patients = (0..config.patient_count as u32)
            .map(|i| Patient::new(AgentId(i), rng.gen_range(lo..=hi)))
            .collect();

        let doctor = Doctor::new(
            AgentId(config.patient_count as u32),
            config.pain_threshold,
            config.treatment_reduction,
            config.quota_per_step,
        );

        Ok(Ward { patients, doctor })
    }
}
