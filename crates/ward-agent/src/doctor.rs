//! Doctor state.

use ward_core::AgentId;

/// The doctor: a treatment policy plus a running counter.
///
/// Policy fields are fixed at construction; only `treatments_given_total`
/// changes during a run, and it is monotone non-decreasing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Doctor {
    /// Stable unique identifier — the next id after the last patient.
    pub id: AgentId,

    /// Minimum `current_pain` required to qualify for treatment.
    pub pain_threshold: f64,

    /// Amount subtracted from a treated patient's `current_pain`.
    pub treatment_reduction: f64,

    /// Maximum number of patients treatable in one step.
    pub quota_per_step: usize,

    /// Cumulative count of all treatments administered since simulation
    /// start.  Incremented once per administered treatment, never reset.
    pub treatments_given_total: u64,
}

impl Doctor {
    pub fn new(
        id:                  AgentId,
        pain_threshold:      f64,
        treatment_reduction: f64,
        quota_per_step:      usize,
    ) -> Self {
        Self {
            id,
            pain_threshold,
            treatment_reduction,
            quota_per_step,
            treatments_given_total: 0,
        }
    }
}
