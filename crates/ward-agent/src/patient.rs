//! Patient state.

use ward_core::{AgentId, PAIN_MIN};

/// A patient whose condition evolves autonomously and can be reduced by
/// treatment.
///
/// Fields are `pub` for direct access from the step loop; the `Ward` owner
/// guarantees strictly sequential mutation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Patient {
    /// Stable unique identifier, assigned at creation.
    pub id: AgentId,

    /// Baseline pain in [0, 10], sampled once at creation and immutable
    /// thereafter.
    pub base_pain: f64,

    /// Current pain, always in [0, 10].  Refreshed by the pain dynamics
    /// engine during the patient's own turn, then possibly reduced by the
    /// allocator during the doctor's turn.
    pub current_pain: f64,

    /// `true` iff the allocator selected this patient during the current step.
    /// Reset at the start of the patient's own turn each step.
    pub treated_this_step: bool,
}

impl Patient {
    /// Create a patient whose current pain starts at its baseline.
    pub fn new(id: AgentId, base_pain: f64) -> Self {
        Self {
            id,
            base_pain,
            current_pain: base_pain,
            treated_this_step: false,
        }
    }

    /// Administer a treatment: reduce pain by `reduction` (floored at the
    /// bottom of the pain scale) and mark the patient treated for this step.
    ///
    /// This is the single mutation point for treatment — only the allocator
    /// calls it.
    pub fn receive_treatment(&mut self, reduction: f64) {
        self.current_pain = (self.current_pain - reduction).max(PAIN_MIN);
        self.treated_this_step = true;
    }
}
