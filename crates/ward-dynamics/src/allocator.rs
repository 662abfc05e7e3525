//! The doctor's decision procedure: priority-ordered, quota-bounded
//! allocation of treatment.

use ward_agent::{Doctor, Patient};
use ward_core::AgentId;

/// Run one step of the doctor's allocation against the live patient state.
///
/// `activation_order` is this step's full agent permutation; the visit
/// sequence is that order restricted to patients, then stable-sorted by
/// `current_pain` descending.  Equal-pain ties therefore resolve to whatever
/// relative order the step's random permutation produced — not to patient id.
/// That coupling is load-bearing: reordering equal-pain patients by any other
/// key changes which of them is treated when the quota is tight.
///
/// Walking the sorted sequence:
/// - once `quota_per_step` treatments have been administered the walk stops
///   entirely (a hard stop, not a per-patient skip);
/// - a patient at or above `pain_threshold` is treated: pain reduced by
///   `treatment_reduction` (floored at 0), flag set, both counters bumped;
/// - a patient below threshold is passed over and the walk continues.
///
/// Reads `current_pain` live at the instant of the doctor's turn — patients
/// activated earlier in the step show post-evolution values, later ones still
/// show the previous step's values.  Returns the number treated this step.
pub fn allocate(
    doctor:           &mut Doctor,
    patients:         &mut [Patient],
    activation_order: &[AgentId],
) -> usize {
    let mut visit: Vec<usize> = activation_order
        .iter()
        .map(|id| id.index())
        .filter(|&i| i < patients.len())
        .collect();
    // Stable sort: equal-pain patients keep their permutation order.
    visit.sort_by(|&a, &b| patients[b].current_pain.total_cmp(&patients[a].current_pain));

    let mut treated = 0;
    for &i in &visit {
        if treated >= doctor.quota_per_step {
            break;
        }
        if patients[i].current_pain >= doctor.pain_threshold {
            patients[i].receive_treatment(doctor.treatment_reduction);
            treated += 1;
            doctor.treatments_given_total += 1;
        }
    }
    treated
}
