//! Plain data rows exposed to the external Reporter collaborator.

use ward_agent::Ward;
use ward_core::Step;

/// One patient's observable state at a point in the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientRow {
    pub id:                u32,
    pub current_pain:      f64,
    pub treated_this_step: bool,
}

/// The doctor's observable state at a point in the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoctorRow {
    pub id:                     u32,
    pub treatments_given_total: u64,
}

/// A read-only view of all agents' observable state at one step boundary.
///
/// The driver captures these *before* each step runs, so a snapshot at step
/// `k` shows the state produced by step `k - 1` (and the initial roster at
/// step 0).  The state after the final step is never snapshotted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepSnapshot {
    pub step:     u64,
    pub patients: Vec<PatientRow>,
    pub doctor:   DoctorRow,
}

impl StepSnapshot {
    /// Copy the observable fields out of the live ward state.
    pub fn capture(step: Step, ward: &Ward) -> Self {
        Self {
            step:     step.0,
            patients: ward
                .patients
                .iter()
                .map(|p| PatientRow {
                    id:                p.id.0,
                    current_pain:      p.current_pain,
                    treated_this_step: p.treated_this_step,
                })
                .collect(),
            doctor: DoctorRow {
                id:                     ward.doctor.id.0,
                treatments_given_total: ward.doctor.treatments_given_total,
            },
        }
    }
}
