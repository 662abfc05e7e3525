//! The ward roster — the shared agent collection the scheduler activates.

use ward_core::AgentId;

use crate::{Doctor, Patient};

/// Which step behavior an [`AgentId`] resolves to.
///
/// A tagged view rather than a trait object: the scheduler matches on the
/// kind, so patient-specific and doctor-specific data stay in their own
/// structs with no runtime type inspection.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AgentKind {
    Patient,
    Doctor,
}

/// All agent state for one run: the patient population plus one doctor.
///
/// Ids are dense: patients occupy `0..patient_count()` and the doctor takes
/// the id equal to `patient_count()`.  The `AgentId` value is the index into
/// `patients` for patient ids.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ward {
    pub patients: Vec<Patient>,
    pub doctor:   Doctor,
}

impl Ward {
    /// Number of patients (the doctor is not counted).
    #[inline]
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Total number of agents, doctor included.
    #[inline]
    pub fn agent_count(&self) -> usize {
        self.patients.len() + 1
    }

    /// Resolve an id to its step behavior kind.
    #[inline]
    pub fn kind(&self, id: AgentId) -> AgentKind {
        if id.index() < self.patients.len() {
            AgentKind::Patient
        } else {
            AgentKind::Doctor
        }
    }

    /// Iterator over all `AgentId`s in ascending id order (doctor last).
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agent_count() as u32).map(AgentId)
    }
}
