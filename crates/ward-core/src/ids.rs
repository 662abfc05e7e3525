//! Strongly typed, zero-cost agent identifier.
//!
//! The inner integer is `pub` to allow direct indexing into the patient `Vec`
//! via `id.0 as usize`, but callers should prefer the `.index()` helper for
//! clarity.  Ids are assigned densely at construction: patients occupy
//! `0..patient_count` and the doctor takes the next id after the last patient.

use std::fmt;

/// Index of an agent in the ward roster.
///
/// `Copy + Ord + Hash` so it can be used as a map key and sorted collection
/// element without ceremony.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<AgentId> for usize {
    #[inline(always)]
    fn from(id: AgentId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}
