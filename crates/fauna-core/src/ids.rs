//! Agent identifiers.
//!
//! `AgentId` is `Copy + Ord + Hash` so drivers can keep ids in maps and sorted
//! pair lists.  The inner integer is `pub`, but callers should prefer
//! `.index()` when indexing.

use std::fmt;

/// Slot index of an agent in a driver-owned `Population`.
///
/// Slots are never reused, so an id stays meaningful (as "gone") after its
/// agent has been eaten or removed.
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
        id.index()
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;

    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}
