//! Phase model definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DateRange, PhaseRange, PhaseStatus};

/// Opaque identity of a phase within its plan.
///
/// Ids come from a per-plan counter and are never handed out twice, even
/// after the phase that held one is removed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PhaseId(pub u64);

impl fmt::Display for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed milestone segment of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phase {
    /// Identity within the owning plan
    pub id: PhaseId,

    /// Display name of the phase
    pub name: String,

    /// Dates covered by the phase
    #[serde(default)]
    pub range: PhaseRange,

    /// Current status of the phase
    pub status: PhaseStatus,
}

/// A phase proposed by the partitioner that has not been committed yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestedPhase {
    /// Name taken from the breakpoint
    pub name: String,

    /// Dates computed from the breakpoint fractions
    pub range: DateRange,
}
