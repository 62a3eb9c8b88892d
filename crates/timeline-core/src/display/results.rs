//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create,
//! update and remove operations with consistent messaging.

use std::fmt;

use crate::models::{Phase, PhaseId, Plan};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<&Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan for project: {}", self.resource.project)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<&Phase> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added phase with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Lists the fields that were changed, when any are tracked.
///
/// # Examples
///
/// ```rust
/// use timeline_core::{
///     display::UpdateResult,
///     models::{Phase, PhaseId, PhaseRange, PhaseStatus},
/// };
///
/// let phase = Phase {
///     id: PhaseId(1),
///     name: "Design".to_string(),
///     range: PhaseRange::default(),
///     status: PhaseStatus::InProgress,
/// };
///
/// let result = UpdateResult::with_changes(&phase, vec!["status".to_string()]);
/// assert!(result.to_string().contains("Changes made:"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an update result that tracks changed fields.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<&Phase> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated phase with ID: {}", self.resource.id)?;
        writeln!(f)?;
        if !self.changes.is_empty() {
            writeln!(f, "Changes made: {}", self.changes.join(", "))?;
            writeln!(f)?;
        }
        write!(f, "{}", self.resource)
    }
}

/// Reports an update or removal that matched no phase.
///
/// Unknown ids are not an error for point operations; the plan is simply
/// left as it was.
pub struct MissingPhase {
    pub id: PhaseId,
}

impl fmt::Display for MissingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "No phase with ID {}; plan unchanged.", self.id)
    }
}

/// Wrapper type for displaying the result of a phase removal.
pub struct RemoveResult {
    pub id: PhaseId,
    pub removed: Option<Phase>,
}

impl fmt::Display for RemoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.removed {
            Some(phase) => writeln!(f, "Removed phase {}: {}", self.id, phase.name),
            None => MissingPhase { id: self.id }.fmt(f),
        }
    }
}
