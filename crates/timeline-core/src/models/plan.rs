//! Plan model definition and related functionality.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{DateRange, Phase, PhaseId, PhaseStatus};
use crate::error::{Result, TimelineError};

/// A project plan: its date window and ordered phases.
///
/// Phases keep insertion order. They are not clamped to `range`; use
/// [`Plan::phases_outside_range`] to find the ones that spill over.
///
/// Deserialization checks the window, rejects blank names and repeated
/// phase ids, and moves the id counter past every id already in use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "PlanRecord")]
pub struct Plan {
    /// Name of the project
    pub project: String,

    /// Project window
    pub range: DateRange,

    /// Committed phases in insertion order
    pub phases: Vec<Phase>,

    /// Next identity to hand out
    next_phase_id: u64,
}

fn first_phase_id() -> u64 {
    1
}

/// Plan as stored on disk, before its invariants are checked.
#[derive(Deserialize)]
struct PlanRecord {
    project: String,
    range: DateRange,
    #[serde(default)]
    phases: Vec<Phase>,
    #[serde(default = "first_phase_id")]
    next_phase_id: u64,
}

impl TryFrom<PlanRecord> for Plan {
    type Error = TimelineError;

    fn try_from(record: PlanRecord) -> Result<Self> {
        let mut plan = Self::new(record.project, record.range)?;

        let mut seen = BTreeSet::new();
        for phase in &record.phases {
            if phase.name.trim().is_empty() {
                return Err(TimelineError::invalid_name(format!(
                    "phase {} has an empty name",
                    phase.id
                )));
            }
            if !seen.insert(phase.id) {
                return Err(TimelineError::invalid_input("phases")
                    .with_reason(format!("phase id {} appears more than once", phase.id)));
            }
        }

        let after_last = seen
            .last()
            .map_or(first_phase_id(), |id| id.0.saturating_add(1));
        plan.next_phase_id = record.next_phase_id.max(after_last);
        plan.phases = record.phases;
        Ok(plan)
    }
}

impl Plan {
    /// Creates an empty plan for `project` over `range`.
    ///
    /// # Errors
    ///
    /// * `TimelineError::InvalidName` - When `project` is blank
    /// * `TimelineError::InvalidRange` - When `range.start > range.end`
    pub fn new(project: impl Into<String>, range: DateRange) -> Result<Self> {
        let project = project.into().trim().to_string();
        if project.is_empty() {
            return Err(TimelineError::invalid_name("project name cannot be empty"));
        }
        range.validate()?;

        Ok(Self {
            project,
            range,
            phases: Vec::new(),
            next_phase_id: first_phase_id(),
        })
    }

    /// Looks up a phase by id.
    pub fn phase(&self, id: PhaseId) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.id == id)
    }

    /// Phases currently marked in progress, in plan order.
    pub fn in_progress(&self) -> impl Iterator<Item = &Phase> {
        self.phases
            .iter()
            .filter(|phase| phase.status == PhaseStatus::InProgress)
    }

    /// Phases with an endpoint before the project start or after its end.
    ///
    /// Only reports; nothing in the plan operations enforces the window.
    pub fn phases_outside_range(&self) -> Vec<&Phase> {
        self.phases
            .iter()
            .filter(|phase| {
                [phase.range.start, phase.range.end]
                    .into_iter()
                    .flatten()
                    .any(|date| !self.range.contains(date))
            })
            .collect()
    }

    /// Reserves and returns the next phase id.
    ///
    /// Never returns an id already held by a phase in `phases`, even one
    /// pushed onto the public field directly.
    pub(crate) fn allocate_phase_id(&mut self) -> PhaseId {
        let after_last = self
            .phases
            .iter()
            .map(|phase| phase.id.0.saturating_add(1))
            .max()
            .unwrap_or_else(first_phase_id);
        let id = PhaseId(self.next_phase_id.max(after_last));
        self.next_phase_id = id.0 + 1;
        id
    }
}
