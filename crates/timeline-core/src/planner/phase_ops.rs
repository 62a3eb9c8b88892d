//! Phase list operations for a Plan.

use log::debug;

use crate::{
    error::{Result, TimelineError},
    models::{DateRange, Phase, PhaseId, PhaseRange, PhaseStatus, Plan, SuggestedPhase},
    params::{AppendPhase, PhaseField},
};

impl Plan {
    /// Creates a plan and commits every suggestion to it, in order.
    ///
    /// The first suggestion becomes the in-progress phase.
    pub fn from_suggestions(
        project: impl Into<String>,
        range: DateRange,
        suggestions: &[SuggestedPhase],
    ) -> Result<Self> {
        let mut plan = Self::new(project, range)?;
        for suggestion in suggestions {
            plan.append_phase(&AppendPhase {
                name: suggestion.name.clone(),
                start: Some(suggestion.range.start),
                end: Some(suggestion.range.end),
            })?;
        }
        Ok(plan)
    }

    /// Appends a phase at the end of the plan and returns its new id.
    ///
    /// The phase is `InProgress` when the plan had no phases, `Pending`
    /// otherwise. Dates are taken as given; they are neither required nor
    /// checked against the project window.
    ///
    /// # Errors
    ///
    /// * `TimelineError::InvalidName` - When the name is blank after trimming
    pub fn append_phase(&mut self, params: &AppendPhase) -> Result<PhaseId> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(TimelineError::invalid_name("phase name cannot be empty"));
        }

        let status = if self.phases.is_empty() {
            PhaseStatus::InProgress
        } else {
            PhaseStatus::Pending
        };
        let id = self.allocate_phase_id();

        debug!("Appending phase {id} '{name}' as {}", status.as_str());

        self.phases.push(Phase {
            id,
            name: name.to_string(),
            range: PhaseRange::new(params.start, params.end),
            status,
        });
        Ok(id)
    }

    /// Removes the phase with `id`, returning it.
    ///
    /// Unknown ids leave the plan untouched. Removing the in-progress phase
    /// does not promote another one.
    pub fn remove_phase(&mut self, id: PhaseId) -> Option<Phase> {
        let position = self.phases.iter().position(|phase| phase.id == id)?;
        debug!("Removing phase {id}");
        Some(self.phases.remove(position))
    }

    /// Sets one field of the phase with `id`. Returns `Ok(false)` when no
    /// phase matched.
    ///
    /// Names are trimmed like on append. No cross-field checks are made:
    /// moving `start` past `end` is allowed.
    ///
    /// # Errors
    ///
    /// * `TimelineError::InvalidName` - When a new name is blank after
    ///   trimming; the plan is left unchanged
    pub fn update_phase(&mut self, id: PhaseId, field: PhaseField) -> Result<bool> {
        let field = match field {
            PhaseField::Name(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(TimelineError::invalid_name("phase name cannot be empty"));
                }
                PhaseField::Name(name.to_string())
            }
            other => other,
        };

        let Some(phase) = self.phases.iter_mut().find(|phase| phase.id == id) else {
            return Ok(false);
        };

        debug!("Updating {} of phase {id}", field.label());

        match field {
            PhaseField::Name(name) => phase.name = name,
            PhaseField::Start(start) => phase.range.start = start,
            PhaseField::End(end) => phase.range.end = end,
            PhaseField::Status(status) => phase.status = status,
        }
        Ok(true)
    }
}
