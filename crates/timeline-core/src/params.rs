//! Parameter structures for plan operations
//!
//! These structures are shared by every front end (the CLI today) and carry
//! no framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From` impls:
//!
//! ```text
//! CLI Args (clap) → Core Params → Plan operations
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{PhaseId, PhaseStatus};

/// Parameters for appending a phase to a plan.
///
/// Either date may be left unset and filled in later with an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppendPhase {
    /// Name of the phase (required, trimmed before use)
    pub name: String,
    /// Optional first day of the phase
    #[serde(default)]
    pub start: Option<Date>,
    /// Optional last day of the phase
    #[serde(default)]
    pub end: Option<Date>,
}

impl AppendPhase {
    /// Parameters for a phase with a name and no dates yet.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets both endpoints.
    pub fn with_dates(mut self, start: Option<Date>, end: Option<Date>) -> Self {
        self.start = start;
        self.end = end;
        self
    }
}

/// A single field assignment for a point update of a phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum PhaseField {
    /// Replace the name
    Name(String),
    /// Replace or clear the start date
    Start(Option<Date>),
    /// Replace or clear the end date
    End(Option<Date>),
    /// Replace the status
    Status(PhaseStatus),
}

impl PhaseField {
    /// Field name as used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            PhaseField::Name(_) => "name",
            PhaseField::Start(_) => "start",
            PhaseField::End(_) => "end",
            PhaseField::Status(_) => "status",
        }
    }
}

/// Parameters for updating a phase, one or more fields at a time.
///
/// Each present field becomes one [`PhaseField`] point update, applied in the
/// order name, start, end, status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatePhase {
    /// Phase to update
    pub id: u64,
    /// New name
    pub name: Option<String>,
    /// New start date
    pub start: Option<Date>,
    /// New end date
    pub end: Option<Date>,
    /// New status
    pub status: Option<PhaseStatus>,
}

impl UpdatePhase {
    /// Id of the phase to update.
    pub fn phase_id(&self) -> PhaseId {
        PhaseId(self.id)
    }

    /// Expands the request into point updates.
    pub fn fields(&self) -> Vec<PhaseField> {
        let mut fields = Vec::new();
        if let Some(name) = &self.name {
            fields.push(PhaseField::Name(name.clone()));
        }
        if let Some(start) = self.start {
            fields.push(PhaseField::Start(Some(start)));
        }
        if let Some(end) = self.end {
            fields.push(PhaseField::End(Some(end)));
        }
        if let Some(status) = self.status {
            fields.push(PhaseField::Status(status));
        }
        fields
    }
}

/// Options controlling how a plan is serialized for the plan backend.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayloadOptions {
    /// Also emit each phase's id and dates alongside the status map
    #[serde(default)]
    pub include_phase_ranges: bool,
}
