//! Plan payload accepted by the plan backend.
//!
//! The backend stores a plan as its project name, the project window, and a
//! `fields` map from phase name to status string:
//!
//! ```json
//! {
//!   "project": "Billing revamp",
//!   "startDate": "2025-06-16",
//!   "endDate": "2025-10-17",
//!   "fields": { "Design": "Pending", "Planning": "In Progress" }
//! }
//! ```
//!
//! That map drops phase dates and ids, and two phases with the same name
//! collapse into one entry. With
//! [`PayloadOptions::include_phase_ranges`](crate::params::PayloadOptions)
//! set, an additional `phases` array carries every phase in full.

use std::collections::BTreeMap;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    dates::format_wire_date,
    models::{Phase, PhaseStatus, Plan},
    params::PayloadOptions,
};

/// Serialized plan as submitted to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanPayload {
    /// Project name
    pub project: String,
    /// Project start, `YYYY-MM-DD`
    pub start_date: String,
    /// Project end, `YYYY-MM-DD`
    pub end_date: String,
    /// Phase name to status string
    pub fields: BTreeMap<String, String>,
    /// Full phase records, present only when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phases: Option<Vec<PhasePayload>>,
}

/// One phase with its dates, for the extended payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PhasePayload {
    /// Phase id within the plan
    pub id: u64,
    /// Phase name
    pub name: String,
    /// Phase start, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Phase end, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Phase status
    pub status: PhaseStatus,
}

impl From<&Phase> for PhasePayload {
    fn from(phase: &Phase) -> Self {
        Self {
            id: phase.id.0,
            name: phase.name.clone(),
            start_date: phase.range.start.map(format_wire_date),
            end_date: phase.range.end.map(format_wire_date),
            status: phase.status,
        }
    }
}

impl Plan {
    /// Snapshot of the plan in the backend's format.
    ///
    /// When several phases share a name the last one's status wins in
    /// `fields`.
    pub fn to_payload(&self, options: PayloadOptions) -> PlanPayload {
        let fields = self
            .phases
            .iter()
            .map(|phase| (phase.name.clone(), phase.status.as_str().to_string()))
            .collect();

        let phases = options
            .include_phase_ranges
            .then(|| self.phases.iter().map(PhasePayload::from).collect());

        PlanPayload {
            project: self.project.clone(),
            start_date: format_wire_date(self.range.start),
            end_date: format_wire_date(self.range.end),
            fields,
            phases,
        }
    }
}
