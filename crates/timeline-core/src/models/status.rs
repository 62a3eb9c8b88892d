//! Status enumeration for phases.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of phase statuses.
///
/// The first phase committed to a plan starts `InProgress`, every later one
/// starts `Pending`. Nothing moves a phase between the two states except an
/// explicit update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum PhaseStatus {
    /// Phase currently being worked on
    #[serde(rename = "In Progress")]
    InProgress,

    /// Phase not yet started
    #[serde(rename = "Pending")]
    Pending,
}

impl FromStr for PhaseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inprogress" | "in_progress" | "in-progress" | "in progress" => {
                Ok(PhaseStatus::InProgress)
            }
            "pending" => Ok(PhaseStatus::Pending),
            _ => Err(format!("Invalid phase status: {s}")),
        }
    }
}

impl PhaseStatus {
    /// Status string as sent to the plan backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseStatus::InProgress => "In Progress",
            PhaseStatus::Pending => "Pending",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timeline_core::models::PhaseStatus;
    ///
    /// assert_eq!(PhaseStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(PhaseStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PhaseStatus::InProgress => "➤ In Progress",
            PhaseStatus::Pending => "○ Pending",
        }
    }
}
