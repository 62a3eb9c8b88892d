//! Core library for the timeline phase planner.
//!
//! This crate splits a project's date window into named milestone phases and
//! manages the ordered phase list of a plan:
//!
//! - [`planner`]: the partitioner ([`compute_offset_date`],
//!   [`generate_suggested_phases`]) and the append/remove/update operations on
//!   [`Plan`]
//! - [`models`]: date ranges, phases, statuses and plans
//! - [`dates`]: conversion between wire (`YYYY-MM-DD`) and display
//!   (`DD/MM/YYYY`) date strings
//! - [`wire`]: the payload handed to the plan backend
//! - [`display`]: markdown formatting for terminal output
//!
//! Everything here is synchronous and free of I/O, except reading a
//! breakpoints file when building a [`Partitioner`].
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use timeline_core::{
//!     models::{DateRange, PhaseStatus, Plan},
//!     params::{AppendPhase, PayloadOptions},
//!     PartitionerBuilder,
//! };
//!
//! let partitioner = PartitionerBuilder::new()
//!     .with_breakpoints(timeline_core::Breakpoint::reference())
//!     .build()?;
//!
//! let range = DateRange::new(date(2025, 6, 16), date(2025, 10, 17))?;
//! let suggestions = partitioner.suggest(&range)?;
//! println!("{}", suggestions);
//!
//! let mut plan = Plan::new("Billing revamp", range)?;
//! let first = plan.append_phase(&AppendPhase::named("Kickoff"))?;
//! assert_eq!(plan.phase(first).map(|p| p.status), Some(PhaseStatus::InProgress));
//!
//! let payload = plan.to_payload(PayloadOptions::default());
//! assert_eq!(payload.fields["Kickoff"], "In Progress");
//! # Ok::<(), timeline_core::TimelineError>(())
//! ```

pub mod dates;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod wire;

// Re-export commonly used types
pub use display::{CreateResult, MissingPhase, RemoveResult, SuggestedPhases, UpdateResult};
pub use error::{Result, TimelineError};
pub use models::{DateRange, Phase, PhaseId, PhaseRange, PhaseStatus, Plan, SuggestedPhase};
pub use params::{AppendPhase, PayloadOptions, PhaseField, UpdatePhase};
pub use planner::{
    compute_offset_date, generate_suggested_phases, Breakpoint, Partitioner, PartitionerBuilder,
};
pub use wire::{PhasePayload, PlanPayload};
