//! Data models for plans and phases.
//!
//! This module contains the domain types the partitioner works on. Display
//! implementations live in [`crate::display::models`] to keep presentation
//! separate from the data.
//!
//! - [`DateRange`]: a validated project window (`start <= end`)
//! - [`PhaseRange`]: a phase's dates, either endpoint optional
//! - [`Phase`]: a committed milestone with identity and status
//! - [`SuggestedPhase`]: a partitioner proposal without status
//! - [`Plan`]: the project window plus its ordered phases
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use timeline_core::models::{DateRange, Plan, PhaseStatus};
//! use timeline_core::params::AppendPhase;
//!
//! let range = DateRange::new(date(2025, 6, 16), date(2025, 10, 17))?;
//! let mut plan = Plan::new("Billing revamp", range)?;
//!
//! let id = plan.append_phase(&AppendPhase::named("Planning"))?;
//! assert_eq!(plan.phase(id).map(|p| p.status), Some(PhaseStatus::InProgress));
//! # Ok::<(), timeline_core::TimelineError>(())
//! ```

pub mod phase;
pub mod plan;
pub mod range;
pub mod status;


pub use phase::{Phase, PhaseId, SuggestedPhase};
pub use plan::Plan;
pub use range::{DateRange, PhaseRange};
pub use status::PhaseStatus;
