//! Timeline partitioning and phase list management.
//!
//! This module turns a project window into suggested phases and maintains a
//! plan's ordered phase list.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Breakpoints   │    │   Partitioner   │    │      Plan       │
//! │ (config / ref)  │───▶│ (partition)     │───▶│ (phase_ops)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    Configuration         Date arithmetic        Phase list state
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Partitioner`] instances with configuration
//! - [`partition`]: Offset-date arithmetic and suggestion generation
//! - [`phase_ops`]: Append, remove and update operations on [`Plan`]
//!
//! [`Plan`]: crate::models::Plan
//!
//! # Usage
//!
//! ```rust
//! use jiff::civil::date;
//! use timeline_core::{models::{DateRange, Plan}, PartitionerBuilder};
//!
//! let partitioner = PartitionerBuilder::new()
//!     .with_breakpoints(timeline_core::Breakpoint::reference())
//!     .build()?;
//!
//! let range = DateRange::new(date(2025, 6, 16), date(2025, 10, 17))?;
//! let suggestions = partitioner.suggest(&range)?;
//! assert_eq!(suggestions.0.len(), 6);
//!
//! let plan = Plan::from_suggestions("Billing revamp", range, &suggestions.0)?;
//! assert_eq!(plan.in_progress().count(), 1);
//! # Ok::<(), timeline_core::TimelineError>(())
//! ```

// Module declarations
pub mod builder;
pub mod partition;
pub mod phase_ops;


// Re-export the main types
pub use builder::PartitionerBuilder;
pub use partition::{compute_offset_date, generate_suggested_phases, Breakpoint};

use crate::{display::SuggestedPhases, error::Result, models::DateRange};

/// Partitions project windows with a fixed breakpoint set.
#[derive(Debug, Clone)]
pub struct Partitioner {
    breakpoints: Vec<Breakpoint>,
}

impl Partitioner {
    /// Creates a partitioner over validated breakpoints.
    pub(crate) fn new(breakpoints: Vec<Breakpoint>) -> Self {
        Self { breakpoints }
    }

    /// Breakpoints in use, in presentation order.
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Suggested phases for `range`.
    pub fn suggest(&self, range: &DateRange) -> Result<SuggestedPhases> {
        generate_suggested_phases(range, &self.breakpoints).map(SuggestedPhases)
    }
}
