//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds collection wrappers and operation result types so every
//! front end formats output the same way.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │  (Plan, Phase)  │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper type (SuggestedPhases)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, RemoveResult,
//!   MissingPhase)
//! - [`datetime`]: Date formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! All output is markdown, rendered in the terminal by the CLI.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

// Re-export commonly used types for convenience
pub use collections::SuggestedPhases;
pub use datetime::{DisplayDate, MaybeDisplayDate};
pub use results::{CreateResult, MissingPhase, RemoveResult, UpdateResult};
