use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{OffsetArgs, PhaseCommands, PlanCommands, SuggestArgs};

/// Command-line interface for the timeline phase planner
///
/// Splits a project's date window into named milestone phases, and keeps a
/// draft plan file whose phases can be added, removed and edited before the
/// plan is exported as a backend payload.
#[derive(Parser)]
#[command(version, about, name = "tl")]
pub struct Args {
    /// Path to the draft plan file
    #[arg(long, global = true, default_value = "plan.json")]
    pub plan_file: PathBuf,

    /// Path to a JSON breakpoints file. Defaults to
    /// $XDG_CONFIG_HOME/timeline/breakpoints.json, then the built-in
    /// partition
    #[arg(long, global = true)]
    pub breakpoints_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the timeline CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the date a fraction of the way through a window
    #[command(alias = "o")]
    Offset(OffsetArgs),
    /// Suggest phases for a project window
    #[command(alias = "sg")]
    Suggest(SuggestArgs),
    /// Manage the draft plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage phases within the draft plan
    #[command(alias = "ph")]
    Phase {
        #[command(subcommand)]
        command: PhaseCommands,
    },
    /// Print the JSON schema of the plan payload
    Schema,
}
