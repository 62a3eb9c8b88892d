//! Command-line argument types and their handlers
//!
//! Each command has a clap `Args` struct that converts into the core
//! parameter types, so clap concerns stay in this crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Plan operations
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use log::info;
use timeline_core::{
    compute_offset_date, dates::parse_wire_date, AppendPhase, CreateResult, DateRange,
    MissingPhase, PartitionerBuilder, PayloadOptions, PhaseId, PhaseStatus, Plan, PlanPayload,
    RemoveResult, UpdatePhase, UpdateResult,
};

use crate::{draft, renderer::TerminalRenderer};

/// Parses a `YYYY-MM-DD` argument.
fn parse_date(input: &str) -> std::result::Result<Date, String> {
    parse_wire_date(input).map_err(|e| e.to_string())
}

/// Project window given as two dates.
#[derive(Args)]
pub struct WindowArgs {
    /// First day of the project (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub start: Date,
    /// Last day of the project (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub end: Date,
}

impl TryFrom<&WindowArgs> for DateRange {
    type Error = timeline_core::TimelineError;

    fn try_from(val: &WindowArgs) -> std::result::Result<Self, Self::Error> {
        DateRange::new(val.start, val.end)
    }
}

/// Compute the date a fraction of the way through a window
#[derive(Args)]
pub struct OffsetArgs {
    #[command(flatten)]
    pub window: WindowArgs,
    /// Fraction of the window, usually between 0 and 1
    #[arg(long, allow_negative_numbers = true)]
    pub fraction: f64,
}

/// Suggest phases for a project window
///
/// Splits the window with the configured breakpoints. Suggestions are not
/// saved; use `tl plan new --suggest` to commit them.
#[derive(Args)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub window: WindowArgs,
    /// Print the suggestions as JSON
    #[arg(long)]
    pub json: bool,
}

/// Start a new draft plan
#[derive(Args)]
pub struct NewPlanArgs {
    /// Name of the project
    pub project: String,
    #[command(flatten)]
    pub window: WindowArgs,
    /// Commit the suggested phases to the new plan
    #[arg(long)]
    pub suggest: bool,
    /// Replace an existing plan file
    #[arg(long)]
    pub force: bool,
}

/// Export the plan in the backend format
#[derive(Args)]
pub struct PayloadArgs {
    /// Include each phase's id and dates in a `phases` array
    #[arg(long)]
    pub with_ranges: bool,
}

impl From<PayloadArgs> for PayloadOptions {
    fn from(val: PayloadArgs) -> Self {
        PayloadOptions {
            include_phase_ranges: val.with_ranges,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Start a new draft plan
    #[command(alias = "n")]
    New(NewPlanArgs),
    /// Show the draft plan
    #[command(alias = "s")]
    Show,
    /// Print the plan as a backend payload
    #[command(alias = "x")]
    Payload(PayloadArgs),
}

/// Append a phase to the plan
///
/// The first phase of a plan starts in progress, later ones start pending.
/// Dates are optional and can be set later with `tl phase update`.
#[derive(Args)]
pub struct AddPhaseArgs {
    /// Name of the phase
    pub name: String,
    /// First day of the phase (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub start: Option<Date>,
    /// Last day of the phase (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub end: Option<Date>,
}

impl From<AddPhaseArgs> for AppendPhase {
    fn from(val: AddPhaseArgs) -> Self {
        AppendPhase {
            name: val.name,
            start: val.start,
            end: val.end,
        }
    }
}

/// Remove a phase from the plan
#[derive(Args)]
pub struct RemovePhaseArgs {
    /// ID of the phase to remove
    pub id: u64,
}

/// Update fields of a phase
///
/// Fields are set as given; a start after the end is accepted.
#[derive(Args)]
pub struct UpdatePhaseArgs {
    /// ID of the phase to update
    pub id: u64,
    /// New name
    #[arg(short, long)]
    pub name: Option<String>,
    /// New first day (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub start: Option<Date>,
    /// New last day (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub end: Option<Date>,
    /// New status
    #[arg(short, long)]
    pub status: Option<PhaseStatusArg>,
}

impl From<UpdatePhaseArgs> for UpdatePhase {
    fn from(val: UpdatePhaseArgs) -> Self {
        UpdatePhase {
            id: val.id,
            name: val.name,
            start: val.start,
            end: val.end,
            status: val.status.map(Into::into),
        }
    }
}

#[derive(Subcommand)]
pub enum PhaseCommands {
    /// Append a phase to the plan
    #[command(alias = "a")]
    Add(AddPhaseArgs),
    /// Remove a phase from the plan
    #[command(aliases = ["rm", "d"])]
    Remove(RemovePhaseArgs),
    /// Update fields of a phase
    #[command(alias = "u")]
    Update(UpdatePhaseArgs),
}

/// Command-line representation of phase status values
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PhaseStatusArg {
    /// Mark phase as in progress
    InProgress,
    /// Mark phase as pending
    Pending,
}

impl From<PhaseStatusArg> for PhaseStatus {
    fn from(val: PhaseStatusArg) -> Self {
        match val {
            PhaseStatusArg::InProgress => PhaseStatus::InProgress,
            PhaseStatusArg::Pending => PhaseStatus::Pending,
        }
    }
}

/// Runs commands against the draft plan file and renders the results.
pub struct Cli {
    renderer: TerminalRenderer,
    plan_file: PathBuf,
    breakpoints_file: Option<PathBuf>,
}

impl Cli {
    pub fn new(
        renderer: TerminalRenderer,
        plan_file: PathBuf,
        breakpoints_file: Option<PathBuf>,
    ) -> Self {
        Self {
            renderer,
            plan_file,
            breakpoints_file,
        }
    }

    pub fn offset(&self, args: &OffsetArgs) -> Result<()> {
        let range = DateRange::try_from(&args.window)?;
        let date = compute_offset_date(&range, args.fraction)?;
        println!("{date}");
        Ok(())
    }

    pub fn suggest(&self, args: &SuggestArgs) -> Result<()> {
        let range = DateRange::try_from(&args.window)?;
        let suggestions = PartitionerBuilder::new()
            .with_breakpoints_file(self.breakpoints_file.as_ref())
            .build()
            .context("Failed to load breakpoints")?
            .suggest(&range)?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&suggestions.0)?);
            return Ok(());
        }
        self.renderer
            .render(&format!("# Suggested phases\n\n{suggestions}"))
    }

    pub fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::New(args) => self.new_plan(&args),
            PlanCommands::Show => {
                let plan = draft::load(&self.plan_file)?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::Payload(args) => {
                let plan = draft::load(&self.plan_file)?;
                let payload = plan.to_payload(args.into());
                println!("{}", serde_json::to_string_pretty(&payload)?);
                Ok(())
            }
        }
    }

    pub fn handle_phase_command(&self, command: PhaseCommands) -> Result<()> {
        let mut plan = draft::load(&self.plan_file)?;

        let output = match command {
            PhaseCommands::Add(args) => {
                let id = plan.append_phase(&args.into())?;
                info!("Added phase {id}");
                let phase = plan.phase(id).context("Added phase is missing")?;
                CreateResult::new(phase).to_string()
            }
            PhaseCommands::Remove(args) => {
                let id = PhaseId(args.id);
                RemoveResult {
                    id,
                    removed: plan.remove_phase(id),
                }
                .to_string()
            }
            PhaseCommands::Update(args) => {
                let params = UpdatePhase::from(args);
                let fields = params.fields();
                if fields.is_empty() {
                    bail!("Nothing to update; pass at least one of --name, --start, --end, --status");
                }
                let id = params.phase_id();
                let changes = fields.iter().map(|f| f.label().to_string()).collect();
                for field in fields {
                    if !plan.update_phase(id, field)? {
                        break;
                    }
                }
                match plan.phase(id) {
                    Some(phase) => UpdateResult::with_changes(phase, changes).to_string(),
                    None => MissingPhase { id }.to_string(),
                }
            }
        };

        draft::save(&self.plan_file, &plan, true)?;
        self.renderer.render(&output)
    }

    fn new_plan(&self, args: &NewPlanArgs) -> Result<()> {
        let range = DateRange::try_from(&args.window)?;
        let plan = if args.suggest {
            let suggestions = PartitionerBuilder::new()
                .with_breakpoints_file(self.breakpoints_file.as_ref())
                .build()
                .context("Failed to load breakpoints")?
                .suggest(&range)?;
            Plan::from_suggestions(&args.project, range, &suggestions.0)?
        } else {
            Plan::new(&args.project, range)?
        };

        draft::save(&self.plan_file, &plan, args.force)?;
        info!("Created plan '{}' in {}", plan.project, self.plan_file.display());
        self.renderer.render(&CreateResult::new(&plan).to_string())
    }

    pub fn schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(PlanPayload);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
