//! Timeline CLI Application
//!
//! Command-line interface for partitioning project windows into phases and
//! editing a draft plan.

mod args;
mod cli;
mod draft;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        plan_file,
        breakpoints_file,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(renderer, plan_file, breakpoints_file);

    info!("Timeline started");

    match command {
        Offset(args) => cli.offset(&args),
        Suggest(args) => cli.suggest(&args),
        Plan { command } => cli.handle_plan_command(command),
        Phase { command } => cli.handle_phase_command(command),
        Schema => cli.schema(),
    }
}
