//! Reading and writing the draft plan file.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use log::debug;
use timeline_core::Plan;

/// Loads the plan stored at `path`.
pub fn load(path: &Path) -> Result<Plan> {
    let content = fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read plan file '{}'; create one with `tl plan new`",
            path.display()
        )
    })?;
    let plan: Plan = serde_json::from_str(&content)
        .with_context(|| format!("Plan file '{}' is not a valid plan", path.display()))?;

    debug!("Loaded plan '{}' with {} phases", plan.project, plan.phases.len());
    Ok(plan)
}

/// Writes `plan` to `path`, refusing to replace an existing file unless
/// `overwrite` is set.
pub fn save(path: &Path, plan: &Plan, overwrite: bool) -> Result<()> {
    if !overwrite && path.exists() {
        bail!(
            "Plan file '{}' already exists; pass --force to replace it",
            path.display()
        );
    }

    let json = serde_json::to_string_pretty(plan).context("Failed to serialize plan")?;
    fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write plan file '{}'", path.display()))?;

    debug!("Saved plan '{}' to {}", plan.project, path.display());
    Ok(())
}
