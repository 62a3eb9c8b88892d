//! Builder for creating and configuring Partitioner instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::{Breakpoint, Partitioner};
use crate::error::{Result, TimelineError};

/// Builder for creating and configuring Partitioner instances.
#[derive(Debug, Clone, Default)]
pub struct PartitionerBuilder {
    breakpoints_file: Option<PathBuf>,
    breakpoints: Option<Vec<Breakpoint>>,
}

impl PartitionerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a breakpoints file to load.
    ///
    /// If not specified, uses `$XDG_CONFIG_HOME/timeline/breakpoints.json`
    /// when that file exists, and the reference partition otherwise.
    pub fn with_breakpoints_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.breakpoints_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given breakpoints, ignoring any file.
    pub fn with_breakpoints(mut self, breakpoints: Vec<Breakpoint>) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    /// Builds the configured partitioner.
    ///
    /// # Errors
    ///
    /// * `TimelineError::FileSystem` - When the breakpoints file cannot be read
    /// * `TimelineError::Serialization` - When the file is not a JSON breakpoint list
    /// * `TimelineError::Configuration` - When the breakpoint list is empty
    /// * `TimelineError::InvalidInput` - When a breakpoint has a blank name or a
    ///   non-finite fraction
    pub fn build(self) -> Result<Partitioner> {
        let breakpoints = match (self.breakpoints, self.breakpoints_file) {
            (Some(breakpoints), _) => breakpoints,
            (None, Some(path)) => load_breakpoints(&path)?,
            (None, None) => match Self::default_breakpoints_file() {
                Some(path) => load_breakpoints(&path)?,
                None => {
                    debug!("No breakpoints file found, using reference partition");
                    Breakpoint::reference()
                }
            },
        };

        if breakpoints.is_empty() {
            return Err(TimelineError::Configuration {
                message: "breakpoint list is empty".to_string(),
            });
        }
        for breakpoint in &breakpoints {
            breakpoint.validate()?;
        }

        Ok(Partitioner::new(breakpoints))
    }

    /// Returns the breakpoints file following the XDG Base Directory
    /// specification, if one exists.
    fn default_breakpoints_file() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("timeline").find_config_file("breakpoints.json")
    }
}

/// Reads a JSON array of breakpoints from `path`.
fn load_breakpoints(path: &Path) -> Result<Vec<Breakpoint>> {
    debug!("Loading breakpoints from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| TimelineError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(serde_json::from_str(&content)?)
}
