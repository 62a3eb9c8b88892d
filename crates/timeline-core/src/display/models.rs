//! Display implementations for domain models.
//!
//! The Display implementations produce markdown for rich terminal display,
//! with status icons and dates in display form.

use std::fmt;

use super::datetime::{DisplayDate, MaybeDisplayDate};
use crate::models::{DateRange, Phase, PhaseId, PhaseRange, PhaseStatus, Plan, SuggestedPhase};

impl fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", DisplayDate(self.start), DisplayDate(self.end))
    }
}

impl fmt::Display for PhaseRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {}",
            MaybeDisplayDate(self.start),
            MaybeDisplayDate(self.end)
        )?;
        if self.is_inverted() {
            write!(f, " (inverted)")?;
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.project)?;
        writeln!(f)?;
        writeln!(f, "- Window: {}", self.range)?;

        if self.phases.is_empty() {
            writeln!(f, "\nNo phases in this plan.")?;
            return Ok(());
        }

        writeln!(f, "\n## Phases")?;
        writeln!(f)?;
        for phase in &self.phases {
            write!(f, "{phase}")?;
        }

        let outside: Vec<PhaseId> = self.phases_outside_range().iter().map(|p| p.id).collect();
        if !outside.is_empty() {
            let ids: Vec<String> = outside.iter().map(ToString::to_string).collect();
            writeln!(f)?;
            writeln!(
                f,
                "Note: phases {} extend outside the project window.",
                ids.join(", ")
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.name,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Dates: {}", self.range)?;
        writeln!(f)
    }
}

impl fmt::Display for SuggestedPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}**: {}", self.name, self.range)
    }
}
