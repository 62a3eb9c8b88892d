//! Date partitioning: turning a project window into suggested phases.

use jiff::{civil::Date, Span};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{DateResultExt, Result, TimelineError},
    models::{DateRange, SuggestedPhase},
};

/// One named slice of a project window, as fractions of its duration.
///
/// Fractions are normally within `[0, 1]` but are not required to be;
/// values outside extrapolate past the window. Breakpoints in a set may
/// overlap or leave gaps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Breakpoint {
    /// Name given to the suggested phase
    pub name: String,
    /// Fraction of the window where the phase starts
    pub start: f64,
    /// Fraction of the window where the phase ends
    pub end: f64,
}

impl Breakpoint {
    /// Creates a breakpoint.
    pub fn new(name: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// The stock six-phase partition.
    ///
    /// Testing and UAT overlap between 0.75 and 0.85.
    pub fn reference() -> Vec<Breakpoint> {
        vec![
            Breakpoint::new("Planning", 0.0, 0.15),
            Breakpoint::new("Design", 0.15, 0.25),
            Breakpoint::new("Development", 0.25, 0.65),
            Breakpoint::new("Testing", 0.65, 0.85),
            Breakpoint::new("UAT", 0.75, 0.90),
            Breakpoint::new("Deployment", 0.90, 1.0),
        ]
    }

    /// Checks that the name is not blank and both fractions are finite.
    ///
    /// Order is not checked here: a backwards pair only yields an inverted
    /// range once applied to a window longer than zero days.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TimelineError::invalid_input("breakpoint.name")
                .with_reason("breakpoint name cannot be empty"));
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(TimelineError::invalid_input("breakpoint")
                .with_reason(format!("fractions of '{}' must be finite numbers", self.name)));
        }
        Ok(())
    }
}

/// Returns the date `fraction` of the way through `range`.
///
/// The whole-day duration of the range is multiplied by `fraction` and
/// floored, and that many days are added to `range.start`.
///
/// # Errors
///
/// * `TimelineError::InvalidInput` - When `fraction` is not finite
/// * `TimelineError::DateArithmetic` - When the result leaves the calendar
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use timeline_core::{models::DateRange, planner::compute_offset_date};
///
/// let range = DateRange::new(date(2025, 6, 16), date(2025, 10, 17))?;
/// assert_eq!(compute_offset_date(&range, 0.15)?, date(2025, 7, 4));
/// # Ok::<(), timeline_core::TimelineError>(())
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn compute_offset_date(range: &DateRange, fraction: f64) -> Result<Date> {
    if !fraction.is_finite() {
        return Err(TimelineError::invalid_input("fraction")
            .with_reason(format!("{fraction} is not a finite number")));
    }

    let days = range.duration_days()?;
    let offset = (days as f64 * fraction).floor() as i64;

    let span = Span::new()
        .try_days(offset)
        .date_context("offset does not fit in a span")?;
    range
        .start
        .checked_add(span)
        .date_context("offset date is outside the supported calendar")
}

/// Builds one suggested phase per breakpoint, in breakpoint order.
///
/// # Errors
///
/// * `TimelineError::InvalidRange` - When `range.start > range.end`, or when
///   a breakpoint's start date lands after its end date
/// * `TimelineError::InvalidInput` - When a breakpoint fails validation
/// * `TimelineError::DateArithmetic` - When a computed date overflows
pub fn generate_suggested_phases(
    range: &DateRange,
    breakpoints: &[Breakpoint],
) -> Result<Vec<SuggestedPhase>> {
    range.validate()?;

    debug!(
        "Partitioning {}..{} into {} phases",
        range.start,
        range.end,
        breakpoints.len()
    );

    breakpoints
        .iter()
        .map(|breakpoint| {
            breakpoint.validate()?;
            Ok(SuggestedPhase {
                name: breakpoint.name.clone(),
                range: DateRange::new(
                    compute_offset_date(range, breakpoint.start)?,
                    compute_offset_date(range, breakpoint.end)?,
                )?,
            })
        })
        .collect()
}
