//! Date range types for projects and phases.

use jiff::{civil::Date, Unit};
use serde::{Deserialize, Serialize};

use crate::error::{DateResultExt, Result, TimelineError};

/// A closed calendar range with `start <= end`.
///
/// Construct through [`DateRange::new`] to have the ordering checked. Ranges
/// that arrive through deserialization or struct literals can be re-checked
/// with [`DateRange::validate`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// First day of the range
    pub start: Date,

    /// Last day of the range
    pub end: Date,
}

impl DateRange {
    /// Creates a range, failing with `InvalidRange` when `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::civil::date;
    /// use timeline_core::models::DateRange;
    ///
    /// let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 11))?;
    /// assert_eq!(range.duration_days()?, 10);
    ///
    /// assert!(DateRange::new(date(2025, 2, 1), date(2025, 1, 1)).is_err());
    /// # Ok::<(), timeline_core::TimelineError>(())
    /// ```
    pub fn new(start: Date, end: Date) -> Result<Self> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Checks the `start <= end` invariant.
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(TimelineError::invalid_range(self.start, self.end));
        }
        Ok(())
    }

    /// Whole days elapsed from `start` to `end`.
    pub fn duration_days(&self) -> Result<i64> {
        let span = self
            .start
            .until((Unit::Day, self.end))
            .date_context("failed to measure date range")?;
        Ok(i64::from(span.get_days()))
    }

    /// Whether `date` lies within the range, boundaries included.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Range of a committed phase.
///
/// Either endpoint may be unset while the phase is being filled in, and
/// point updates may leave `start` after `end`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhaseRange {
    /// First day of the phase, if chosen
    #[serde(default)]
    pub start: Option<Date>,

    /// Last day of the phase, if chosen
    #[serde(default)]
    pub end: Option<Date>,
}

impl PhaseRange {
    /// Creates a phase range from optional endpoints.
    pub fn new(start: Option<Date>, end: Option<Date>) -> Self {
        Self { start, end }
    }

    /// Returns the fully specified range, or `None` when an endpoint is unset.
    ///
    /// An inverted range is still returned as-is; use [`DateRange::validate`]
    /// on the result to check ordering.
    pub fn as_complete(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(DateRange { start, end }),
            _ => None,
        }
    }

    /// Whether `start` is set, `end` is set and `start > end`.
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start > end)
    }
}

impl From<DateRange> for PhaseRange {
    fn from(range: DateRange) -> Self {
        Self {
            start: Some(range.start),
            end: Some(range.end),
        }
    }
}
