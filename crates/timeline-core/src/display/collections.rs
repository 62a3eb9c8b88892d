//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::SuggestedPhase;

/// Newtype wrapper for displaying partitioner suggestions.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use timeline_core::{
///     display::SuggestedPhases,
///     models::{DateRange, SuggestedPhase},
/// };
///
/// let suggestions = SuggestedPhases(vec![SuggestedPhase {
///     name: "Planning".to_string(),
///     range: DateRange::new(date(2025, 6, 16), date(2025, 7, 4))?,
/// }]);
///
/// let output = format!("{}", suggestions);
/// assert!(output.contains("**Planning**: 16/06/2025 → 04/07/2025"));
/// # Ok::<(), timeline_core::TimelineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedPhases(pub Vec<SuggestedPhase>);

impl SuggestedPhases {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of suggestions in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the suggestions.
    pub fn iter(&self) -> std::slice::Iter<'_, SuggestedPhase> {
        self.0.iter()
    }
}

impl Index<usize> for SuggestedPhases {
    type Output = SuggestedPhase;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for SuggestedPhases {
    type Item = SuggestedPhase;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SuggestedPhases {
    type Item = &'a SuggestedPhase;
    type IntoIter = std::slice::Iter<'a, SuggestedPhase>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SuggestedPhases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No phases suggested.")
        } else {
            for suggestion in &self.0 {
                write!(f, "{suggestion}")?;
            }
            Ok(())
        }
    }
}
