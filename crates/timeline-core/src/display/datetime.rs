//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

use crate::dates::DISPLAY_FORMAT;

/// A wrapper around a `Date` that formats it in display form (`DD/MM/YYYY`)
/// via the `Display` trait.
pub struct DisplayDate(pub Date);

impl fmt::Display for DisplayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime(DISPLAY_FORMAT))
    }
}

/// Formats an optional date, showing `unset` when absent.
pub struct MaybeDisplayDate(pub Option<Date>);

impl fmt::Display for MaybeDisplayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", DisplayDate(date)),
            None => write!(f, "unset"),
        }
    }
}
