//! Conversion between calendar dates and their string forms.
//!
//! Two forms are in use at the edges of the system:
//!
//! - **Wire form** `YYYY-MM-DD`: input fields and the plan backend
//! - **Display form** `DD/MM/YYYY`: tables and summaries
//!
//! Both round-trip losslessly for valid dates. Malformed input is reported
//! as [`TimelineError::DateParse`].
//!
//! ```rust
//! use timeline_core::dates;
//!
//! assert_eq!(dates::wire_to_display("2025-07-04")?, "04/07/2025");
//! assert_eq!(dates::display_to_wire("04/07/2025")?, "2025-07-04");
//! # Ok::<(), timeline_core::TimelineError>(())
//! ```

use jiff::civil::Date;

use crate::error::{Result, TimelineError};

/// strftime pattern of the wire form.
pub const WIRE_FORMAT: &str = "%Y-%m-%d";

/// strftime pattern of the display form.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_wire_date(input: &str) -> Result<Date> {
    parse_with(WIRE_FORMAT, input)
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_wire_date(date: Date) -> String {
    date.strftime(WIRE_FORMAT).to_string()
}

/// Parses a `DD/MM/YYYY` date.
pub fn parse_display_date(input: &str) -> Result<Date> {
    parse_with(DISPLAY_FORMAT, input)
}

/// Formats a date as `DD/MM/YYYY`.
pub fn format_display_date(date: Date) -> String {
    date.strftime(DISPLAY_FORMAT).to_string()
}

/// Rewrites a display-form date into wire form.
pub fn display_to_wire(input: &str) -> Result<String> {
    parse_display_date(input).map(format_wire_date)
}

/// Rewrites a wire-form date into display form.
pub fn wire_to_display(input: &str) -> Result<String> {
    parse_wire_date(input).map(format_display_date)
}

fn parse_with(format: &str, input: &str) -> Result<Date> {
    Date::strptime(format, input.trim()).map_err(|e| TimelineError::date_parse(input, e))
}
