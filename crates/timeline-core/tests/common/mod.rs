use jiff::civil::Date;
use timeline_core::{dates::parse_wire_date, DateRange};

/// Helper function to build a range from two wire-form dates
pub fn wire_range(start: &str, end: &str) -> DateRange {
    DateRange::new(wire_date(start), wire_date(end)).expect("valid test range")
}

/// Helper function to parse a wire-form date
pub fn wire_date(input: &str) -> Date {
    parse_wire_date(input).expect("valid test date")
}
