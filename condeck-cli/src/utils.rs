//! Date parsing helpers.

use anyhow::{Result, anyhow};
use chrono::NaiveDate;

/// Parse a strict YYYY-MM-DD calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

/// Parse YYYY-MM as the first day of that month.
pub fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid month '{}'. Expected YYYY-MM", s))
}
