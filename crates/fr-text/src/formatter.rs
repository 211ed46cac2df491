//! French date and list formatting

use crate::{FrTextError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// French month names (long, lower case as written mid-sentence)
const FR_MONTHS_LONG: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// French text formatting utilities
pub struct FrFormatter;

impl FrFormatter {
    /// Format a date in long French format
    pub fn format_date_long(year: i32, month: u32, day: u32) -> Result<String> {
        format_date_long(year, month, day)
    }

    /// Format a date in short French format
    pub fn format_date_short(year: i32, month: u32, day: u32) -> Result<String> {
        format_date_short(year, month, day)
    }

    /// Join tags into a comma-separated list
    pub fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
        join_tags(tags)
    }
}

fn checked_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| FrTextError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

/// Format a date in long French format (e.g., "18 octobre 2026")
///
/// # Arguments
/// * `year` - Year
/// * `month` - Month (1-12)
/// * `day` - Day of month
pub fn format_date_long(year: i32, month: u32, day: u32) -> Result<String> {
    let date = checked_date(year, month, day)?;
    Ok(long_date(date))
}

fn long_date(date: NaiveDate) -> String {
    let month_name = FR_MONTHS_LONG[date.month0() as usize];
    format!("{} {month_name} {}", date.day(), date.year())
}

/// Format a date in short French format (e.g., "18/10/2026")
pub fn format_date_short(year: i32, month: u32, day: u32) -> Result<String> {
    let date = checked_date(year, month, day)?;
    Ok(format!(
        "{:02}/{:02}/{:04}",
        date.day(),
        date.month(),
        date.year()
    ))
}

/// Format a timestamp as "18 octobre 2026 à 14:05"
pub fn format_datetime_long(datetime: NaiveDateTime) -> String {
    format!(
        "{} à {:02}:{:02}",
        long_date(datetime.date()),
        datetime.hour(),
        datetime.minute()
    )
}

/// Join tags with ", ", skipping blank entries
pub fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
