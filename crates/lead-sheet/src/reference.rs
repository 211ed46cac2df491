//! Reference codes (`AGS-YYMMDD-NNNN`)
//!
//! Codes are informational; they are neither unique nor persisted.

use crate::{LeadError, Result};
use chrono::NaiveDate;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Allowed range of the numeric suffix
pub const SUFFIX_RANGE: RangeInclusive<u16> = 1000..=9999;

/// Default prefix for codes
pub const DEFAULT_PREFIX: &str = "AGS";

/// Reference code for one submission
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceCode {
    prefix: String,
    date: NaiveDate,
    suffix: u16,
}

impl ReferenceCode {
    /// Build a code from its parts
    ///
    /// The prefix must be non-empty ASCII alphanumeric; the suffix must be
    /// four digits.
    pub fn new(prefix: &str, date: NaiveDate, suffix: u16) -> Result<Self> {
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(LeadError::InvalidReference(format!(
                "prefix must be ASCII alphanumeric, got {prefix:?}"
            )));
        }
        if !SUFFIX_RANGE.contains(&suffix) {
            return Err(LeadError::InvalidReference(format!(
                "suffix {suffix} outside {}..={}",
                SUFFIX_RANGE.start(),
                SUFFIX_RANGE.end()
            )));
        }
        Ok(Self {
            prefix: prefix.to_string(),
            date,
            suffix,
        })
    }

    /// Draw a code for `date` with a uniform suffix from `rng`
    #[cfg(feature = "random")]
    pub fn generate<R: rand::Rng + ?Sized>(prefix: &str, date: NaiveDate, rng: &mut R) -> Result<Self> {
        let suffix = rng.random_range(SUFFIX_RANGE);
        Self::new(prefix, date, suffix)
    }

    /// Draw a code for the local date with the thread random generator
    #[cfg(feature = "random")]
    pub fn today(prefix: &str) -> Result<Self> {
        let date = chrono::Local::now().date_naive();
        Self::generate(prefix, date, &mut rand::rng())
    }

    /// Build a code from a suffix in `[0, 1)`, as produced by `Math.random`
    pub fn from_unit_interval(prefix: &str, date: NaiveDate, unit: f64) -> Result<Self> {
        let span = (SUFFIX_RANGE.end() - SUFFIX_RANGE.start() + 1) as f64;
        let offset = (unit.clamp(0.0, 1.0) * span).floor().min(span - 1.0) as u16;
        Self::new(prefix, date, SUFFIX_RANGE.start() + offset)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn suffix(&self) -> u16 {
        self.suffix
    }

    /// Attachment filename: `<prefix>_<code>.pdf`
    pub fn attachment_filename(&self, prefix: &str) -> String {
        format!("{prefix}_{self}.pdf")
    }
}

impl fmt::Display for ReferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{:04}",
            self.prefix,
            self.date.format("%y%m%d"),
            self.suffix
        )
    }
}

impl FromStr for ReferenceCode {
    type Err = LeadError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || LeadError::InvalidReference(s.to_string());

        let mut parts = s.split('-');
        let (Some(prefix), Some(date), Some(suffix), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if date.len() != 6 || !date.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if suffix.len() != 4 || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(date, "%y%m%d").map_err(|_| invalid())?;
        let suffix: u16 = suffix.parse().map_err(|_| invalid())?;

        Self::new(prefix, date, suffix)
    }
}
