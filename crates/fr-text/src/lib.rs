//! FR Text - French text helpers for generated documents
//!
//! This crate provides:
//! - French date formatting ("18 octobre 2026", "18/10/2026")
//! - Tag list joining
//! - Character-count word wrapping and truncation
//!
//! # Example
//!
//! ```
//! use fr_text::{format_date_long, join_tags, word_wrap};
//!
//! assert_eq!(format_date_long(2026, 10, 18)?, "18 octobre 2026");
//! assert_eq!(join_tags(&["Site vitrine", "SEO"]), "Site vitrine, SEO");
//! assert_eq!(word_wrap("Une ligne", 80).len(), 1);
//! # Ok::<(), fr_text::FrTextError>(())
//! ```

mod formatter;
mod linebreak;

pub use formatter::FrFormatter;
pub use formatter::{format_date_long, format_date_short, format_datetime_long, join_tags};
pub use linebreak::{truncate_chars, word_wrap, ELLIPSIS};

use thiserror::Error;

/// Errors that can occur during French text processing
#[derive(Debug, Error)]
pub enum FrTextError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Result type for French text operations
pub type Result<T> = std::result::Result<T, FrTextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message() {
        let err = format_date_short(2026, 2, 30).unwrap_err();
        assert_eq!(err.to_string(), "Invalid date: 2026-02-30");
    }

    #[test]
    fn test_wrap_then_truncate() {
        let lines = word_wrap("un deux trois quatre", 9);
        assert_eq!(lines, vec!["un deux", "trois", "quatre"]);
        assert_eq!(truncate_chars(&lines[0], 5), "un...");
    }
}
