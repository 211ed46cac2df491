//! Line wrapping and truncation by character count
//!
//! Widths are counted in `char`s, not bytes, so accented letters count once.

/// Marker appended to shortened text
pub const ELLIPSIS: &str = "...";

/// Wrap text into lines of at most `width` characters
///
/// Explicit newlines start a new paragraph; empty lines between paragraphs
/// are kept. Words longer than `width` are split. Blank input gives no lines.
///
/// # Example
/// ```
/// use fr_text::word_wrap;
///
/// let lines = word_wrap("Refonte du site vitrine", 10);
/// assert_eq!(lines, vec!["Refonte du", "site", "vitrine"]);
/// ```
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let width = width.max(1);

    let mut lines = Vec::new();
    for paragraph in text.trim().lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            // Hard-split words that can never fit
            while word.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if current_len == 0 {
                word.len()
            } else {
                current_len + 1 + word.len()
            };
            if needed > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }

        if current_len > 0 || paragraph.trim().is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Truncate to at most `max_chars` characters, ending with `...` when cut
///
/// # Example
/// ```
/// use fr_text::truncate_chars;
///
/// assert_eq!(truncate_chars("Site vitrine", 20), "Site vitrine");
/// assert_eq!(truncate_chars("Site vitrine", 7), "Site...");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.truncate(truncated.trim_end().len());
    truncated.push_str(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_blank_is_empty() {
        assert!(word_wrap("", 80).is_empty());
        assert!(word_wrap("   \n\t ", 80).is_empty());
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        assert_eq!(word_wrap("Bonjour", 80), vec!["Bonjour"]);
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "Nous souhaitons refondre notre site et ajouter une boutique en ligne";
        let lines = word_wrap(text, 20);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        // 10 chars, 13 bytes
        let lines = word_wrap("éééé éééée", 10);
        assert_eq!(lines, vec!["éééé éééée"]);
    }

    #[test]
    fn test_wrap_keeps_paragraphs() {
        let lines = word_wrap("Ligne un\n\nLigne deux", 80);
        assert_eq!(lines, vec!["Ligne un", "", "Ligne deux"]);
    }

    #[test]
    fn test_wrap_splits_long_word() {
        let lines = word_wrap("ab abcdefghij", 4);
        assert_eq!(lines, vec!["ab", "abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abcdef", 5), "ab...");
        assert_eq!(truncate_chars("Éléments", 6), "Élé...");
    }

    #[test]
    fn test_truncate_trims_before_ellipsis() {
        assert_eq!(truncate_chars("ab cdefgh", 6), "ab...");
    }
}
