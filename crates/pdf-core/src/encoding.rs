//! WinAnsiEncoding text encoding for the standard Type1 fonts
//!
//! Every `char` maps to exactly one byte. Printable ASCII maps to itself,
//! the rest goes through [`WIN_ANSI_TABLE`], and anything unmapped becomes
//! [`FALLBACK_BYTE`].

/// Byte emitted for characters the encoding cannot represent
pub const FALLBACK_BYTE: u8 = b'?';

/// Code points in 0x80..=0x9F that WinAnsiEncoding leaves undefined
const UNDEFINED_BYTES: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Non-ASCII code points with a WinAnsiEncoding glyph, sorted by code point
pub const WIN_ANSI_TABLE: &[(char, u8)] = &[
    ('\u{00A0}', 0xA0),
    ('¡', 0xA1),
    ('¢', 0xA2),
    ('£', 0xA3),
    ('¤', 0xA4),
    ('¥', 0xA5),
    ('¦', 0xA6),
    ('§', 0xA7),
    ('¨', 0xA8),
    ('©', 0xA9),
    ('ª', 0xAA),
    ('«', 0xAB),
    ('¬', 0xAC),
    ('\u{00AD}', 0xAD),
    ('®', 0xAE),
    ('¯', 0xAF),
    ('°', 0xB0),
    ('±', 0xB1),
    ('²', 0xB2),
    ('³', 0xB3),
    ('´', 0xB4),
    ('µ', 0xB5),
    ('¶', 0xB6),
    ('·', 0xB7),
    ('¸', 0xB8),
    ('¹', 0xB9),
    ('º', 0xBA),
    ('»', 0xBB),
    ('¼', 0xBC),
    ('½', 0xBD),
    ('¾', 0xBE),
    ('¿', 0xBF),
    ('À', 0xC0),
    ('Á', 0xC1),
    ('Â', 0xC2),
    ('Ã', 0xC3),
    ('Ä', 0xC4),
    ('Å', 0xC5),
    ('Æ', 0xC6),
    ('Ç', 0xC7),
    ('È', 0xC8),
    ('É', 0xC9),
    ('Ê', 0xCA),
    ('Ë', 0xCB),
    ('Ì', 0xCC),
    ('Í', 0xCD),
    ('Î', 0xCE),
    ('Ï', 0xCF),
    ('Ð', 0xD0),
    ('Ñ', 0xD1),
    ('Ò', 0xD2),
    ('Ó', 0xD3),
    ('Ô', 0xD4),
    ('Õ', 0xD5),
    ('Ö', 0xD6),
    ('×', 0xD7),
    ('Ø', 0xD8),
    ('Ù', 0xD9),
    ('Ú', 0xDA),
    ('Û', 0xDB),
    ('Ü', 0xDC),
    ('Ý', 0xDD),
    ('Þ', 0xDE),
    ('ß', 0xDF),
    ('à', 0xE0),
    ('á', 0xE1),
    ('â', 0xE2),
    ('ã', 0xE3),
    ('ä', 0xE4),
    ('å', 0xE5),
    ('æ', 0xE6),
    ('ç', 0xE7),
    ('è', 0xE8),
    ('é', 0xE9),
    ('ê', 0xEA),
    ('ë', 0xEB),
    ('ì', 0xEC),
    ('í', 0xED),
    ('î', 0xEE),
    ('ï', 0xEF),
    ('ð', 0xF0),
    ('ñ', 0xF1),
    ('ò', 0xF2),
    ('ó', 0xF3),
    ('ô', 0xF4),
    ('õ', 0xF5),
    ('ö', 0xF6),
    ('÷', 0xF7),
    ('ø', 0xF8),
    ('ù', 0xF9),
    ('ú', 0xFA),
    ('û', 0xFB),
    ('ü', 0xFC),
    ('ý', 0xFD),
    ('þ', 0xFE),
    ('ÿ', 0xFF),
    ('Œ', 0x8C),
    ('œ', 0x9C),
    ('Š', 0x8A),
    ('š', 0x9A),
    ('Ÿ', 0x9F),
    ('Ž', 0x8E),
    ('ž', 0x9E),
    ('ƒ', 0x83),
    ('ˆ', 0x88),
    ('˜', 0x98),
    ('–', 0x96),
    ('—', 0x97),
    ('‘', 0x91),
    ('’', 0x92),
    ('‚', 0x82),
    ('“', 0x93),
    ('”', 0x94),
    ('„', 0x84),
    ('†', 0x86),
    ('‡', 0x87),
    ('•', 0x95),
    ('…', 0x85),
    ('‰', 0x89),
    ('‹', 0x8B),
    ('›', 0x9B),
    ('€', 0x80),
    ('™', 0x99),
];

/// Encode a single character
pub fn encode_char(c: char) -> u8 {
    match c {
        ' '..='~' => c as u8,
        c if c.is_whitespace() => b' ',
        c if c.is_control() => FALLBACK_BYTE,
        c => WIN_ANSI_TABLE
            .binary_search_by(|(key, _)| key.cmp(&c))
            .map(|idx| WIN_ANSI_TABLE[idx].1)
            .unwrap_or(FALLBACK_BYTE),
    }
}

/// Encode text to WinAnsiEncoding bytes
///
/// Lossy by design of the target encoding: unmapped characters are replaced
/// with [`FALLBACK_BYTE`], so the result always has one byte per `char`.
///
/// # Examples
/// ```
/// use pdf_core::encode_win_ansi;
/// assert_eq!(encode_win_ansi("Café"), b"Caf\xE9".to_vec());
/// assert_eq!(encode_win_ansi("漢"), b"?".to_vec());
/// ```
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

/// Check whether a byte is a printable glyph in WinAnsiEncoding
pub fn is_printable_win_ansi(byte: u8) -> bool {
    match byte {
        0x20..=0x7E => true,
        0x80..=0xFF => !UNDEFINED_BYTES.contains(&byte),
        _ => false,
    }
}

/// Escape encoded bytes for use inside a PDF literal string `( ... )`
///
/// Parentheses and backslashes are the only bytes that need escaping since
/// the encoded text never contains line terminators.
pub fn escape_literal(encoded: &[u8]) -> Vec<u8> {
    let mut escaped = Vec::with_capacity(encoded.len() + 8);
    for &byte in encoded {
        if matches!(byte, b'(' | b')' | b'\\') {
            escaped.push(b'\\');
        }
        escaped.push(byte);
    }
    escaped
}
