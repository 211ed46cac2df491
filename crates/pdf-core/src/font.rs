//! Standard Type1 fonts and their metrics
//!
//! The standard fonts are never embedded; viewers supply them. Widths come
//! from the Adobe core font metrics and are expressed in 1/1000 em.

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// One of the non-embedded standard fonts used by the writer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    TimesRoman,
    TimesBold,
    TimesItalic,
}

/// Font families available to a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// Helvetica regular/bold pair
    #[default]
    Sans,
    /// Times regular/bold/italic triple
    Serif,
}

impl FontFamily {
    /// All fonts registered for this family, in resource order
    pub fn variants(&self) -> &'static [StandardFont] {
        match self {
            FontFamily::Sans => &[StandardFont::Helvetica, StandardFont::HelveticaBold],
            FontFamily::Serif => &[
                StandardFont::TimesRoman,
                StandardFont::TimesBold,
                StandardFont::TimesItalic,
            ],
        }
    }

    /// Get the font for the specified weight and style
    ///
    /// Falls back to the closest available variant: the sans pair has no
    /// italic and the serif triple has no bold italic.
    pub fn get_variant(&self, weight: FontWeight, style: FontStyle) -> StandardFont {
        match (self, weight, style) {
            (FontFamily::Sans, FontWeight::Bold, _) => StandardFont::HelveticaBold,
            (FontFamily::Sans, FontWeight::Regular, _) => StandardFont::Helvetica,
            (FontFamily::Serif, FontWeight::Bold, _) => StandardFont::TimesBold,
            (FontFamily::Serif, FontWeight::Regular, FontStyle::Italic) => {
                StandardFont::TimesItalic
            }
            (FontFamily::Serif, FontWeight::Regular, FontStyle::Normal) => {
                StandardFont::TimesRoman
            }
        }
    }
}

impl StandardFont {
    /// PostScript name used as `/BaseFont`
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::TimesItalic => "Times-Italic",
        }
    }

    /// Font dictionary body for the font object
    pub fn font_dictionary(&self) -> String {
        format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
            self.base_font()
        )
    }

    /// Widths for the printable ASCII bytes 0x20..=0x7E
    ///
    /// Times-Bold and Times-Italic are measured with the Times-Roman table.
    fn ascii_widths(&self) -> &'static [u16; 95] {
        match self {
            StandardFont::Helvetica => &HELVETICA_WIDTHS,
            StandardFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
            StandardFont::TimesRoman | StandardFont::TimesBold | StandardFont::TimesItalic => {
                &TIMES_ROMAN_WIDTHS
            }
        }
    }

    /// Width used for encoded bytes outside printable ASCII
    pub fn average_width(&self) -> u16 {
        match self {
            StandardFont::Helvetica => 556,
            StandardFont::HelveticaBold => 611,
            StandardFont::TimesRoman | StandardFont::TimesBold | StandardFont::TimesItalic => 500,
        }
    }

    /// Width of one encoded byte in 1/1000 em
    pub fn byte_width(&self, byte: u8) -> u16 {
        match byte {
            0x20..=0x7E => self.ascii_widths()[(byte - 0x20) as usize],
            _ => self.average_width(),
        }
    }

    /// Width of WinAnsi-encoded text in points at the given size
    pub fn text_width_points(&self, encoded: &[u8], size: f32) -> f64 {
        let units: u32 = encoded.iter().map(|&b| self.byte_width(b) as u32).sum();
        units as f64 * size as f64 / 1000.0
    }
}

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_weight_default() {
        assert_eq!(FontWeight::default(), FontWeight::Regular);
    }

    #[test]
    fn test_font_style_default() {
        assert_eq!(FontStyle::default(), FontStyle::Normal);
    }

    #[test]
    fn test_sans_variants() {
        let family = FontFamily::Sans;
        assert_eq!(family.variants().len(), 2);
        assert_eq!(
            family.get_variant(FontWeight::Bold, FontStyle::Normal),
            StandardFont::HelveticaBold
        );
        // No italic in the sans pair
        assert_eq!(
            family.get_variant(FontWeight::Regular, FontStyle::Italic),
            StandardFont::Helvetica
        );
    }

    #[test]
    fn test_serif_variants() {
        let family = FontFamily::Serif;
        assert_eq!(family.variants().len(), 3);
        assert_eq!(
            family.get_variant(FontWeight::Regular, FontStyle::Italic),
            StandardFont::TimesItalic
        );
        assert_eq!(
            family.get_variant(FontWeight::Bold, FontStyle::Italic),
            StandardFont::TimesBold
        );
    }

    #[test]
    fn test_font_dictionary() {
        assert_eq!(
            StandardFont::HelveticaBold.font_dictionary(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
        );
    }

    #[test]
    fn test_known_widths() {
        assert_eq!(StandardFont::Helvetica.byte_width(b' '), 278);
        assert_eq!(StandardFont::Helvetica.byte_width(b'W'), 944);
        assert_eq!(StandardFont::Helvetica.byte_width(b'i'), 222);
        assert_eq!(StandardFont::HelveticaBold.byte_width(b'a'), 556);
        assert_eq!(StandardFont::TimesRoman.byte_width(b'0'), 500);
        assert_eq!(StandardFont::Helvetica.byte_width(b'~'), 584);
    }

    #[test]
    fn test_high_bytes_use_average() {
        assert_eq!(StandardFont::Helvetica.byte_width(0xE9), 556);
        assert_eq!(StandardFont::TimesItalic.byte_width(0x97), 500);
    }

    #[test]
    fn test_text_width_points() {
        // "AGS" in Helvetica-Bold: 722 + 778 + 667 = 2167 units
        let width = StandardFont::HelveticaBold.text_width_points(b"AGS", 10.0);
        assert!((width - 21.67).abs() < 1e-9);
        assert_eq!(StandardFont::Helvetica.text_width_points(b"", 12.0), 0.0);
    }
}
