//! Sheet configuration: branding, palette and layout constants

use crate::reference::DEFAULT_PREFIX;
use crate::{LeadError, Result};
use pdf_core::{Color, FontFamily};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Allowed line gap in points
pub const LINE_GAP_RANGE: RangeInclusive<f64> = 14.0..=18.0;

/// Allowed truncation width for project values, in characters
pub const VALUE_MAX_CHARS_RANGE: RangeInclusive<usize> = 60..=65;

/// Allowed wrap width for the description, in characters
pub const WRAP_WIDTH_RANGE: RangeInclusive<usize> = 75..=85;

/// An `#RRGGBB` color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Fill color for the PDF content stream
    pub fn to_color(self) -> Color {
        Color::from_rgb(self.r, self.g, self.b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        let hex = value.strip_prefix('#').unwrap_or(&value);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("invalid color {value:?}, expected #RRGGBB"));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Brand palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Header and footer bands
    pub navy: HexColor,
    /// Accent: brand suffix, section headings, accent bars
    pub orange: HexColor,
    /// Labels
    pub gray: HexColor,
    /// Values
    pub dark: HexColor,
    /// Block backgrounds
    pub light: HexColor,
    /// Separator rules
    pub rule: HexColor,
    /// Secondary text on navy bands
    pub muted: HexColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            navy: HexColor::new(0x0F, 0x17, 0x2A),
            orange: HexColor::new(0xE0, 0x67, 0x32),
            gray: HexColor::new(0x6B, 0x72, 0x80),
            dark: HexColor::new(0x1F, 0x29, 0x37),
            light: HexColor::new(0xF8, 0xFA, 0xFC),
            rule: HexColor::new(0xE5, 0xE7, 0xEB),
            muted: HexColor::new(0x94, 0xA3, 0xB8),
        }
    }
}

/// Font family selection in JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontChoice {
    #[default]
    Sans,
    Serif,
}

impl From<FontChoice> for FontFamily {
    fn from(choice: FontChoice) -> Self {
        match choice {
            FontChoice::Sans => FontFamily::Sans,
            FontChoice::Serif => FontFamily::Serif,
        }
    }
}

/// Everything the sheet needs besides the submission itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SheetConfig {
    /// First part of the logo text (navy band, white)
    pub brand_name: String,
    /// Second part of the logo text (accent color)
    pub brand_accent: String,
    /// Line under the logo
    pub subtitle: String,
    pub contact_email: String,
    pub contact_phone: String,
    /// Prefix of generated reference codes
    pub reference_prefix: String,
    /// Prefix of the attachment filename
    pub attachment_prefix: String,
    pub palette: Palette,
    pub font: FontChoice,
    /// Vertical distance between rows, in points
    pub line_gap: f64,
    /// Project values longer than this are cut with `...`
    pub value_max_chars: usize,
    /// Description wrap width in characters
    pub wrap_width: usize,
    /// Flate-compress the content stream
    pub compress: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            brand_name: "AGS".to_string(),
            brand_accent: "Concept".to_string(),
            subtitle: "Agence web & identité visuelle".to_string(),
            contact_email: "agsconcept@outlook.com".to_string(),
            contact_phone: "+33 7 82 92 86 20".to_string(),
            reference_prefix: DEFAULT_PREFIX.to_string(),
            attachment_prefix: "AGS_Demande".to_string(),
            palette: Palette::default(),
            font: FontChoice::default(),
            line_gap: 16.0,
            value_max_chars: 62,
            wrap_width: 80,
            compress: false,
        }
    }
}

impl SheetConfig {
    /// Parse a configuration; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check layout constants against their allowed ranges
    pub fn validate(&self) -> Result<()> {
        if !LINE_GAP_RANGE.contains(&self.line_gap) {
            return Err(LeadError::Config(format!(
                "lineGap {} outside {}..={}",
                self.line_gap,
                LINE_GAP_RANGE.start(),
                LINE_GAP_RANGE.end()
            )));
        }
        if !VALUE_MAX_CHARS_RANGE.contains(&self.value_max_chars) {
            return Err(LeadError::Config(format!(
                "valueMaxChars {} outside {}..={}",
                self.value_max_chars,
                VALUE_MAX_CHARS_RANGE.start(),
                VALUE_MAX_CHARS_RANGE.end()
            )));
        }
        if !WRAP_WIDTH_RANGE.contains(&self.wrap_width) {
            return Err(LeadError::Config(format!(
                "wrapWidth {} outside {}..={}",
                self.wrap_width,
                WRAP_WIDTH_RANGE.start(),
                WRAP_WIDTH_RANGE.end()
            )));
        }
        if self.brand_name.trim().is_empty() {
            return Err(LeadError::Config("brandName is empty".to_string()));
        }
        if self.reference_prefix.is_empty()
            || !self
                .reference_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        {
            return Err(LeadError::Config(format!(
                "referencePrefix must be ASCII alphanumeric, got {:?}",
                self.reference_prefix
            )));
        }
        if self.attachment_prefix.trim().is_empty() {
            return Err(LeadError::Config("attachmentPrefix is empty".to_string()));
        }
        Ok(())
    }
}
