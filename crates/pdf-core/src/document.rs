//! Single-page PDF document model
//!
//! A [`PdfDocument`] collects content operations and font resources; the
//! object graph is derived from it at serialization time and discarded
//! afterwards.

use crate::encoding::{encode_win_ansi, escape_literal};
use crate::text::{
    calculate_x_offset, generate_fill_operators, generate_text_operators, TextRenderContext,
};
use crate::writer::{assemble, AssembledPdf, IndirectObject, Trailer};
use crate::{Align, FontFamily, FontStyle, FontWeight, PdfError, Result, StandardFont};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

/// A4 width in points
pub const A4_WIDTH: f64 = 595.0;

/// A4 height in points
pub const A4_HEIGHT: f64 = 842.0;

const CATALOG_ID: u32 = 1;
const PAGES_ID: u32 = 2;
const PAGE_ID: u32 = 3;
const CONTENTS_ID: u32 = 4;
const FIRST_FONT_ID: u32 = 5;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create color from RGB values (0-255)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Red color
    pub fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// One drawing instruction of the page content stream
#[derive(Debug, Clone, PartialEq)]
pub enum ContentOp {
    /// Filled rectangle, origin at its bottom-left corner
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    /// Text run already encoded to WinAnsi bytes
    Text {
        /// Font resource name (e.g., "F1")
        font: String,
        size: f32,
        x: f64,
        y: f64,
        color: Color,
        encoded: Vec<u8>,
    },
}

impl ContentOp {
    /// Minimal operator form of this instruction
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            ContentOp::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => generate_fill_operators(*x, *y, *width, *height, color),
            ContentOp::Text {
                font,
                size,
                x,
                y,
                color,
                encoded,
            } => {
                let ctx = TextRenderContext {
                    font_name: font.clone(),
                    font_size: *size,
                    color: *color,
                };
                generate_text_operators(encoded, *x, *y, &ctx)
            }
        }
    }
}

/// Document information dictionary entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub producer: Option<String>,
    /// PDF date string, e.g. `D:20261018140500`
    pub creation_date: Option<String>,
}

impl DocumentInfo {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.producer.is_none()
            && self.creation_date.is_none()
    }

    /// Dictionary body; high bytes are written as octal escapes so the
    /// object stays ASCII
    fn to_dictionary(&self) -> String {
        let mut dict = String::from("<<");
        let entries = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Producer", &self.producer),
            ("CreationDate", &self.creation_date),
        ];
        for (key, value) in entries {
            if let Some(value) = value {
                dict.push_str(&format!(" /{key} ("));
                for byte in escape_literal(&encode_win_ansi(value)) {
                    if byte.is_ascii() {
                        dict.push(byte as char);
                    } else {
                        dict.push_str(&format!("\\{byte:03o}"));
                    }
                }
                dict.push(')');
            }
        }
        dict.push_str(" >>");
        dict
    }
}

/// Single-page PDF document built from content operations
#[derive(Debug, Clone)]
pub struct PdfDocument {
    /// Page width in points
    width: f64,
    /// Page height in points
    height: f64,
    /// Registered fonts; index `i` is resource `F{i + 1}`
    fonts: Vec<StandardFont>,
    /// Registered families
    families: Vec<FontFamily>,
    /// Current font family
    current_family: Option<FontFamily>,
    /// Current font weight
    current_weight: FontWeight,
    /// Current font style
    current_style: FontStyle,
    /// Current font size
    current_font_size: f32,
    /// Current text color
    current_text_color: Color,
    /// Content operations in drawing order
    operations: Vec<ContentOp>,
    /// Information dictionary
    info: DocumentInfo,
    /// Flate-compress the content stream
    compress: bool,
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocument {
    /// Create an empty A4 portrait document
    pub fn new() -> Self {
        Self::with_page_size(A4_WIDTH, A4_HEIGHT)
    }

    /// Create an empty document with a custom page size in points
    pub fn with_page_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fonts: Vec::new(),
            families: Vec::new(),
            current_family: None,
            current_weight: FontWeight::default(),
            current_style: FontStyle::default(),
            current_font_size: 12.0,
            current_text_color: Color::default(),
            operations: Vec::new(),
            info: DocumentInfo::default(),
            compress: false,
        }
    }

    /// Page width in points
    pub fn page_width(&self) -> f64 {
        self.width
    }

    /// Page height in points
    pub fn page_height(&self) -> f64 {
        self.height
    }

    /// Register every variant of a font family
    ///
    /// # Example
    /// ```
    /// use pdf_core::{FontFamily, PdfDocument};
    ///
    /// let mut doc = PdfDocument::new();
    /// doc.register_font_family(FontFamily::Sans).unwrap();
    /// assert_eq!(doc.font_resource(pdf_core::StandardFont::HelveticaBold), Some("F2".to_string()));
    /// ```
    pub fn register_font_family(&mut self, family: FontFamily) -> Result<()> {
        if self.families.contains(&family) {
            return Err(PdfError::FontAlreadyExists(format!("{family:?}")));
        }
        for font in family.variants() {
            if !self.fonts.contains(font) {
                self.fonts.push(*font);
            }
        }
        self.families.push(family);
        Ok(())
    }

    /// Resource name of a registered font (e.g., "F1")
    pub fn font_resource(&self, font: StandardFont) -> Option<String> {
        self.fonts
            .iter()
            .position(|f| *f == font)
            .map(|idx| format!("F{}", idx + 1))
    }

    /// Registered fonts in resource order
    pub fn fonts(&self) -> &[StandardFont] {
        &self.fonts
    }

    /// Set the current font family and size
    pub fn set_font(&mut self, family: FontFamily, size: f32) -> Result<()> {
        if !self.families.contains(&family) {
            return Err(PdfError::FontNotFound(format!("{family:?}")));
        }

        self.current_family = Some(family);
        self.current_font_size = size;

        Ok(())
    }

    /// Set only the font size (keeps current family/weight/style)
    pub fn set_font_size(&mut self, size: f32) -> Result<()> {
        if self.current_family.is_none() {
            return Err(PdfError::FontNotFound("No font family set".to_string()));
        }

        self.current_font_size = size;
        Ok(())
    }

    /// Set the font weight (keeps current family/size/style)
    pub fn set_font_weight(&mut self, weight: FontWeight) -> Result<()> {
        if self.current_family.is_none() {
            return Err(PdfError::FontNotFound("No font family set".to_string()));
        }

        self.current_weight = weight;
        Ok(())
    }

    /// Set the font style (keeps current family/size/weight)
    pub fn set_font_style(&mut self, style: FontStyle) -> Result<()> {
        if self.current_family.is_none() {
            return Err(PdfError::FontNotFound("No font family set".to_string()));
        }

        self.current_style = style;
        Ok(())
    }

    /// Set the text color
    pub fn set_text_color(&mut self, color: Color) {
        self.current_text_color = color;
    }

    /// Enable or disable Flate compression of the content stream
    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    /// Set the document information dictionary
    pub fn set_info(&mut self, info: DocumentInfo) {
        self.info = info;
    }

    /// Current font as a concrete standard font
    fn current_font(&self) -> Result<StandardFont> {
        let family = self
            .current_family
            .ok_or_else(|| PdfError::FontNotFound("No font family set".to_string()))?;
        Ok(family.get_variant(self.current_weight, self.current_style))
    }

    /// Width of text in points with the current font and size
    pub fn get_text_width(&self, text: &str) -> Result<f64> {
        let font = self.current_font()?;
        Ok(font.text_width_points(&encode_win_ansi(text), self.current_font_size))
    }

    /// Insert text at a position
    ///
    /// Text is encoded to WinAnsi here; characters outside the encoding are
    /// replaced, never rejected.
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `x` - Anchor X coordinate in points
    /// * `y` - Baseline Y coordinate in points (from bottom)
    /// * `align` - Alignment of the text relative to `x`
    pub fn insert_text(&mut self, text: &str, x: f64, y: f64, align: Align) -> Result<()> {
        check_finite(&[x, y])?;

        // Skip empty text - nothing to render
        if text.is_empty() {
            return Ok(());
        }

        let font = self.current_font()?;
        let resource = self
            .font_resource(font)
            .ok_or_else(|| PdfError::FontNotFound(font.base_font().to_string()))?;

        let encoded = encode_win_ansi(text);
        let text_width = font.text_width_points(&encoded, self.current_font_size);

        self.operations.push(ContentOp::Text {
            font: resource,
            size: self.current_font_size,
            x: x + calculate_x_offset(text_width, align),
            y,
            color: self.current_text_color,
            encoded,
        });

        Ok(())
    }

    /// Fill a rectangle given by its bottom-left corner and size
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) -> Result<()> {
        check_finite(&[x, y, width, height])?;
        if width < 0.0 || height < 0.0 {
            return Err(PdfError::InvalidGeometry(format!(
                "negative rectangle size {width}x{height}"
            )));
        }

        self.operations.push(ContentOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        });

        Ok(())
    }

    /// Content operations in drawing order
    pub fn operations(&self) -> &[ContentOp] {
        &self.operations
    }

    /// Uncompressed content stream body
    pub fn content_stream(&self) -> Vec<u8> {
        self.operations.iter().flat_map(ContentOp::to_bytes).collect()
    }

    /// Build the ordered object graph
    ///
    /// Ids: 1 catalog, 2 page tree, 3 page, 4 contents, 5.. fonts, then the
    /// information dictionary when any entry is set.
    pub fn to_objects(&self) -> Result<Vec<IndirectObject>> {
        let mut objects = Vec::with_capacity(5 + self.fonts.len());

        objects.push(IndirectObject::dictionary(
            CATALOG_ID,
            format!("<< /Type /Catalog /Pages {PAGES_ID} 0 R >>"),
        ));
        objects.push(IndirectObject::dictionary(
            PAGES_ID,
            format!("<< /Type /Pages /Kids [{PAGE_ID} 0 R] /Count 1 >>"),
        ));

        let font_entries: Vec<String> = (0..self.fonts.len() as u32)
            .map(|idx| format!("/F{} {} 0 R", idx + 1, FIRST_FONT_ID + idx))
            .collect();
        objects.push(IndirectObject::dictionary(
            PAGE_ID,
            format!(
                "<< /Type /Page /Parent {PAGES_ID} 0 R /MediaBox [0 0 {} {}] /Contents {CONTENTS_ID} 0 R /Resources << /Font << {} >> >> >>",
                crate::format_number(self.width),
                crate::format_number(self.height),
                font_entries.join(" ")
            ),
        ));

        let content = self.content_stream();
        let contents = if self.compress {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&content)?;
            IndirectObject::stream(CONTENTS_ID, "/Filter /FlateDecode", encoder.finish()?)
        } else {
            IndirectObject::stream(CONTENTS_ID, "", content)
        };
        objects.push(contents);

        for (idx, font) in self.fonts.iter().enumerate() {
            objects.push(IndirectObject::dictionary(
                FIRST_FONT_ID + idx as u32,
                font.font_dictionary(),
            ));
        }

        if !self.info.is_empty() {
            let id = objects.len() as u32 + 1;
            objects.push(IndirectObject::dictionary(id, self.info.to_dictionary()));
        }

        Ok(objects)
    }

    /// Serialize the document and keep the offset bookkeeping
    pub fn assemble(&self) -> Result<AssembledPdf> {
        let objects = self.to_objects()?;
        let info = (!self.info.is_empty()).then_some(objects.len() as u32);
        assemble(
            &objects,
            Trailer {
                root: CATALOG_ID,
                info,
            },
        )
    }

    /// Serialize the document to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.assemble()?.bytes)
    }
}

fn check_finite(values: &[f64]) -> Result<()> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(value) => Err(PdfError::InvalidGeometry(format!(
            "non-finite coordinate {value}"
        ))),
        None => Ok(()),
    }
}
