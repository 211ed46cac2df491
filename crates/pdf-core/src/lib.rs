//! PDF Core - Minimal PDF 1.4 writer
//!
//! This crate provides functionality for:
//! - Building a single-page document from text runs and filled rectangles
//! - Standard Type1 fonts with WinAnsi encoding (nothing is embedded)
//! - Byte-exact serialization with a cross-reference table
//! - Optional Flate compression of the content stream
//!
//! # Example
//!
//! ```
//! use pdf_core::{Align, Color, FontFamily, PdfDocument};
//!
//! let mut doc = PdfDocument::new();
//! doc.register_font_family(FontFamily::Sans)?;
//! doc.set_font(FontFamily::Sans, 12.0)?;
//! doc.fill_rect(0.0, 792.0, 595.0, 50.0, Color::from_rgb(15, 23, 42))?;
//! doc.insert_text("Société Générale", 50.0, 700.0, Align::Left)?;
//! let bytes = doc.to_bytes()?;
//! assert!(bytes.starts_with(b"%PDF-1.4"));
//! # Ok::<(), pdf_core::PdfError>(())
//! ```

mod document;
mod encoding;
mod font;
mod text;
pub mod writer;

pub use document::{Color, ContentOp, DocumentInfo, PdfDocument, A4_HEIGHT, A4_WIDTH};
pub use encoding::{encode_char, encode_win_ansi, escape_literal, is_printable_win_ansi};
pub use font::{FontFamily, FontStyle, FontWeight, StandardFont};
pub use text::{format_number, generate_fill_operators, generate_text_operators, TextRenderContext};
pub use writer::AssembledPdf;

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Font already exists: {0}")]
    FontAlreadyExists(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid object graph: {0}")]
    InvalidObjectGraph(String),

    #[error("Compression error: {0}")]
    CompressionError(#[from] std::io::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_default() {
        assert_eq!(Align::default(), Align::Left);
    }

    #[test]
    fn test_error_messages() {
        let err = PdfError::FontNotFound("Sans".to_string());
        assert_eq!(err.to_string(), "Font not found: Sans");
        let err = PdfError::InvalidObjectGraph("gap".to_string());
        assert_eq!(err.to_string(), "Invalid object graph: gap");
    }
}
