//! Content stream operator generation

use crate::document::Color;
use crate::encoding::escape_literal;
use crate::Align;

/// Context for rendering text
pub struct TextRenderContext {
    /// PDF font resource name (e.g., "F1")
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
    /// Text color (RGB)
    pub color: Color,
}

/// Calculate X offset for text alignment
///
/// # Arguments
/// * `text_width` - Width of text in points
/// * `align` - Desired alignment relative to the anchor point
pub fn calculate_x_offset(text_width: f64, align: Align) -> f64 {
    match align {
        Align::Left => 0.0,
        Align::Center => -text_width / 2.0,
        Align::Right => -text_width,
    }
}

/// Format a number for a content stream
///
/// At most three decimals, trailing zeros and a trailing dot removed.
///
/// # Examples
/// ```
/// use pdf_core::format_number;
/// assert_eq!(format_number(100.0), "100");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(15.0 / 255.0), "0.059");
/// ```
pub fn format_number(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Generate the non-stroking color operator (`r g b rg`)
fn color_operator(color: &Color) -> String {
    format!(
        "{} {} {} rg\n",
        format_number(color.r as f64),
        format_number(color.g as f64),
        format_number(color.b as f64)
    )
}

/// Generate PDF operators for a filled rectangle
///
/// # Returns
/// `r g b rg` followed by `x y w h re f`
pub fn generate_fill_operators(x: f64, y: f64, width: f64, height: f64, color: &Color) -> Vec<u8> {
    let mut ops = color_operator(color);
    ops.push_str(&format!(
        "{} {} {} {} re f\n",
        format_number(x),
        format_number(y),
        format_number(width),
        format_number(height)
    ));
    ops.into_bytes()
}

/// Generate PDF operators for text insertion
///
/// # Arguments
/// * `encoded` - WinAnsi-encoded text, escaped here for the literal string
/// * `x` - X coordinate in points (PDF coordinates, from left)
/// * `y` - Y coordinate in points (PDF coordinates, from bottom)
/// * `ctx` - Text rendering context
///
/// # Returns
/// `r g b rg` followed by `BT /F1 12 Tf x y Td (text) Tj ET`
pub fn generate_text_operators(encoded: &[u8], x: f64, y: f64, ctx: &TextRenderContext) -> Vec<u8> {
    let mut ops = color_operator(&ctx.color).into_bytes();

    ops.extend_from_slice(
        format!(
            "BT /{} {} Tf {} {} Td (",
            ctx.font_name,
            format_number(ctx.font_size as f64),
            format_number(x),
            format_number(y)
        )
        .as_bytes(),
    );
    ops.extend_from_slice(&escape_literal(encoded));
    ops.extend_from_slice(b") Tj ET\n");

    ops
}
