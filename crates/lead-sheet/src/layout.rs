//! Letterhead layout
//!
//! Sections are drawn top to bottom. Each section takes the current
//! [`Cursor`] and returns the next one; fixed zones (header, title bar,
//! footer) use absolute positions. Variable-height blocks compute their
//! height from content before anything is drawn.

use crate::config::SheetConfig;
use crate::reference::ReferenceCode;
use crate::submission::LeadSubmission;
use crate::Result;
use chrono::{Datelike, NaiveDateTime};
use fr_text::{format_datetime_long, join_tags, truncate_chars, word_wrap, ELLIPSIS};
use pdf_core::{Align, Color, FontFamily, FontWeight, PdfDocument, A4_HEIGHT, A4_WIDTH};

/// Left and right page margin
pub const MARGIN: f64 = 50.0;

/// Usable width between margins
pub const CONTENT_WIDTH: f64 = A4_WIDTH - 2.0 * MARGIN;

/// Inner vertical padding of accent-bar blocks
pub const BLOCK_PADDING: f64 = 10.0;

/// Width of the accent bar on the left edge of a block
pub const ACCENT_BAR_WIDTH: f64 = 4.0;

/// Space left under a block before the next section
pub const SECTION_GAP: f64 = 18.0;

/// Shown for missing values
pub const PLACEHOLDER: &str = "—";

/// Shown when the client lists no existing assets
pub const NO_ASSETS: &str = "Aucun";

const HEADER_HEIGHT: f64 = 90.0;
const TITLE_BAR_Y: f64 = 702.0;
const TITLE_BAR_HEIGHT: f64 = 28.0;
const BODY_TOP: f64 = 676.0;
const HEADING_GAP: f64 = 12.0;
const LABEL_X: f64 = MARGIN + 14.0;
const VALUE_X: f64 = MARGIN + 130.0;
const SEPARATOR_HEIGHT: f64 = 0.75;
const SEPARATOR_GAP: f64 = 22.0;
const FOOTER_HEIGHT: f64 = 60.0;
const FOOTER_LINE_HEIGHT: f64 = 2.0;

/// Lowest y a description block may reach; below it sit the thank-you
/// note and the footer band
pub const DESCRIPTION_FLOOR: f64 = 130.0;

const LABEL_SIZE: f32 = 9.0;
const HEADING_SIZE: f32 = 11.0;

/// Vertical layout position in points from the bottom of the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    y: f64,
}

impl Cursor {
    /// Cursor at an absolute position
    pub fn at(y: f64) -> Self {
        Self { y }
    }

    pub fn y(self) -> f64 {
        self.y
    }

    /// Cursor moved down by `dy` points
    pub fn down(self, dy: f64) -> Self {
        Self { y: self.y - dy }
    }
}

/// Everything a section needs to draw itself
pub struct LayoutContext<'a> {
    pub submission: &'a LeadSubmission,
    pub reference: &'a ReferenceCode,
    pub issued_at: NaiveDateTime,
    pub config: &'a SheetConfig,
}

impl LayoutContext<'_> {
    fn family(&self) -> FontFamily {
        self.config.font.into()
    }

    fn gap(&self) -> f64 {
        self.config.line_gap
    }
}

#[derive(Debug, Clone, Copy)]
struct Style {
    weight: FontWeight,
    size: f32,
    color: Color,
}

impl Style {
    fn regular(size: f32, color: Color) -> Self {
        Self {
            weight: FontWeight::Regular,
            size,
            color,
        }
    }

    fn bold(size: f32, color: Color) -> Self {
        Self {
            weight: FontWeight::Bold,
            size,
            color,
        }
    }
}

fn apply_style(doc: &mut PdfDocument, family: FontFamily, style: Style) -> Result<()> {
    doc.set_font(family, style.size)?;
    doc.set_font_weight(style.weight)?;
    doc.set_text_color(style.color);
    Ok(())
}

fn draw_text(
    doc: &mut PdfDocument,
    ctx: &LayoutContext,
    text: &str,
    x: f64,
    y: f64,
    style: Style,
    align: Align,
) -> Result<()> {
    apply_style(doc, ctx.family(), style)?;
    doc.insert_text(text, x, y, align)?;
    Ok(())
}

/// Height of an accent-bar block holding `rows` lines
pub fn accent_box_height(rows: usize, line_gap: f64) -> f64 {
    rows as f64 * line_gap + 2.0 * BLOCK_PADDING
}

/// Height of the description block for `lines` wrapped lines
pub fn description_box_height(lines: usize, line_gap: f64) -> f64 {
    accent_box_height(lines, line_gap)
}

/// Baseline of row `index` inside a block whose top edge is at `top`
fn row_baseline(top: f64, index: usize, line_gap: f64) -> f64 {
    top - BLOCK_PADDING - (index + 1) as f64 * line_gap + 4.0
}

/// Number of description lines that fit between `top` and the floor
pub fn max_description_lines(top: f64, line_gap: f64) -> usize {
    let available = top - DESCRIPTION_FLOOR - 2.0 * BLOCK_PADDING;
    if available <= 0.0 {
        0
    } else {
        (available / line_gap).floor() as usize
    }
}

/// Wrap a description and clip it to `max_lines`
///
/// A clipped description ends with `...` on its last kept line.
pub fn description_lines(description: &str, wrap_width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = word_wrap(description, wrap_width);
    if lines.len() > max_lines {
        log::warn!(
            "description clipped from {} to {} lines",
            lines.len(),
            max_lines
        );
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let kept: String = last
                .chars()
                .take(wrap_width.saturating_sub(ELLIPSIS.len()))
                .collect();
            *last = format!("{}{ELLIPSIS}", kept.trim_end());
        }
    }
    lines
}

/// Value as shown on the sheet: placeholder when blank, cut when too long
fn display_value(label: &str, value: &str, max_chars: usize) -> String {
    let value = value.trim();
    if value.is_empty() {
        return PLACEHOLDER.to_string();
    }
    let shown = truncate_chars(value, max_chars);
    if shown.len() != value.len() {
        log::warn!("{label} truncated to {max_chars} characters");
    }
    shown
}

/// Draw every section of the sheet; returns the cursor under the last
/// body section
pub fn layout_sheet(doc: &mut PdfDocument, ctx: &LayoutContext) -> Result<Cursor> {
    header(doc, ctx)?;
    let cursor = title_bar(doc, ctx)?;
    let cursor = client_block(doc, ctx, cursor)?;
    let cursor = separator(doc, ctx, cursor)?;
    let cursor = project_block(doc, ctx, cursor)?;
    let cursor = description_block(doc, ctx, cursor)?;
    let cursor = thank_you(doc, ctx, cursor)?;
    footer(doc, ctx)?;
    Ok(cursor)
}

/// Navy band with logo text, subtitle, reference and issue date
fn header(doc: &mut PdfDocument, ctx: &LayoutContext) -> Result<()> {
    let palette = &ctx.config.palette;
    let band_y = A4_HEIGHT - HEADER_HEIGHT;
    doc.fill_rect(0.0, band_y, A4_WIDTH, HEADER_HEIGHT, palette.navy.to_color())?;

    let logo = Style::bold(26.0, Color::white());
    draw_text(doc, ctx, &ctx.config.brand_name, MARGIN, 800.0, logo, Align::Left)?;
    let accent_x = MARGIN + doc.get_text_width(&format!("{} ", ctx.config.brand_name))?;
    let accent = Style {
        color: palette.orange.to_color(),
        ..logo
    };
    draw_text(doc, ctx, &ctx.config.brand_accent, accent_x, 800.0, accent, Align::Left)?;

    let muted = Style::regular(LABEL_SIZE, palette.muted.to_color());
    draw_text(doc, ctx, &ctx.config.subtitle, MARGIN, 780.0, muted, Align::Left)?;

    let right = MARGIN + CONTENT_WIDTH;
    draw_text(
        doc,
        ctx,
        &format!("Réf: {}", ctx.reference),
        right,
        805.0,
        Style::bold(10.0, Color::white()),
        Align::Right,
    )?;
    draw_text(
        doc,
        ctx,
        &format_datetime_long(ctx.issued_at),
        right,
        789.0,
        muted,
        Align::Right,
    )?;

    log::debug!("header drawn, band at y={band_y}");
    Ok(())
}

/// Accent bar with the sheet title; body starts below it
fn title_bar(doc: &mut PdfDocument, ctx: &LayoutContext) -> Result<Cursor> {
    doc.fill_rect(
        MARGIN,
        TITLE_BAR_Y,
        CONTENT_WIDTH,
        TITLE_BAR_HEIGHT,
        ctx.config.palette.orange.to_color(),
    )?;
    draw_text(
        doc,
        ctx,
        "FICHE DE DEMANDE CLIENT",
        MARGIN + 12.0,
        TITLE_BAR_Y + 10.0,
        Style::bold(12.0, Color::white()),
        Align::Left,
    )?;
    Ok(Cursor::at(BODY_TOP))
}

/// Section heading; returns the cursor at the top edge of the block below
fn heading(doc: &mut PdfDocument, ctx: &LayoutContext, title: &str, cursor: Cursor) -> Result<Cursor> {
    let style = Style::bold(HEADING_SIZE, ctx.config.palette.orange.to_color());
    draw_text(doc, ctx, title, MARGIN, cursor.y(), style, Align::Left)?;
    Ok(cursor.down(HEADING_GAP))
}

/// Light block with an accent bar on its left edge
fn accent_box(doc: &mut PdfDocument, ctx: &LayoutContext, top: Cursor, height: f64) -> Result<()> {
    let palette = &ctx.config.palette;
    let bottom = top.y() - height;
    doc.fill_rect(MARGIN, bottom, CONTENT_WIDTH, height, palette.light.to_color())?;
    doc.fill_rect(MARGIN, bottom, ACCENT_BAR_WIDTH, height, palette.orange.to_color())?;
    Ok(())
}

/// Heading plus an accent-bar block of label/value rows
fn labelled_rows(
    doc: &mut PdfDocument,
    ctx: &LayoutContext,
    title: &str,
    rows: &[(&str, String)],
    cursor: Cursor,
) -> Result<Cursor> {
    let top = heading(doc, ctx, title, cursor)?;
    let height = accent_box_height(rows.len(), ctx.gap());
    accent_box(doc, ctx, top, height)?;

    let palette = &ctx.config.palette;
    let label_style = Style::regular(LABEL_SIZE, palette.gray.to_color());
    let value_style = Style::bold(LABEL_SIZE, palette.dark.to_color());
    for (i, (label, value)) in rows.iter().enumerate() {
        let y = row_baseline(top.y(), i, ctx.gap());
        draw_text(doc, ctx, label, LABEL_X, y, label_style, Align::Left)?;
        draw_text(doc, ctx, value, VALUE_X, y, value_style, Align::Left)?;
    }

    let next = top.down(height + SECTION_GAP);
    log::debug!("{title}: {} rows, cursor {} -> {}", rows.len(), cursor.y(), next.y());
    Ok(next)
}

fn client_block(doc: &mut PdfDocument, ctx: &LayoutContext, cursor: Cursor) -> Result<Cursor> {
    let lead = ctx.submission;
    let max = ctx.config.value_max_chars;
    let rows = [
        ("Nom complet", display_value("Nom complet", &lead.full_name, max)),
        ("Société", display_value("Société", &lead.company, max)),
        ("Email", display_value("Email", &lead.email, max)),
        ("Téléphone", display_value("Téléphone", &lead.phone, max)),
        ("Code postal", display_value("Code postal", &lead.postal_code, max)),
        ("Pays", display_value("Pays", &lead.country, max)),
    ];
    labelled_rows(doc, ctx, "INFORMATIONS CLIENT", &rows, cursor)
}

/// Thin rule between the client and project blocks
fn separator(doc: &mut PdfDocument, ctx: &LayoutContext, cursor: Cursor) -> Result<Cursor> {
    doc.fill_rect(
        MARGIN,
        cursor.y(),
        CONTENT_WIDTH,
        SEPARATOR_HEIGHT,
        ctx.config.palette.rule.to_color(),
    )?;
    Ok(cursor.down(SEPARATOR_GAP))
}

fn project_block(doc: &mut PdfDocument, ctx: &LayoutContext, cursor: Cursor) -> Result<Cursor> {
    let lead = ctx.submission;
    let max = ctx.config.value_max_chars;
    let assets = if lead.existing_assets.iter().all(|a| a.trim().is_empty()) {
        NO_ASSETS.to_string()
    } else {
        display_value("Éléments existants", &join_tags(&lead.existing_assets), max)
    };
    let rows = [
        (
            "Type de projet",
            display_value("Type de projet", &join_tags(&lead.project_type), max),
        ),
        ("Budget", display_value("Budget", &join_tags(&lead.budget), max)),
        ("Délai", display_value("Délai", &join_tags(&lead.deadline), max)),
        ("Éléments existants", assets),
    ];
    labelled_rows(doc, ctx, "DÉTAILS DU PROJET", &rows, cursor)
}

/// Wrapped free-text block, skipped entirely when the description is blank
fn description_block(doc: &mut PdfDocument, ctx: &LayoutContext, cursor: Cursor) -> Result<Cursor> {
    let Some(description) = ctx.submission.description_text() else {
        return Ok(cursor);
    };

    let top = cursor.down(HEADING_GAP);
    let max_lines = max_description_lines(top.y(), ctx.gap());
    let lines = description_lines(description, ctx.config.wrap_width, max_lines);
    if lines.is_empty() {
        return Ok(cursor);
    }

    let top = heading(doc, ctx, "DESCRIPTION", cursor)?;
    let height = description_box_height(lines.len(), ctx.gap());
    accent_box(doc, ctx, top, height)?;

    let style = Style::regular(LABEL_SIZE, ctx.config.palette.dark.to_color());
    for (i, line) in lines.iter().enumerate() {
        let y = row_baseline(top.y(), i, ctx.gap());
        draw_text(doc, ctx, line, LABEL_X, y, style, Align::Left)?;
    }

    let next = top.down(height + SECTION_GAP);
    log::debug!("description: {} lines, cursor -> {}", lines.len(), next.y());
    Ok(next)
}

/// Two-line closing note
fn thank_you(doc: &mut PdfDocument, ctx: &LayoutContext, cursor: Cursor) -> Result<Cursor> {
    let palette = &ctx.config.palette;
    draw_text(
        doc,
        ctx,
        "Merci pour votre confiance.",
        MARGIN,
        cursor.y(),
        Style::bold(10.0, palette.navy.to_color()),
        Align::Left,
    )?;
    let cursor = cursor.down(ctx.gap());
    draw_text(
        doc,
        ctx,
        "Notre équipe analyse votre projet et reviendra vers vous dans les 24 à 48 heures.",
        MARGIN,
        cursor.y(),
        Style::regular(LABEL_SIZE, palette.gray.to_color()),
        Align::Left,
    )?;
    Ok(cursor.down(ctx.gap()))
}

/// Navy band with generator notice, contact details and reference
fn footer(doc: &mut PdfDocument, ctx: &LayoutContext) -> Result<()> {
    let palette = &ctx.config.palette;
    doc.fill_rect(0.0, 0.0, A4_WIDTH, FOOTER_HEIGHT, palette.navy.to_color())?;
    doc.fill_rect(
        0.0,
        FOOTER_HEIGHT,
        A4_WIDTH,
        FOOTER_LINE_HEIGHT,
        palette.orange.to_color(),
    )?;

    let muted = Style::regular(8.0, palette.muted.to_color());
    let brand = format!("{} {}", ctx.config.brand_name, ctx.config.brand_accent);
    draw_text(
        doc,
        ctx,
        &format!(
            "Document généré automatiquement — {} © {}",
            brand.trim(),
            ctx.issued_at.year()
        ),
        MARGIN,
        34.0,
        muted,
        Align::Left,
    )?;
    draw_text(
        doc,
        ctx,
        &format!(
            "{} · {}",
            ctx.config.contact_email, ctx.config.contact_phone
        ),
        MARGIN + CONTENT_WIDTH,
        34.0,
        Style::bold(8.0, palette.orange.to_color()),
        Align::Right,
    )?;
    draw_text(
        doc,
        ctx,
        &format!("Réf: {}", ctx.reference),
        MARGIN,
        20.0,
        muted,
        Align::Left,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pdf_core::ContentOp;
    use pretty_assertions::assert_eq;

    fn submission(description: Option<&str>) -> LeadSubmission {
        LeadSubmission {
            full_name: "Claire Martin".to_string(),
            company: "Atelier (Lumière)".to_string(),
            email: "claire@example.fr".to_string(),
            phone: "06 12 34 56 78".to_string(),
            postal_code: "69001".to_string(),
            country: "France".to_string(),
            project_type: vec!["Site vitrine".to_string()],
            budget: vec!["5 000 - 10 000 €".to_string()],
            deadline: vec!["3 mois".to_string()],
            existing_assets: Vec::new(),
            description: description.map(str::to_string),
        }
    }

    fn render(lead: &LeadSubmission, config: &SheetConfig) -> (PdfDocument, Cursor) {
        let reference =
            ReferenceCode::new("AGS", NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(), 4821)
                .unwrap();
        let issued_at = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        let mut doc = PdfDocument::new();
        doc.register_font_family(config.font.into()).unwrap();
        let ctx = LayoutContext {
            submission: lead,
            reference: &reference,
            issued_at,
            config,
        };
        let cursor = layout_sheet(&mut doc, &ctx).unwrap();
        (doc, cursor)
    }

    fn texts(doc: &PdfDocument) -> Vec<String> {
        doc.operations()
            .iter()
            .filter_map(|op| match op {
                ContentOp::Text { encoded, .. } => {
                    Some(encoded.iter().map(|&b| b as char).collect())
                }
                _ => None,
            })
            .collect()
    }

    fn rects(doc: &PdfDocument) -> Vec<(f64, f64, f64, f64)> {
        doc.operations()
            .iter()
            .filter_map(|op| match op {
                ContentOp::FillRect {
                    x, y, width, height, ..
                } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_cursor_moves_down() {
        let cursor = Cursor::at(100.0).down(16.0).down(4.0);
        assert_eq!(cursor.y(), 80.0);
    }

    #[test]
    fn test_box_height_formula() {
        assert_eq!(description_box_height(0, 16.0), 20.0);
        assert_eq!(description_box_height(3, 16.0), 68.0);
        assert_eq!(description_box_height(5, 14.0), 90.0);
    }

    #[test]
    fn test_max_description_lines() {
        // 382 - 130 - 20 = 232 points of room
        assert_eq!(max_description_lines(382.0, 16.0), 14);
        assert_eq!(max_description_lines(382.0, 14.0), 16);
        assert_eq!(max_description_lines(140.0, 16.0), 0);
    }

    #[test]
    fn test_description_lines_clip_with_ellipsis() {
        let text = "mot ".repeat(200);
        let lines = description_lines(&text, 20, 3);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with("..."));
        assert!(lines[2].chars().count() <= 20);
        assert_eq!(lines[0], "mot mot mot mot mot");
    }

    #[test]
    fn test_description_lines_unclipped() {
        assert_eq!(description_lines("Court.", 80, 14), vec!["Court."]);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value("x", "  ", 62), PLACEHOLDER);
        assert_eq!(display_value("x", "abc", 62), "abc");
        let long = "a".repeat(70);
        assert_eq!(display_value("x", &long, 62).chars().count(), 62);
    }

    #[test]
    fn test_sections_in_order() {
        let (doc, _) = render(&submission(Some("Refonte du site.")), &SheetConfig::default());
        let texts = texts(&doc);
        let position = |needle: &str| {
            texts
                .iter()
                .position(|t| t == needle)
                .unwrap_or_else(|| panic!("missing {needle:?} in {texts:?}"))
        };
        let order = [
            "AGS",
            "Concept",
            "FICHE DE DEMANDE CLIENT",
            "INFORMATIONS CLIENT",
            "D\u{c9}TAILS DU PROJET",
            "DESCRIPTION",
            "Merci pour votre confiance.",
        ];
        let positions: Vec<usize> = order.iter().map(|t| position(t)).collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
        assert!(texts.contains(&"R\u{e9}f: AGS-261018-4821".to_string()));
        assert!(texts.contains(&"18 octobre 2026 \u{e0} 14:05".to_string()));
    }

    #[test]
    fn test_blank_description_skips_section() {
        let (doc, cursor) = render(&submission(Some("   ")), &SheetConfig::default());
        assert!(!texts(&doc).contains(&"DESCRIPTION".to_string()));
        // thank-you starts where the project block left the cursor
        assert_eq!(cursor.y(), 394.0 - 2.0 * 16.0);
    }

    #[test]
    fn test_description_box_matches_line_count() {
        let text = "Nous voulons un site vitrine moderne avec une page de contact, un blog et une galerie de réalisations, le tout optimisé pour le référencement naturel.";
        let config = SheetConfig::default();
        let lines = word_wrap(text, config.wrap_width);
        assert_eq!(lines.len(), 2);

        let (doc, _) = render(&submission(Some(text)), &config);
        let boxes: Vec<_> = rects(&doc)
            .into_iter()
            .filter(|r| r.0 == MARGIN && r.2 == CONTENT_WIDTH && r.3 > 1.0)
            .collect();
        // title bar, client, project, description
        assert_eq!(boxes.len(), 4);
        assert_eq!(boxes[3].3, description_box_height(2, 16.0));
        assert_eq!(boxes[3].1, 382.0 - description_box_height(2, 16.0));
    }

    #[test]
    fn test_description_box_height_per_line_count_and_gap() {
        for line_gap in [14.0, 16.0, 18.0] {
            let config = SheetConfig {
                line_gap,
                ..Default::default()
            };
            let mut tops = Vec::new();
            for k in [1, 3, 6, 10] {
                let text = vec!["ligne"; k].join("\n");
                let (doc, _) = render(&submission(Some(&text)), &config);
                let boxes: Vec<_> = rects(&doc)
                    .into_iter()
                    .filter(|r| r.0 == MARGIN && r.2 == CONTENT_WIDTH && r.3 > 1.0)
                    .collect();
                assert_eq!(boxes.len(), 4, "gap {line_gap}, {k} lines");
                let (_, y, _, height) = boxes[3];
                assert_eq!(height, k as f64 * line_gap + 2.0 * BLOCK_PADDING);
                assert_eq!(height, description_box_height(k, line_gap));
                tops.push(y + height);
            }
            assert!(tops.windows(2).all(|w| w[0] == w[1]), "{tops:?}");
        }
    }

    #[test]
    fn test_fixed_block_geometry() {
        let (doc, _) = render(&submission(None), &SheetConfig::default());
        let rects = rects(&doc);
        assert_eq!(rects[0], (0.0, 752.0, 595.0, 90.0));
        assert_eq!(rects[1], (50.0, 702.0, 495.0, 28.0));
        // client block: top at 664, 6 rows
        assert_eq!(rects[2], (50.0, 548.0, 495.0, 116.0));
        assert_eq!(rects[3], (50.0, 548.0, 4.0, 116.0));
        // separator
        assert_eq!(rects[4], (50.0, 530.0, 495.0, 0.75));
        // project block: top at 496, 4 rows
        assert_eq!(rects[5], (50.0, 412.0, 495.0, 84.0));
        // footer
        assert_eq!(rects[7], (0.0, 0.0, 595.0, 60.0));
        assert_eq!(rects[8], (0.0, 60.0, 595.0, 2.0));
    }

    #[test]
    fn test_placeholders() {
        let lead = LeadSubmission {
            full_name: "Claire".to_string(),
            ..Default::default()
        };
        let (doc, _) = render(&lead, &SheetConfig::default());
        let texts = texts(&doc);
        let dash = "\u{97}".to_string();
        assert_eq!(texts.iter().filter(|t| **t == dash).count(), 8);
        assert!(texts.contains(&"Aucun".to_string()));
    }

    #[test]
    fn test_long_description_stays_above_footer() {
        let text = "description très longue ".repeat(200);
        let (doc, cursor) = render(&submission(Some(&text)), &SheetConfig::default());
        assert!(cursor.y() > 62.0);
        for op in doc.operations() {
            if let ContentOp::Text { y, encoded, .. } = op {
                if encoded.ends_with(b"...") {
                    assert!(*y > DESCRIPTION_FLOOR);
                }
            }
        }
    }

    #[test]
    fn test_serif_family_renders() {
        let config = SheetConfig {
            font: crate::config::FontChoice::Serif,
            ..Default::default()
        };
        let (doc, _) = render(&submission(None), &config);
        assert_eq!(doc.fonts().len(), 3);
    }
}
