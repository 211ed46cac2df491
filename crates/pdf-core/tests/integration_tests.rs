//! Integration tests for pdf-core
//!
//! Every generated file is read back with lopdf, which acts as an
//! independent strict parser.

use lopdf::content::Content;
use lopdf::{Document, Object};
use pdf_core::writer::XREF_ENTRY_LEN;
use pdf_core::{Align, Color, DocumentInfo, FontFamily, FontWeight, PdfDocument};
use pretty_assertions::assert_eq;

/// A document with a band, a title and some accented text
fn build_sample(compress: bool) -> PdfDocument {
    let mut doc = PdfDocument::new();
    doc.register_font_family(FontFamily::Sans).unwrap();
    doc.set_font(FontFamily::Sans, 12.0).unwrap();
    doc.fill_rect(0.0, 752.0, 595.0, 90.0, Color::from_rgb(15, 23, 42))
        .unwrap();
    doc.set_font_weight(FontWeight::Bold).unwrap();
    doc.set_text_color(Color::white());
    doc.insert_text("FICHE DE DEMANDE", 62.0, 712.0, Align::Left)
        .unwrap();
    doc.set_font_weight(FontWeight::Regular).unwrap();
    doc.set_text_color(Color::black());
    doc.insert_text("Société (Lyon) \\ café — été", 50.0, 600.0, Align::Left)
        .unwrap();
    doc.insert_text("Réf: AGS-261018-1234", 545.0, 805.0, Align::Right)
        .unwrap();
    doc.set_compression(compress);
    doc
}

fn load(bytes: &[u8]) -> Document {
    Document::load_mem(bytes).expect("lopdf should parse the output")
}

fn tj_operands(content: &[u8]) -> Vec<Vec<u8>> {
    let content = Content::decode(content).unwrap();
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .map(|op| match &op.operands[0] {
            Object::String(bytes, _) => bytes.clone(),
            other => panic!("unexpected Tj operand {other:?}"),
        })
        .collect()
}

#[test]
fn test_output_parses_with_one_page() {
    let bytes = build_sample(false).to_bytes().unwrap();
    let doc = load(&bytes);

    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);

    let page_id = pages[&1];
    let page = doc.get_dictionary(page_id).unwrap();
    let media_box: Vec<f64> = page
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o.as_float().map(f64::from).or_else(|_| o.as_i64().map(|v| v as f64)).unwrap())
        .collect();
    assert_eq!(media_box, vec![0.0, 0.0, 595.0, 842.0]);
}

#[test]
fn test_fonts_are_standard_winansi() {
    let bytes = build_sample(false).to_bytes().unwrap();
    let doc = load(&bytes);

    for (id, base_font) in [(5, "Helvetica"), (6, "Helvetica-Bold")] {
        let font = doc.get_dictionary((id, 0)).unwrap();
        assert_eq!(font.get(b"Subtype").unwrap().as_name().unwrap(), b"Type1");
        assert_eq!(
            font.get(b"BaseFont").unwrap().as_name().unwrap(),
            base_font.as_bytes()
        );
        assert_eq!(
            font.get(b"Encoding").unwrap().as_name().unwrap(),
            b"WinAnsiEncoding"
        );
    }
}

#[test]
fn test_xref_entries_point_at_objects() {
    let pdf = build_sample(false).assemble().unwrap();
    let bytes = &pdf.bytes;
    let text = String::from_utf8_lossy(bytes);

    let startxref = text.rfind("startxref\n").unwrap();
    let declared: usize = text[startxref + 10..]
        .lines()
        .next()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(declared, pdf.xref_offset);
    assert!(bytes[declared..].starts_with(b"xref\n0 7\n"));

    let table_start = declared + "xref\n0 7\n".len();
    let free = &bytes[table_start..table_start + XREF_ENTRY_LEN];
    assert_eq!(free, b"0000000000 65535 f \n");

    for id in 1..=6usize {
        let start = table_start + id * XREF_ENTRY_LEN;
        let entry = std::str::from_utf8(&bytes[start..start + XREF_ENTRY_LEN]).unwrap();
        assert!(entry.ends_with(" 00000 n \n"), "bad entry {entry:?}");
        let offset: usize = entry[..10].parse().unwrap();
        let marker = format!("{id} 0 obj");
        assert!(
            bytes[offset..].starts_with(marker.as_bytes()),
            "entry {id} points at wrong byte"
        );
    }
}

#[test]
fn test_stream_length_matches_bytes() {
    for compress in [false, true] {
        let bytes = build_sample(compress).to_bytes().unwrap();
        let doc = load(&bytes);
        let stream = doc.get_object((4, 0)).unwrap().as_stream().unwrap();
        let declared = stream.dict.get(b"Length").unwrap().as_i64().unwrap();
        assert_eq!(declared as usize, stream.content.len());
    }
}

#[test]
fn test_compressed_content_decodes_to_same_operators() {
    let plain = build_sample(false);
    let compressed_bytes = build_sample(true).to_bytes().unwrap();
    let doc = load(&compressed_bytes);

    let stream = doc.get_object((4, 0)).unwrap().as_stream().unwrap();
    assert_eq!(
        stream.dict.get(b"Filter").unwrap().as_name().unwrap(),
        b"FlateDecode"
    );

    let page_id = doc.get_pages()[&1];
    assert_eq!(doc.get_page_content(page_id).unwrap(), plain.content_stream());
}

#[test]
fn test_text_round_trips_through_parser() {
    let bytes = build_sample(false).to_bytes().unwrap();
    let doc = load(&bytes);
    let page_id = doc.get_pages()[&1];
    let strings = tj_operands(&doc.get_page_content(page_id).unwrap());

    assert_eq!(strings.len(), 3);
    assert_eq!(strings[0], b"FICHE DE DEMANDE".to_vec());
    // é = 0xE9, em dash = 0x97
    assert_eq!(
        strings[1],
        b"Soci\xE9t\xE9 (Lyon) \\ caf\xE9 \x97 \xE9t\xE9".to_vec()
    );
}

#[test]
fn test_accented_text_yields_printable_bytes() {
    let bytes = build_sample(false).to_bytes().unwrap();
    let doc = load(&bytes);
    let page_id = doc.get_pages()[&1];
    for string in tj_operands(&doc.get_page_content(page_id).unwrap()) {
        assert!(string.iter().all(|b| pdf_core::is_printable_win_ansi(*b)));
    }
}

#[test]
fn test_info_dictionary_referenced_from_trailer() {
    let mut sample = build_sample(false);
    sample.set_info(DocumentInfo {
        title: Some("Fiche de demande AGS-261018-1234".to_string()),
        producer: Some("lead-sheet".to_string()),
        ..Default::default()
    });
    let bytes = sample.to_bytes().unwrap();
    let doc = load(&bytes);

    let info_ref = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
    assert_eq!(info_ref, (7, 0));
    let info = doc.get_dictionary(info_ref).unwrap();
    assert_eq!(
        info.get(b"Title").unwrap().as_str().unwrap(),
        b"Fiche de demande AGS-261018-1234"
    );
}

#[test]
fn test_output_is_deterministic() {
    let first = build_sample(false).to_bytes().unwrap();
    let second = build_sample(false).to_bytes().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_document_is_valid() {
    let mut doc = PdfDocument::new();
    doc.register_font_family(FontFamily::Serif).unwrap();
    let bytes = doc.to_bytes().unwrap();
    let parsed = load(&bytes);
    assert_eq!(parsed.get_pages().len(), 1);
    assert!(bytes.ends_with(b"%%EOF\n"));
}
