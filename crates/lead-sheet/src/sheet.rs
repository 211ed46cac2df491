//! Sheet rendering: layout, serialization and attachment encoding

use crate::config::SheetConfig;
use crate::layout::{layout_sheet, LayoutContext};
use crate::reference::ReferenceCode;
use crate::submission::LeadSubmission;
use crate::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDateTime;
use pdf_core::{DocumentInfo, PdfDocument};
use serde::{Deserialize, Serialize};

/// Producer string written to the information dictionary
pub const PRODUCER: &str = concat!("lead-sheet ", env!("CARGO_PKG_VERSION"));

/// Encoded PDF ready to be attached to an email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfAttachment {
    /// `<prefix>_<reference>.pdf`
    pub filename: String,
    /// Standard base64 with padding
    pub content_base64: String,
}

/// Lead sheet builder
///
/// Holds only configuration; every render starts from a fresh document.
#[derive(Debug, Clone, Default)]
pub struct LeadSheet {
    config: SheetConfig,
}

impl LeadSheet {
    /// Create a builder, rejecting out-of-range configuration
    pub fn new(config: SheetConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Lay out the sheet without serializing it
    pub fn build_document(
        &self,
        submission: &LeadSubmission,
        reference: &ReferenceCode,
        issued_at: NaiveDateTime,
    ) -> Result<PdfDocument> {
        let mut doc = PdfDocument::new();
        doc.register_font_family(self.config.font.into())?;
        doc.set_compression(self.config.compress);
        doc.set_info(DocumentInfo {
            title: Some(format!("Fiche de demande {reference}")),
            author: Some(
                format!("{} {}", self.config.brand_name, self.config.brand_accent)
                    .trim()
                    .to_string(),
            ),
            producer: Some(PRODUCER.to_string()),
            creation_date: Some(issued_at.format("D:%Y%m%d%H%M%S").to_string()),
        });

        let ctx = LayoutContext {
            submission,
            reference,
            issued_at,
            config: &self.config,
        };
        layout_sheet(&mut doc, &ctx)?;
        Ok(doc)
    }

    /// Render the sheet to PDF bytes
    pub fn render(
        &self,
        submission: &LeadSubmission,
        reference: &ReferenceCode,
        issued_at: NaiveDateTime,
    ) -> Result<Vec<u8>> {
        let doc = self.build_document(submission, reference, issued_at)?;
        let bytes = doc.to_bytes()?;
        log::info!("rendered lead sheet {reference} ({} bytes)", bytes.len());
        Ok(bytes)
    }

    /// Render the sheet and encode it as a mail attachment
    pub fn render_attachment(
        &self,
        submission: &LeadSubmission,
        reference: &ReferenceCode,
        issued_at: NaiveDateTime,
    ) -> Result<PdfAttachment> {
        let bytes = self.render(submission, reference, issued_at)?;
        Ok(PdfAttachment {
            filename: reference.attachment_filename(&self.config.attachment_prefix),
            content_base64: STANDARD.encode(bytes),
        })
    }
}
