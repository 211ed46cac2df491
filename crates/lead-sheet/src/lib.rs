//! Lead Sheet - one-page PDF summary of a marketing lead
//!
//! This crate provides:
//! - The lead submission model (JSON as posted by the contact form)
//! - Server-side validation with French messages
//! - Reference codes (`AGS-YYMMDD-NNNN`)
//! - Sheet configuration (branding, palette, layout constants)
//! - The letterhead layout and a base64 attachment ready for mailing
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use lead_sheet::{LeadSheet, LeadSubmission, ReferenceCode, SheetConfig};
//!
//! let submission: LeadSubmission = serde_json::from_str(r#"{
//!     "fullName": "Claire Martin",
//!     "company": "Société Générale",
//!     "email": "claire@example.fr",
//!     "phone": "+33 6 00 00 00 00",
//!     "postalCode": "69001",
//!     "country": "France",
//!     "projectType": ["Site vitrine"],
//!     "budget": "5 000 - 10 000 €",
//!     "deadline": "3 mois"
//! }"#)?;
//! submission.validate()?;
//!
//! let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let reference = ReferenceCode::new("AGS", date, 4821)?;
//! let sheet = LeadSheet::new(SheetConfig::default())?;
//! let attachment = sheet.render_attachment(&submission, &reference, date.and_hms_opt(14, 5, 0).unwrap())?;
//! assert_eq!(attachment.filename, "AGS_Demande_AGS-261018-4821.pdf");
//! # Ok::<(), lead_sheet::LeadError>(())
//! ```

pub mod config;
pub mod layout;
mod reference;
mod sheet;
mod submission;

pub use config::{HexColor, Palette, SheetConfig};
pub use layout::Cursor;
pub use reference::{ReferenceCode, DEFAULT_PREFIX};
pub use sheet::{LeadSheet, PdfAttachment};
pub use submission::LeadSubmission;

use thiserror::Error;

/// Errors that can occur while building a lead sheet
#[derive(Debug, Error)]
pub enum LeadError {
    #[error("Invalid submission: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid reference code: {0}")]
    InvalidReference(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_core::PdfError),

    #[error("Text error: {0}")]
    Text(#[from] fr_text::FrTextError),
}

/// Result type for lead sheet operations
pub type Result<T> = std::result::Result<T, LeadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_all_errors() {
        let err = LeadError::Validation(vec![
            "Nom complet requis".to_string(),
            "Email invalide".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid submission: Nom complet requis, Email invalide"
        );
    }

    #[test]
    fn test_pdf_error_converts() {
        let err: LeadError = pdf_core::PdfError::FontNotFound("Sans".to_string()).into();
        assert!(matches!(err, LeadError::Pdf(_)));
    }
}
