//! Lead Sheet Renderer
//!
//! Renders the sheet for a submission JSON file, or for a built-in sample
//! when no input is given.
//!
//! Usage:
//!   cargo run -p lead-sheet --example render_lead -- [input.json] [config.json] [output.pdf]
//!
//! Examples:
//!   RUST_LOG=debug cargo run -p lead-sheet --example render_lead
//!   cargo run -p lead-sheet --example render_lead -- input/lead.json "" output/lead.pdf

use anyhow::Context;
use lead_sheet::{LeadSheet, LeadSubmission, ReferenceCode, SheetConfig};
use std::path::Path;

const SAMPLE: &str = r#"{
    "fullName": "Claire Martin",
    "company": "Atelier Lumière (Lyon)",
    "email": "claire@atelier-lumiere.fr",
    "phone": "+33 6 12 34 56 78",
    "postalCode": "69001",
    "country": "France",
    "projectType": ["Site vitrine", "Identité visuelle"],
    "budget": "5 000 - 10 000 €",
    "deadline": ["Moins de 3 mois"],
    "existingAssets": ["Logo"],
    "description": "Nous souhaitons refondre notre site — plus moderne, plus rapide, et pensé pour le mobile. Une galerie de réalisations et un formulaire de devis seraient un plus."
}"#;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let submission = match args.get(1).filter(|p| !p.is_empty()) {
        Some(path) => {
            let json = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            LeadSubmission::from_json(&json)?
        }
        None => LeadSubmission::from_json(SAMPLE)?,
    };

    let config = match args.get(2).filter(|p| !p.is_empty()) {
        Some(path) => {
            let json = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            SheetConfig::from_json(&json)?
        }
        None => SheetConfig::default(),
    };

    if let Err(err) = submission.validate() {
        log::warn!("{err}");
    }

    let reference = ReferenceCode::today(&config.reference_prefix)?;
    let issued_at = chrono::Local::now().naive_local();
    let sheet = LeadSheet::new(config)?;

    let output_path = args.get(3).cloned().unwrap_or_else(|| {
        format!(
            "output/{}",
            reference.attachment_filename(&sheet.config().attachment_prefix)
        )
    });
    if let Some(parent) = Path::new(&output_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let bytes = sheet.render(&submission, &reference, issued_at)?;
    std::fs::write(&output_path, &bytes).with_context(|| format!("writing {output_path}"))?;

    println!("Reference: {reference}");
    println!("Saved: {output_path} ({} bytes)", bytes.len());
    Ok(())
}
