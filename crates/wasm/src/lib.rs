//! WASM bindings for the lead sheet builder
//!
//! This crate provides JavaScript-friendly API for:
//! - Validating a contact-form payload
//! - Generating reference codes from the JavaScript clock
//! - Rendering the lead sheet as a base64 attachment
//! - French formatting helpers
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { buildLeadSheet, validateLead } from 'lead-sheet-wasm';
//!
//! await init();
//!
//! const errors = validateLead(payload);
//! if (errors.length === 0) {
//!   const { reference, filename, contentBase64 } = buildLeadSheet(payload);
//!   // attach contentBase64 as `filename` to the internal email
//! }
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use lead_sheet::{LeadSheet, LeadSubmission, ReferenceCode, SheetConfig, DEFAULT_PREFIX};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Result handed back to the serverless handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOutput {
    pub reference: String,
    pub filename: String,
    pub content_base64: String,
}

/// Issue timestamp from calendar parts, month counted from zero as in
/// `Date.prototype.getMonth`
fn issued_at_from_parts(
    year: i32,
    month0: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<NaiveDateTime, String> {
    NaiveDate::from_ymd_opt(year, month0 + 1, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(|| format!("invalid clock reading {year}-{month0}-{day}"))
}

/// Local wall-clock time from the JavaScript runtime
fn js_now() -> Result<NaiveDateTime, JsValue> {
    let now = js_sys::Date::new_0();
    issued_at_from_parts(
        now.get_full_year() as i32,
        now.get_month(),
        now.get_date(),
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds(),
    )
    .map_err(to_js)
}

fn parse_config(config: JsValue) -> Result<SheetConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(SheetConfig::default());
    }
    let config: SheetConfig = serde_wasm_bindgen::from_value(config)?;
    config.validate().map_err(to_js)?;
    Ok(config)
}

/// Validate, reference and render one submission
fn build(
    sheet: &LeadSheet,
    submission: &LeadSubmission,
    issued_at: NaiveDateTime,
    unit: f64,
) -> Result<BuildOutput, lead_sheet::LeadError> {
    submission.validate()?;
    let reference =
        ReferenceCode::from_unit_interval(&sheet.config().reference_prefix, issued_at.date(), unit)?;
    let attachment = sheet.render_attachment(submission, &reference, issued_at)?;
    Ok(BuildOutput {
        reference: reference.to_string(),
        filename: attachment.filename,
        content_base64: attachment.content_base64,
    })
}

/// Reusable builder holding a parsed configuration
#[wasm_bindgen]
pub struct LeadSheetBuilder {
    inner: LeadSheet,
}

#[wasm_bindgen]
impl LeadSheetBuilder {
    /// Create a builder
    ///
    /// @param config - Optional sheet configuration object
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<LeadSheetBuilder, JsValue> {
        let inner = LeadSheet::new(parse_config(config)?).map_err(to_js)?;
        Ok(LeadSheetBuilder { inner })
    }

    /// Render a payload
    ///
    /// @param payload - Contact form payload
    /// @returns { reference, filename, contentBase64 }
    pub fn build(&self, payload: JsValue) -> Result<JsValue, JsValue> {
        let submission: LeadSubmission = serde_wasm_bindgen::from_value(payload)?;
        let output = build(&self.inner, &submission, js_now()?, js_sys::Math::random())
            .map_err(to_js)?;
        Ok(serde_wasm_bindgen::to_value(&output)?)
    }

    /// Render a payload to raw PDF bytes with a given reference
    ///
    /// @param payload - Contact form payload
    /// @param reference - Reference code, e.g. "AGS-261018-4821"
    /// @returns PDF bytes (Uint8Array)
    #[wasm_bindgen(js_name = renderBytes)]
    pub fn render_bytes(&self, payload: JsValue, reference: &str) -> Result<Vec<u8>, JsValue> {
        let submission: LeadSubmission = serde_wasm_bindgen::from_value(payload)?;
        let reference: ReferenceCode = reference.parse().map_err(to_js)?;
        self.inner
            .render(&submission, &reference, js_now()?)
            .map_err(to_js)
    }
}

/// Validate and render a payload in one call
///
/// @param payload - Contact form payload
/// @param config - Optional sheet configuration object
/// @returns { reference, filename, contentBase64 }
#[wasm_bindgen(js_name = buildLeadSheet)]
pub fn build_lead_sheet(payload: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    LeadSheetBuilder::new(config)?.build(payload)
}

/// Validation messages for a payload (empty when valid)
///
/// @param payload - Contact form payload
/// @returns Array of French error messages
#[wasm_bindgen(js_name = validateLead)]
pub fn validate_lead(payload: JsValue) -> Result<Vec<JsValue>, JsValue> {
    let submission: LeadSubmission = serde_wasm_bindgen::from_value(payload)?;
    Ok(submission
        .errors()
        .into_iter()
        .map(|e| JsValue::from_str(&e))
        .collect())
}

/// Fresh reference code for today
///
/// @param prefix - Optional prefix (defaults to "AGS")
/// @returns Code such as "AGS-261018-4821"
#[wasm_bindgen(js_name = referenceCode)]
pub fn reference_code(prefix: Option<String>) -> Result<String, JsValue> {
    let prefix = prefix.unwrap_or_else(|| DEFAULT_PREFIX.to_string());
    let code = ReferenceCode::from_unit_interval(&prefix, js_now()?.date(), js_sys::Math::random())
        .map_err(to_js)?;
    Ok(code.to_string())
}

/// French text formatting utilities
#[wasm_bindgen]
pub struct FrFormatter;

#[wasm_bindgen]
impl FrFormatter {
    /// Format a date in long French format
    ///
    /// @returns French date (e.g., "18 octobre 2026")
    #[wasm_bindgen(js_name = formatDateLong)]
    pub fn format_date_long(year: i32, month: u32, day: u32) -> Result<String, JsValue> {
        fr_text::format_date_long(year, month, day).map_err(to_js)
    }

    /// Format a date in short French format
    ///
    /// @returns French date (e.g., "18/10/2026")
    #[wasm_bindgen(js_name = formatDateShort)]
    pub fn format_date_short(year: i32, month: u32, day: u32) -> Result<String, JsValue> {
        fr_text::format_date_short(year, month, day).map_err(to_js)
    }

    /// Word wrap text by character count
    ///
    /// @param text - Text to wrap
    /// @param maxChars - Maximum characters per line
    /// @returns Array of lines
    #[wasm_bindgen(js_name = wordWrap)]
    pub fn word_wrap(text: &str, max_chars: usize) -> Vec<JsValue> {
        fr_text::word_wrap(text, max_chars)
            .into_iter()
            .map(|s| JsValue::from_str(&s))
            .collect()
    }
}
