//! Lead submission model and validation

use crate::{LeadError, Result};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::OnceLock;

/// One contact-form submission
///
/// Absent keys deserialize to empty values; placeholders are substituted at
/// layout time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadSubmission {
    #[serde(deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub postal_code: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub country: String,

    /// Project type tags (at least one required)
    #[serde(deserialize_with = "one_or_many")]
    pub project_type: Vec<String>,

    /// Budget range tags (at least one required)
    #[serde(deserialize_with = "one_or_many")]
    pub budget: Vec<String>,

    /// Deadline tags (at least one required)
    #[serde(deserialize_with = "one_or_many")]
    pub deadline: Vec<String>,

    /// Assets the client already has (logo, domain, ...)
    #[serde(deserialize_with = "one_or_many")]
    pub existing_assets: Vec<String>,

    pub description: Option<String>,
}

/// The form posts either a single string or an array for tag fields
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<Option<String>>),
}

/// A reset form posts `null` for untouched fields
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<OneOrMany> = Option::deserialize(deserializer)?;
    Ok(match value {
        None => Vec::new(),
        Some(OneOrMany::One(tag)) if tag.trim().is_empty() => Vec::new(),
        Some(OneOrMany::One(tag)) => vec![tag],
        Some(OneOrMany::Many(tags)) => tags.into_iter().flatten().collect(),
    })
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

fn has_tag(tags: &[String]) -> bool {
    tags.iter().any(|t| !t.trim().is_empty())
}

impl LeadSubmission {
    /// Parse a submission from the JSON body posted by the form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Description, if it has any non-whitespace content
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// Validation messages for every missing or malformed field
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut require = |ok: bool, message: &str| {
            if !ok {
                errors.push(message.to_string());
            }
        };

        require(!self.full_name.trim().is_empty(), "Nom complet requis");
        require(!self.company.trim().is_empty(), "Société requise");
        require(email_pattern().is_match(self.email.trim()), "Email invalide");
        require(!self.phone.trim().is_empty(), "Téléphone requis");
        require(!self.postal_code.trim().is_empty(), "Code postal requis");
        require(!self.country.trim().is_empty(), "Pays requis");
        require(has_tag(&self.project_type), "Type de projet requis");
        require(has_tag(&self.budget), "Budget requis");
        require(has_tag(&self.deadline), "Délai requis");

        errors
    }

    /// Check required fields, collecting every failure
    pub fn validate(&self) -> Result<()> {
        let errors = self.errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(LeadError::Validation(errors))
        }
    }
}
