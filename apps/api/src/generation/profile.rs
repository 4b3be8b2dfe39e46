//! Profile normalization — maps person and company rows onto one voice shape.
//!
//! The prompt builder only ever sees a [`VoiceProfile`]; variant-specific field
//! names are resolved here, once, at the boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generation::language::Language;
use crate::models::profile::{CompanyRow, PersonRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Person,
    Company,
}

impl ProfileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileKind::Person => "person",
            ProfileKind::Company => "company",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entity_type must be \"person\" or \"company\", got \"{0}\"")]
pub struct UnknownProfileKind(pub String);

impl FromStr for ProfileKind {
    type Err = UnknownProfileKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "person" => Ok(ProfileKind::Person),
            "company" => Ok(ProfileKind::Company),
            other => Err(UnknownProfileKind(other.to_string())),
        }
    }
}

/// A stored marketing identity. Always exactly one of the two variants.
#[derive(Debug, Clone)]
pub enum Profile {
    Person(PersonRow),
    Company(CompanyRow),
}

/// The normalized voice of a profile. Optional fields stay `None` here; the
/// prompt builder decides how absence is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceProfile {
    pub kind: ProfileKind,
    pub name: String,
    /// Title line for a person, size line for a company.
    pub identity: Option<String>,
    /// Bio for a person, mission statement for a company.
    pub mission: Option<String>,
    pub industry: Option<String>,
    pub audience: Option<String>,
    /// Key expertise for a person, products and services for a company.
    pub expertise: Vec<String>,
    /// Personal branding notes or company culture notes.
    pub tone_notes: Option<String>,
    pub language: Language,
}

impl VoiceProfile {
    /// Comma-joined expertise list, or `None` when there is nothing to join.
    pub fn expertise_line(&self) -> Option<String> {
        if self.expertise.is_empty() {
            None
        } else {
            Some(self.expertise.join(", "))
        }
    }
}

impl From<&Profile> for VoiceProfile {
    fn from(profile: &Profile) -> Self {
        match profile {
            Profile::Person(p) => VoiceProfile {
                kind: ProfileKind::Person,
                name: p.name.trim().to_string(),
                identity: person_identity(p.title.as_deref(), p.company.as_deref()),
                mission: non_blank(p.bio.as_deref()),
                industry: non_blank(p.industry.as_deref()),
                audience: non_blank(p.target_audience.as_deref()),
                expertise: clean_list(p.key_expertise.as_deref()),
                tone_notes: non_blank(p.personal_branding_notes.as_deref()),
                language: Language::from_optional_tag(p.language.as_deref()),
            },
            Profile::Company(c) => VoiceProfile {
                kind: ProfileKind::Company,
                name: c.name.trim().to_string(),
                identity: non_blank(c.company_size.as_deref())
                    .map(|size| format!("company size: {size}")),
                mission: non_blank(c.mission_statement.as_deref()),
                industry: non_blank(c.industry.as_deref()),
                audience: non_blank(c.target_audience.as_deref()),
                expertise: clean_list(c.key_products_services.as_deref()),
                tone_notes: non_blank(c.company_culture_notes.as_deref()),
                language: Language::from_optional_tag(c.language.as_deref()),
            },
        }
    }
}

fn person_identity(title: Option<&str>, company: Option<&str>) -> Option<String> {
    match (non_blank(title), non_blank(company)) {
        (Some(title), Some(company)) => Some(format!("{title} at {company}")),
        (Some(title), None) => Some(title),
        (None, Some(company)) => Some(company),
        (None, None) => None,
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn clean_list(values: Option<&[String]>) -> Vec<String> {
    values
        .unwrap_or_default()
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
