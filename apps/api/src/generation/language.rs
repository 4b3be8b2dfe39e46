//! Post languages — the closed set of locale tags a profile may carry.
//!
//! Every lookup keyed by language lives here: the display name substituted into
//! prompts and the canned post used when a model reply cannot be recovered.
//! Unknown or missing tags resolve to Danish.

use serde::{Deserialize, Serialize};

use crate::generation::recovery::PostDraft;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Language {
    #[default]
    Danish,
    English,
    Norwegian,
    Swedish,
}

impl Language {
    #[cfg(test)]
    pub const ALL: [Language; 4] = [
        Language::Danish,
        Language::English,
        Language::Norwegian,
        Language::Swedish,
    ];

    /// Resolves a locale tag. Never fails: anything unrecognized is the default.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "da" => Language::Danish,
            "en" => Language::English,
            "no" => Language::Norwegian,
            "sv" => Language::Swedish,
            _ => Language::default(),
        }
    }

    pub fn from_optional_tag(tag: Option<&str>) -> Self {
        tag.map(Self::from_tag).unwrap_or_default()
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Danish => "da",
            Language::English => "en",
            Language::Norwegian => "no",
            Language::Swedish => "sv",
        }
    }

    /// Name used inside rendered instructions.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Danish => "Danish (Dansk)",
            Language::English => "English",
            Language::Norwegian => "Norwegian (Norsk)",
            Language::Swedish => "Swedish (Svenska)",
        }
    }

    /// Canned post returned when the recovery cascade is exhausted.
    pub fn fallback_post(self) -> PostDraft {
        let (content, hashtags): (&str, [&str; 3]) = match self {
            Language::Danish => (
                "Deler indsigter fra min erfaring i branchen. Hvilke udfordringer står du overfor i dit felt?",
                ["#professionel", "#indsigter", "#netværk"],
            ),
            Language::English => (
                "Sharing insights from my experience in the industry. What challenges are you facing in your field?",
                ["#professional", "#insights", "#networking"],
            ),
            Language::Norwegian => (
                "Deler innsikter fra min erfaring i bransjen. Hvilke utfordringer står du overfor i ditt felt?",
                ["#profesjonell", "#innsikt", "#nettverk"],
            ),
            Language::Swedish => (
                "Delar insikter från min erfarenhet i branschen. Vilka utmaningar står du inför i ditt område?",
                ["#professionell", "#insikter", "#nätverk"],
            ),
        };

        PostDraft {
            content: content.to_string(),
            hashtags: hashtags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl From<String> for Language {
    fn from(tag: String) -> Self {
        Language::from_tag(&tag)
    }
}

impl From<Language> for &'static str {
    fn from(language: Language) -> Self {
        language.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_resolve() {
        assert_eq!(Language::from_tag("da"), Language::Danish);
        assert_eq!(Language::from_tag("en"), Language::English);
        assert_eq!(Language::from_tag("no"), Language::Norwegian);
        assert_eq!(Language::from_tag("sv"), Language::Swedish);
        assert_eq!(Language::from_tag(" EN "), Language::English);
    }

    #[test]
    fn test_unknown_and_missing_tags_default_to_danish() {
        assert_eq!(Language::from_tag("de"), Language::Danish);
        assert_eq!(Language::from_tag(""), Language::Danish);
        assert_eq!(Language::from_optional_tag(None), Language::Danish);
        assert_eq!(Language::from_tag("fr").display_name(), "Danish (Dansk)");
    }

    #[test]
    fn test_code_round_trips_through_from_tag() {
        for language in Language::ALL {
            assert_eq!(Language::from_tag(language.code()), language);
        }
    }

    #[test]
    fn test_every_language_has_a_usable_fallback() {
        for language in Language::ALL {
            let post = language.fallback_post();
            assert!(!post.content.trim().is_empty());
            assert_eq!(post.hashtags.len(), 3);
            assert!(post.hashtags.iter().all(|t| t.starts_with('#')));
        }
    }

    #[test]
    fn test_serde_uses_locale_codes() {
        assert_eq!(serde_json::to_string(&Language::Swedish).unwrap(), r#""sv""#);
        let parsed: Language = serde_json::from_str(r#""no""#).unwrap();
        assert_eq!(parsed, Language::Norwegian);
        let unknown: Language = serde_json::from_str(r#""xx""#).unwrap();
        assert_eq!(unknown, Language::Danish);
    }
}
