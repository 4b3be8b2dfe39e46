//! Prompt Builder — renders the instruction document for one post.
//!
//! Section order in the user prompt is fixed:
//! persona → style task → user requirements (optional) → negative constraints →
//! hard requirements → quality checklist → output format.
//!
//! Rendering is pure: same profile, style and requirements give the same bytes.

use crate::generation::language::Language;
use crate::generation::profile::{ProfileKind, VoiceProfile};
use crate::generation::prompts::{
    COMPANY_PERSONA_TEMPLATE, DEFAULT_AUDIENCE, DEFAULT_EXPERTISE, GHOSTWRITER_SYSTEM,
    HARD_REQUIREMENTS_TEMPLATE, NEGATIVE_CONSTRAINTS, NOT_SPECIFIED, OUTPUT_FORMAT_TEMPLATE,
    PERSON_PERSONA_TEMPLATE, QUALITY_CHECKLIST, REVISION_REQUIREMENTS_TEMPLATE,
    USER_REQUIREMENTS_TEMPLATE,
};
use crate::generation::style::PostStyle;

/// A complete instruction document for the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPrompt {
    pub system: &'static str,
    pub user: String,
    pub language: Language,
}

pub fn build_post_prompt(
    profile: &VoiceProfile,
    style: PostStyle,
    requirements: Option<&str>,
) -> PostPrompt {
    let language = profile.language.display_name();
    let expertise = profile.expertise_line();
    let style_expertise = expertise.as_deref().unwrap_or(DEFAULT_EXPERTISE);
    let style_audience = profile.audience.as_deref().unwrap_or(DEFAULT_AUDIENCE);

    let mut sections = vec![
        render_persona(profile),
        style.instructions(style_expertise, style_audience),
    ];

    if let Some(requirements) = requirements.filter(|r| !r.trim().is_empty()) {
        sections.push(fill_template(
            USER_REQUIREMENTS_TEMPLATE,
            &[("requirements", requirements)],
        ));
    }

    sections.push(NEGATIVE_CONSTRAINTS.to_string());
    sections.push(fill_template(
        HARD_REQUIREMENTS_TEMPLATE,
        &[("language", language)],
    ));
    sections.push(QUALITY_CHECKLIST.to_string());
    sections.push(fill_template(OUTPUT_FORMAT_TEMPLATE, &[("language", language)]));

    PostPrompt {
        system: GHOSTWRITER_SYSTEM,
        user: sections.join("\n\n"),
        language: profile.language,
    }
}

/// Requirements text that turns a normal generation into a revision of `draft`.
pub fn revision_requirements(draft: &str, feedback: &str) -> String {
    fill_template(
        REVISION_REQUIREMENTS_TEMPLATE,
        &[("draft", draft), ("feedback", feedback)],
    )
}

fn render_persona(profile: &VoiceProfile) -> String {
    let template = match profile.kind {
        ProfileKind::Person => PERSON_PERSONA_TEMPLATE,
        ProfileKind::Company => COMPANY_PERSONA_TEMPLATE,
    };
    let expertise = profile.expertise_line();

    fill_template(
        template,
        &[
            ("name", or_not_specified(Some(profile.name.as_str()))),
            ("identity", or_not_specified(profile.identity.as_deref())),
            ("mission", or_not_specified(profile.mission.as_deref())),
            ("industry", or_not_specified(profile.industry.as_deref())),
            ("expertise", or_not_specified(expertise.as_deref())),
            ("audience", or_not_specified(profile.audience.as_deref())),
            ("tone", or_not_specified(profile.tone_notes.as_deref())),
        ],
    )
}

fn or_not_specified(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(NOT_SPECIFIED)
}

/// Single-pass `{key}` substitution. Substituted values are never rescanned,
/// so profile text containing braces cannot pull in another placeholder.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let hit = values.iter().find(|(key, _)| {
            after.starts_with(key) && after[key.len()..].starts_with('}')
        });
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &after[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
