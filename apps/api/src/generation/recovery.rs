//! Response Recovery — turns an untrusted model reply into a valid post.
//!
//! Cascade, first success wins:
//! 1. slice the reply to the outermost `{ ... }` span (no span → fallback)
//! 2. normalize the span (line endings, raw control characters inside string
//!    literals) and parse it as JSON
//! 3. scrape `"content"` / `"hashtags"` out of the unsliced reply with patterns
//!
//! Whatever candidate a stage produces is validated once: blank content is a
//! total failure, bad hashtags become an empty list. Total failure yields the
//! canned post for the profile's language. Nothing here returns an error.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::generation::language::Language;

static CONTENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)"content"\s*:\s*"((?:[^"\\]|\\.)*)""#).expect("valid content regex")
});
static HASHTAGS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""hashtags"\s*:\s*\[([^\]]*)\]"#).expect("valid hashtags regex")
});

/// The validated `{content, hashtags}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub content: String,
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStage {
    Normalized,
    Pattern,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    pub post: PostDraft,
    pub stage: RecoveryStage,
}

/// What a stage extracted before validation.
#[derive(Debug, Default)]
struct Candidate {
    content: Option<String>,
    hashtags: Option<Vec<String>>,
}

/// A recovery stage. Receives the trimmed reply and its `{ ... }` span.
type Attempt = fn(reply: &str, span: &str) -> Option<Candidate>;

const ATTEMPTS: &[(RecoveryStage, Attempt)] = &[
    (RecoveryStage::Normalized, parse_normalized),
    (RecoveryStage::Pattern, scrape_fields),
];

/// Recovers a post from a raw model reply. Always returns a valid post.
pub fn recover_post(raw: &str, language: Language) -> Recovery {
    let reply = raw.trim();

    let Some(span) = json_span(reply) else {
        warn!("Model reply has no JSON object; using {} fallback post", language.code());
        return fallback(language);
    };

    let produced = ATTEMPTS
        .iter()
        .find_map(|(stage, attempt)| attempt(reply, span).map(|c| (*stage, c)));

    let Some((stage, candidate)) = produced else {
        warn!("Every recovery stage failed; using {} fallback post", language.code());
        return fallback(language);
    };

    match validate(candidate) {
        Some(post) => {
            debug!(?stage, hashtags = post.hashtags.len(), "Recovered post from model reply");
            Recovery { post, stage }
        }
        None => {
            warn!(?stage, "Recovered candidate has no content; using {} fallback post", language.code());
            fallback(language)
        }
    }
}

fn fallback(language: Language) -> Recovery {
    Recovery {
        post: language.fallback_post(),
        stage: RecoveryStage::Fallback,
    }
}

/// Slice from the first `{` to the last `}` inclusive.
fn json_span(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    (start < end).then(|| &reply[start..=end])
}

fn parse_normalized(_reply: &str, span: &str) -> Option<Candidate> {
    let normalized = normalize_json(span);
    let value: Value = serde_json::from_str(&normalized).ok()?;

    // Without a top-level string `content` the object may be wrapped; let the
    // pattern stage look inside it.
    let content = value.get("content")?.as_str()?.to_string();
    let hashtags = value.get("hashtags").and_then(Value::as_array).map(|tags| {
        tags.iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    });

    Some(Candidate {
        content: Some(content),
        hashtags,
    })
}

fn scrape_fields(reply: &str, _span: &str) -> Option<Candidate> {
    let content = CONTENT_RE.captures(reply)?.get(1)?.as_str();

    let hashtags = HASHTAGS_RE
        .captures(reply)
        .and_then(|caps| caps.get(1))
        .map(|list| split_hashtags(list.as_str()))
        .unwrap_or_default();

    Some(Candidate {
        content: Some(unescape(content)),
        hashtags: Some(hashtags),
    })
}

fn validate(candidate: Candidate) -> Option<PostDraft> {
    let content = candidate.content?.trim().to_string();
    if content.is_empty() {
        return None;
    }
    Some(PostDraft {
        content,
        hashtags: candidate.hashtags.unwrap_or_default(),
    })
}

/// Makes a nearly-JSON span parseable: unifies line endings, escapes raw line
/// breaks and tabs inside string literals, and drops other control characters.
fn normalize_json(span: &str) -> String {
    let unified = span.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(unified.len() + 16);
    let mut in_string = false;
    let mut escaped = false;

    for c in unified.chars() {
        if in_string {
            if escaped {
                escaped = false;
                if !c.is_control() {
                    out.push(c);
                    continue;
                }
                // A backslash followed by a raw break: keep the break escaped.
                out.pop();
            }
            match c {
                '\\' => {
                    escaped = true;
                    out.push(c);
                }
                '"' => {
                    in_string = false;
                    out.push(c);
                }
                '\n' => out.push_str("\\n"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => {}
                c => out.push(c),
            }
        } else {
            match c {
                '"' => {
                    in_string = true;
                    out.push(c);
                }
                '\n' | '\t' | ' ' => out.push(c),
                c if c.is_control() => {}
                c => out.push(c),
            }
        }
    }
    out
}

/// Reverses JSON string escaping for text captured by the content pattern.
fn unescape(captured: &str) -> String {
    let mut out = String::with_capacity(captured.len());
    let mut chars = captured.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn split_hashtags(list: &str) -> Vec<String> {
    list.split(',')
        .map(|tag| tag.trim().replace(['"', '\\'], "").trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
