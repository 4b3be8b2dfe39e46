//! Post Generation — single posts, the three-style batch, and revisions.
//!
//! Flow per post: VoiceProfile → build_post_prompt → TextGenerator → recover_post.
//!
//! Only a failure of the text-generation call itself leaves this module as an
//! error. A reply that cannot be parsed is absorbed by recovery.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::generation::profile::VoiceProfile;
use crate::generation::prompt_builder::{build_post_prompt, revision_requirements};
use crate::generation::recovery::{recover_post, PostDraft, RecoveryStage};
use crate::generation::style::{PostStyle, BATCH_STYLES};
use crate::llm_client::{LlmError, TextGenerator};

/// A post as returned to callers: the recovered draft plus its style and
/// creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub content: String,
    pub hashtags: Vec<String>,
    pub post_type: PostStyle,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedPost {
    fn stamp(draft: PostDraft, style: PostStyle) -> Self {
        Self {
            content: draft.content,
            hashtags: draft.hashtags,
            post_type: style,
            generated_at: Utc::now(),
        }
    }
}

#[derive(Clone)]
pub struct PostGenerator {
    llm: Arc<dyn TextGenerator>,
}

impl PostGenerator {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    /// Generates one post. Unknown styles have already become `General`.
    pub async fn generate_single(
        &self,
        profile: &VoiceProfile,
        style: PostStyle,
        requirements: Option<&str>,
    ) -> Result<PostDraft, LlmError> {
        let prompt = build_post_prompt(profile, style, requirements);
        let raw = self.llm.complete(prompt.system, &prompt.user).await?;

        let recovery = recover_post(&raw, prompt.language);
        if recovery.stage == RecoveryStage::Fallback {
            info!(
                "Post for {} ({}) replaced by fallback text",
                profile.name,
                style.as_str()
            );
        }
        Ok(recovery.post)
    }

    /// Generates one post and attaches `post_type` and `generated_at`.
    pub async fn generate_styled(
        &self,
        profile: &VoiceProfile,
        style: PostStyle,
        requirements: Option<&str>,
    ) -> Result<GeneratedPost, LlmError> {
        let draft = self.generate_single(profile, style, requirements).await?;
        Ok(GeneratedPost::stamp(draft, style))
    }

    /// Generates one post per batch style, concurrently.
    ///
    /// The result follows `BATCH_STYLES` order no matter which call finishes
    /// first. Any failed call fails the whole batch.
    pub async fn generate_batch(
        &self,
        profile: &VoiceProfile,
        requirements: Option<&str>,
    ) -> Result<Vec<GeneratedPost>, LlmError> {
        info!("Generating {} posts for {}", BATCH_STYLES.len(), profile.name);

        let posts = try_join_all(
            BATCH_STYLES
                .iter()
                .map(|&style| self.generate_styled(profile, style, requirements)),
        )
        .await?;

        info!(
            "Generated posts for {} with types: {}",
            profile.name,
            posts
                .iter()
                .map(|p| p.post_type.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(posts)
    }

    /// Regenerates `existing` in the same style, steered by user feedback.
    pub async fn improve(
        &self,
        profile: &VoiceProfile,
        style: PostStyle,
        existing: &str,
        feedback: &str,
    ) -> Result<PostDraft, LlmError> {
        let requirements = revision_requirements(existing, feedback);
        self.generate_single(profile, style, Some(&requirements)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::generation::language::Language;
    use crate::generation::profile::ProfileKind;

    /// Scripted stand-in for the model, keyed by the style heading in the prompt.
    #[derive(Default)]
    struct ScriptedGenerator {
        delays_ms: Vec<(PostStyle, u64)>,
        failing: Option<PostStyle>,
        reply: Option<String>,
        prompts: Mutex<Vec<String>>,
    }

    fn style_of(user: &str) -> PostStyle {
        [
            PostStyle::Educational,
            PostStyle::PersonalStory,
            PostStyle::IndustryInsight,
            PostStyle::ContrarianViewpoint,
            PostStyle::ProblemAgitateSolve,
        ]
        .into_iter()
        .find(|s| user.contains(&format!("({})", s.title())))
        .unwrap_or(PostStyle::General)
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn complete(&self, _system: &str, user: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(user.to_string());
            let style = style_of(user);

            if let Some((_, ms)) = self.delays_ms.iter().find(|(s, _)| *s == style) {
                tokio::time::sleep(Duration::from_millis(*ms)).await;
            }
            if self.failing == Some(style) {
                return Err(LlmError::Api {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(self.reply.clone().unwrap_or_else(|| {
                format!(
                    r#"{{"content": "Post about {}", "hashtags": ["{}"]}}"#,
                    style.as_str(),
                    style.as_str()
                )
            }))
        }
    }

    fn profile() -> VoiceProfile {
        VoiceProfile {
            kind: ProfileKind::Person,
            name: "Mette".to_string(),
            identity: Some("CTO".to_string()),
            mission: None,
            industry: None,
            audience: Some("engineering leaders".to_string()),
            expertise: vec!["payments".to_string()],
            tone_notes: None,
            language: Language::English,
        }
    }

    fn generator(scripted: ScriptedGenerator) -> (PostGenerator, Arc<ScriptedGenerator>) {
        let scripted = Arc::new(scripted);
        (PostGenerator::new(scripted.clone()), scripted)
    }

    #[tokio::test]
    async fn test_generate_single_recovers_reply() {
        let (gen, _) = generator(ScriptedGenerator::default());
        let post = gen
            .generate_single(&profile(), PostStyle::ContrarianViewpoint, None)
            .await
            .unwrap();
        assert_eq!(post.content, "Post about contrarian_viewpoint");
        assert_eq!(post.hashtags, vec!["contrarian_viewpoint"]);
    }

    #[tokio::test]
    async fn test_unparseable_reply_becomes_fallback_not_error() {
        let (gen, _) = generator(ScriptedGenerator {
            reply: Some("Sorry, I can't do that.".to_string()),
            ..Default::default()
        });
        let post = gen
            .generate_single(&profile(), PostStyle::General, None)
            .await
            .unwrap();
        assert_eq!(post, Language::English.fallback_post());
    }

    #[tokio::test(start_paused = true)]
    async fn test_batch_order_is_style_order_regardless_of_completion() {
        let (gen, _) = generator(ScriptedGenerator {
            delays_ms: vec![
                (PostStyle::Educational, 300),
                (PostStyle::PersonalStory, 200),
                (PostStyle::IndustryInsight, 10),
            ],
            ..Default::default()
        });

        let posts = gen.generate_batch(&profile(), None).await.unwrap();
        let types: Vec<PostStyle> = posts.iter().map(|p| p.post_type).collect();
        assert_eq!(types, BATCH_STYLES.to_vec());
        assert_eq!(posts[0].content, "Post about educational");
        assert_eq!(posts[2].content, "Post about industry_insight");
    }

    #[tokio::test(start_paused = true)]
    async fn test_batch_calls_run_concurrently() {
        let (gen, _) = generator(ScriptedGenerator {
            delays_ms: BATCH_STYLES.iter().map(|&s| (s, 1_000)).collect(),
            ..Default::default()
        });

        let started = tokio::time::Instant::now();
        gen.generate_batch(&profile(), None).await.unwrap();
        assert!(started.elapsed() < Duration::from_millis(2_000));
    }

    #[tokio::test]
    async fn test_one_failure_fails_the_batch() {
        let (gen, _) = generator(ScriptedGenerator {
            failing: Some(PostStyle::PersonalStory),
            ..Default::default()
        });

        let err = gen.generate_batch(&profile(), None).await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_batch_shares_requirements_across_styles() {
        let (gen, scripted) = generator(ScriptedGenerator::default());
        gen.generate_batch(&profile(), Some("Mention the Oslo meetup"))
            .await
            .unwrap();

        let prompts = scripted.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 3);
        assert!(prompts
            .iter()
            .all(|p| p.contains("\"Mention the Oslo meetup\"")));
    }

    #[tokio::test]
    async fn test_improve_seeds_prompt_with_draft_and_feedback() {
        let (gen, scripted) = generator(ScriptedGenerator::default());
        let post = gen
            .improve(
                &profile(),
                PostStyle::PersonalStory,
                "The old draft",
                "Make it warmer",
            )
            .await
            .unwrap();
        assert_eq!(post.content, "Post about personal_story");

        let prompts = scripted.prompts.lock().unwrap();
        assert!(prompts[0].contains("EXISTING DRAFT:\nThe old draft"));
        assert!(prompts[0].contains("FEEDBACK:\nMake it warmer"));
        assert!(prompts[0].contains("(Personal Story Post)"));
    }

    #[test]
    fn test_generated_post_serializes_style_tag() {
        let post = GeneratedPost::stamp(
            PostDraft {
                content: "c".to_string(),
                hashtags: vec![],
            },
            PostStyle::IndustryInsight,
        );
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["post_type"], "industry_insight");
        assert_eq!(json["hashtags"], serde_json::json!([]));
        assert!(json["generated_at"].is_string());
    }
}
