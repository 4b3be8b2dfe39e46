//! Post styles — the rhetorical frameworks a post can be written in.
//!
//! Each style owns one block of task instructions. The match in
//! [`PostStyle::instructions`] is the lookup table; unknown tags never reach it
//! because [`PostStyle::from_tag`] folds them into `General`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum PostStyle {
    Educational,
    PersonalStory,
    IndustryInsight,
    ContrarianViewpoint,
    ProblemAgitateSolve,
    #[default]
    General,
}

/// Styles produced by a batch request, in response order.
pub const BATCH_STYLES: [PostStyle; 3] = [
    PostStyle::Educational,
    PostStyle::PersonalStory,
    PostStyle::IndustryInsight,
];

impl PostStyle {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "educational" => PostStyle::Educational,
            "personal_story" => PostStyle::PersonalStory,
            "industry_insight" => PostStyle::IndustryInsight,
            "contrarian_viewpoint" => PostStyle::ContrarianViewpoint,
            "problem_agitate_solve" => PostStyle::ProblemAgitateSolve,
            _ => PostStyle::General,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PostStyle::Educational => "educational",
            PostStyle::PersonalStory => "personal_story",
            PostStyle::IndustryInsight => "industry_insight",
            PostStyle::ContrarianViewpoint => "contrarian_viewpoint",
            PostStyle::ProblemAgitateSolve => "problem_agitate_solve",
            PostStyle::General => "general",
        }
    }

    /// Heading label shown in the task section.
    pub fn title(self) -> &'static str {
        match self {
            PostStyle::Educational => "Educational Post",
            PostStyle::PersonalStory => "Personal Story Post",
            PostStyle::IndustryInsight => "Industry Insight Post",
            PostStyle::ContrarianViewpoint => "Contrarian Viewpoint Post",
            PostStyle::ProblemAgitateSolve => "Problem-Agitate-Solve Post",
            PostStyle::General => "General Post",
        }
    }

    /// Renders the task section for this style.
    ///
    /// `expertise` and `audience` are already resolved by the caller, including
    /// their placeholders for empty profiles.
    pub fn instructions(self, expertise: &str, audience: &str) -> String {
        let body = match self {
            PostStyle::Educational => format!(
                "Take the role of an experienced mentor. **Structure:** Open with a widespread but subtly \
                flawed belief within {expertise}. This is your hook. Then introduce the 'Key Insight' as a \
                reframing of that belief. Use a precise analogy or a micro case study (real or hypothetical) \
                as the 'Supporting Details'. The 'Actionable Takeaway' must be a single, non-obvious question \
                the reader can ask their own team. Your call-to-action must invite disagreement or \
                alternative perspectives in the comments."
            ),
            PostStyle::PersonalStory => format!(
                "Apply the 'Situation-Complication-Resolution' framework. The 'Situation' is the professional \
                context. The 'Complication' must be a specific, non-trivial obstacle that triggered a moment \
                of doubt or a critical decision. The 'Resolution' should focus less on the victory and more \
                on the internal lesson. The moral of the story must be a transferable principle that is \
                directly relevant to the challenges {audience} face."
            ),
            PostStyle::IndustryInsight => format!(
                "Identify two seemingly unrelated trends (for example one from {expertise} and one from \
                macroeconomics or technology). Your core task is to synthesize them into a new prediction or \
                a surprising causal link. Present the argument as: Observation 1 -> Observation 2 -> The \
                Unexpected Synthesis/Implication. Use phrasing such as 'The conventional wisdom misses...' or \
                'What few people discuss is the intersection of...' to challenge norms explicitly."
            ),
            PostStyle::ContrarianViewpoint => format!(
                "Identify a popular best practice, buzzword or 'sacred cow' within {expertise}. The purpose \
                of the post is to argue against it, respectfully but firmly. Structure: acknowledge the \
                popular view and why it is appealing. Then introduce your counterargument with the phrase \
                'My experience shows, however, that...'. Support your position with a logical argument or a \
                short anecdote. Do not end with a solution but with a challenging question to the audience. \
                The tone must be confident and provocative, never arrogant."
            ),
            PostStyle::ProblemAgitateSolve => format!(
                "Identify a common, frustrating problem that {audience} face. **Problem:** Describe it in the \
                audience's own language and emotions so they feel understood. **Agitate:** Deepen the \
                problem. Explore the hidden costs, frustrations or consequences of leaving it unsolved. \
                **Solve:** Introduce the core principle or mental model from {expertise} as the path to the \
                solution. Do not sell a product; sell insight. The call-to-action must ask readers to share \
                how they have handled this exact problem."
            ),
            PostStyle::General => "Create engaging content that delivers value to your audience. Include \
                specific examples, stories or actionable insights. Use a conversational yet professional \
                tone. Structure: Hook -> Main point -> Supporting details -> Call to action."
                .to_string(),
        };

        format!("### TASK & FRAMEWORK ({}) ###\n{body}", self.title())
    }
}

impl From<String> for PostStyle {
    fn from(tag: String) -> Self {
        PostStyle::from_tag(&tag)
    }
}

impl From<PostStyle> for &'static str {
    fn from(style: PostStyle) -> Self {
        style.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [PostStyle; 6] = [
        PostStyle::Educational,
        PostStyle::PersonalStory,
        PostStyle::IndustryInsight,
        PostStyle::ContrarianViewpoint,
        PostStyle::ProblemAgitateSolve,
        PostStyle::General,
    ];

    #[test]
    fn test_tags_round_trip() {
        for style in ALL {
            assert_eq!(PostStyle::from_tag(style.as_str()), style);
        }
    }

    #[test]
    fn test_unknown_tag_is_general() {
        assert_eq!(PostStyle::from_tag("listicle"), PostStyle::General);
        assert_eq!(PostStyle::from_tag(""), PostStyle::General);
        assert_eq!(PostStyle::from_tag("Educational"), PostStyle::General);
    }

    #[test]
    fn test_batch_order_is_fixed() {
        let tags: Vec<&str> = BATCH_STYLES.iter().map(|s| s.as_str()).collect();
        assert_eq!(tags, vec!["educational", "personal_story", "industry_insight"]);
    }

    #[test]
    fn test_every_style_renders_its_own_heading() {
        for style in ALL {
            let block = style.instructions("distributed systems", "CTOs");
            assert!(block.starts_with(&format!("### TASK & FRAMEWORK ({}) ###", style.title())));
        }
    }

    #[test]
    fn test_instructions_substitute_expertise_and_audience() {
        let block = PostStyle::ProblemAgitateSolve.instructions("supply chains", "plant managers");
        assert!(block.contains("supply chains"));
        assert!(block.contains("plant managers"));

        let story = PostStyle::PersonalStory.instructions("ignored", "founders");
        assert!(story.contains("founders"));
        assert!(!story.contains("ignored"));
    }

    #[test]
    fn test_serde_accepts_unknown_tags() {
        let style: PostStyle = serde_json::from_str(r#""hot_take""#).unwrap();
        assert_eq!(style, PostStyle::General);
        assert_eq!(
            serde_json::to_string(&PostStyle::IndustryInsight).unwrap(),
            r#""industry_insight""#
        );
    }
}
