//! Axum route handlers for the Generation API.

use axum::{
    extract::{FromRequest, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::GeneratedPost;
use crate::generation::profile::{ProfileKind, UnknownProfileKind, VoiceProfile};
use crate::generation::store::{
    delete_draft_posts, fetch_post, fetch_profile, list_feedback, record_revision,
};
use crate::generation::style::PostStyle;
use crate::models::post::{PostFeedbackRow, PostRow};
use crate::state::AppState;

/// Minimum trimmed length of revision feedback.
const MIN_FEEDBACK_CHARS: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// `Json` extractor whose rejection renders as an `AppError`.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateBatchRequest {
    pub entity_type: String,
    pub entity_id: Uuid,
    pub requirements: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateSingleRequest {
    pub entity_type: String,
    pub entity_id: Uuid,
    #[serde(default)]
    pub post_type: PostStyle,
    pub requirements: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    pub feedback: String,
}

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub improved_post: PostRow,
    pub feedback: PostFeedbackRow,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/posts/generate
///
/// Generates the three-style batch for a profile. Existing drafts of that
/// profile are cleared first.
pub async fn handle_generate_batch(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateBatchRequest>,
) -> Result<Json<DataResponse<Vec<GeneratedPost>>>, AppError> {
    let kind = parse_kind(&request.entity_type)?;
    let voice = load_voice(&state, kind, request.entity_id).await?;

    if let Err(e) = delete_draft_posts(&state.db, kind, request.entity_id).await {
        warn!("Failed to delete existing draft posts: {e}");
    }

    let posts = state
        .generator
        .generate_batch(&voice, request.requirements.as_deref())
        .await?;

    info!("Generated {} posts for {kind}: {}", posts.len(), request.entity_id);
    Ok(DataResponse::ok(posts))
}

/// POST /api/v1/posts/generate/single
///
/// Generates one post in the requested style. Unknown styles render as general.
pub async fn handle_generate_single(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateSingleRequest>,
) -> Result<Json<DataResponse<GeneratedPost>>, AppError> {
    let kind = parse_kind(&request.entity_type)?;
    let voice = load_voice(&state, kind, request.entity_id).await?;

    let post = state
        .generator
        .generate_styled(&voice, request.post_type, request.requirements.as_deref())
        .await?;

    Ok(DataResponse::ok(post))
}

/// POST /api/v1/posts/:id/improve
///
/// Regenerates a stored post from user feedback, records the feedback, and
/// overwrites the post's content.
pub async fn handle_improve_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    AppJson(request): AppJson<ImproveRequest>,
) -> Result<Json<DataResponse<ImproveResponse>>, AppError> {
    let feedback = validate_feedback(&request.feedback)?;

    let post = fetch_post(&state.db, post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {post_id} not found")))?;

    let kind = parse_kind(&post.entity_type)?;
    let voice = load_voice(&state, kind, post.entity_id).await?;
    let style = PostStyle::from_tag(post.post_type.as_deref().unwrap_or_default());

    info!("Improving post {post_id} ({})", style.as_str());
    let improved = state
        .generator
        .improve(&voice, style, &post.content, feedback)
        .await?;

    let (feedback_row, improved_post) =
        record_revision(&state.db, &post, feedback, &improved).await?;

    Ok(DataResponse::ok(ImproveResponse {
        improved_post,
        feedback: feedback_row,
    }))
}

/// GET /api/v1/posts/:id/feedback
pub async fn handle_list_feedback(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<DataResponse<Vec<PostFeedbackRow>>>, AppError> {
    fetch_post(&state.db, post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {post_id} not found")))?;

    let feedback = list_feedback(&state.db, post_id).await?;
    Ok(DataResponse::ok(feedback))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn parse_kind(entity_type: &str) -> Result<ProfileKind, AppError> {
    entity_type
        .parse()
        .map_err(|e: UnknownProfileKind| AppError::Validation(e.to_string()))
}

fn validate_feedback(feedback: &str) -> Result<&str, AppError> {
    let trimmed = feedback.trim();
    if trimmed.chars().count() < MIN_FEEDBACK_CHARS {
        return Err(AppError::Validation("Feedback is required".to_string()));
    }
    Ok(trimmed)
}

async fn load_voice(
    state: &AppState,
    kind: ProfileKind,
    id: Uuid,
) -> Result<VoiceProfile, AppError> {
    let profile = fetch_profile(&state.db, kind, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{kind} {id} not found")))?;
    Ok(VoiceProfile::from(&profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_rejects_unknown() {
        assert_eq!(parse_kind("person").unwrap(), ProfileKind::Person);
        assert_eq!(parse_kind("company").unwrap(), ProfileKind::Company);
        let err = parse_kind("brand").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("\"brand\"")));
    }

    #[test]
    fn test_feedback_needs_three_characters() {
        assert!(validate_feedback("  ok  ").is_err());
        assert!(validate_feedback("").is_err());
        assert_eq!(validate_feedback("  add numbers ").unwrap(), "add numbers");
    }

    #[test]
    fn test_single_request_style_defaults_and_folds_unknown() {
        let id = Uuid::new_v4();
        let request: GenerateSingleRequest = serde_json::from_value(serde_json::json!({
            "entity_type": "person",
            "entity_id": id,
        }))
        .unwrap();
        assert_eq!(request.post_type, PostStyle::General);
        assert!(request.requirements.is_none());

        let request: GenerateSingleRequest = serde_json::from_value(serde_json::json!({
            "entity_type": "company",
            "entity_id": id,
            "post_type": "problem_agitate_solve",
            "requirements": "Keep it short"
        }))
        .unwrap();
        assert_eq!(request.post_type, PostStyle::ProblemAgitateSolve);

        let request: GenerateSingleRequest = serde_json::from_value(serde_json::json!({
            "entity_type": "company",
            "entity_id": id,
            "post_type": "haiku"
        }))
        .unwrap();
        assert_eq!(request.post_type, PostStyle::General);
    }

    #[test]
    fn test_data_response_shape() {
        let Json(body) = DataResponse::ok(vec![1, 2, 3]);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": [1, 2, 3] }));
    }
}
