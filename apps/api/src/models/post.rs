use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub entity_type: String,
    pub entity_id: Uuid,
    pub content: String,
    pub hashtags: Option<Vec<String>>,
    pub post_type: Option<String>,
    pub status: String,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One round of user feedback and the draft it produced.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostFeedbackRow {
    pub id: Uuid,
    pub post_id: Uuid,
    pub entity_type: String,
    pub entity_id: Uuid,
    pub feedback: String,
    pub generated_version: Option<String>,
    pub created_at: DateTime<Utc>,
}
