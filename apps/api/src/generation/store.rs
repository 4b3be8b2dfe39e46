//! Reads and writes against the profile and post tables.
//!
//! Schema is owned elsewhere; these queries rely only on the columns mapped by
//! the row types in `models`.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::generation::profile::{Profile, ProfileKind};
use crate::generation::recovery::PostDraft;
use crate::models::post::{PostFeedbackRow, PostRow};
use crate::models::profile::{CompanyRow, PersonRow};

/// Loads a profile by kind and id. `None` when no such row exists.
pub async fn fetch_profile(
    pool: &PgPool,
    kind: ProfileKind,
    id: Uuid,
) -> Result<Option<Profile>, sqlx::Error> {
    let profile = match kind {
        ProfileKind::Person => {
            sqlx::query_as::<_, PersonRow>("SELECT * FROM persons WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?
                .map(Profile::Person)
        }
        ProfileKind::Company => {
            sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?
                .map(Profile::Company)
        }
    };
    Ok(profile)
}

/// Removes unpublished drafts so a new batch does not pile up duplicates.
pub async fn delete_draft_posts(
    pool: &PgPool,
    kind: ProfileKind,
    entity_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "DELETE FROM posts WHERE entity_type = $1 AND entity_id = $2 AND status = 'draft'",
    )
    .bind(kind.as_str())
    .bind(entity_id)
    .execute(pool)
    .await?;

    info!(
        "Deleted {} draft posts for {kind}: {entity_id}",
        result.rows_affected()
    );
    Ok(result.rows_affected())
}

pub async fn fetch_post(pool: &PgPool, id: Uuid) -> Result<Option<PostRow>, sqlx::Error> {
    sqlx::query_as::<_, PostRow>("SELECT * FROM posts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Records one round of feedback and overwrites the post with the draft it
/// produced. Both writes commit together or not at all.
pub async fn record_revision(
    pool: &PgPool,
    post: &PostRow,
    feedback: &str,
    draft: &PostDraft,
) -> Result<(PostFeedbackRow, PostRow), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let feedback_row = sqlx::query_as::<_, PostFeedbackRow>(
        r#"
        INSERT INTO post_feedback (post_id, entity_type, entity_id, feedback, generated_version)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(post.id)
    .bind(&post.entity_type)
    .bind(post.entity_id)
    .bind(feedback)
    .bind(&draft.content)
    .fetch_one(&mut *tx)
    .await?;

    let updated = sqlx::query_as::<_, PostRow>(
        r#"
        UPDATE posts
        SET content = $1, hashtags = $2, updated_at = NOW()
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(&draft.content)
    .bind(&draft.hashtags)
    .bind(post.id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok((feedback_row, updated))
}

/// Feedback for a post, oldest first.
pub async fn list_feedback(
    pool: &PgPool,
    post_id: Uuid,
) -> Result<Vec<PostFeedbackRow>, sqlx::Error> {
    sqlx::query_as::<_, PostFeedbackRow>(
        "SELECT * FROM post_feedback WHERE post_id = $1 ORDER BY created_at ASC",
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    /// One connection so the temporary tables below shadow the real ones for
    /// every query in the test.
    async fn scratch_pool() -> PgPool {
        let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .unwrap();

        sqlx::query(
            r#"
            CREATE TEMP TABLE posts (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                entity_type TEXT NOT NULL,
                entity_id UUID NOT NULL,
                content TEXT NOT NULL CHECK (length(content) <= 40),
                hashtags TEXT[],
                post_type TEXT,
                status TEXT NOT NULL DEFAULT 'draft',
                scheduled_date TIMESTAMPTZ,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            r#"
            CREATE TEMP TABLE post_feedback (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                post_id UUID NOT NULL,
                entity_type TEXT NOT NULL,
                entity_id UUID NOT NULL,
                feedback TEXT NOT NULL,
                generated_version TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();
        pool
    }

    async fn seed_post(pool: &PgPool) -> PostRow {
        sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (entity_type, entity_id, content) VALUES ('person', $1, 'Old body') RETURNING *",
        )
        .bind(Uuid::new_v4())
        .fetch_one(pool)
        .await
        .unwrap()
    }

    fn draft(content: &str) -> PostDraft {
        PostDraft {
            content: content.to_string(),
            hashtags: vec!["#a".to_string()],
        }
    }

    #[tokio::test]
    #[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
    async fn test_record_revision_writes_feedback_and_post() {
        let pool = scratch_pool().await;
        let post = seed_post(&pool).await;

        let (feedback, updated) = record_revision(&pool, &post, "shorter", &draft("New body"))
            .await
            .unwrap();
        assert_eq!(feedback.post_id, post.id);
        assert_eq!(feedback.generated_version.as_deref(), Some("New body"));
        assert_eq!(updated.content, "New body");
        assert_eq!(updated.hashtags, Some(vec!["#a".to_string()]));
        assert_eq!(list_feedback(&pool, post.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    #[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
    async fn test_failed_post_update_leaves_no_feedback_row() {
        let pool = scratch_pool().await;
        let post = seed_post(&pool).await;

        // Violates the content length check, so the UPDATE fails after the INSERT.
        let too_long = "x".repeat(41);
        let result = record_revision(&pool, &post, "longer please", &draft(&too_long)).await;
        assert!(result.is_err());

        assert!(list_feedback(&pool, post.id).await.unwrap().is_empty());
        let unchanged = fetch_post(&pool, post.id).await.unwrap().unwrap();
        assert_eq!(unchanged.content, "Old body");
    }
}
