use sqlx::PgPool;

use crate::generation::generator::PostGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Post generator over the configured text-generation backend.
    pub generator: PostGenerator,
}
