use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct PersonRow {
    pub id: Uuid,
    pub name: String,
    pub title: Option<String>,
    pub company: Option<String>,
    pub bio: Option<String>,
    pub industry: Option<String>,
    pub target_audience: Option<String>,
    pub key_expertise: Option<Vec<String>>,
    pub personal_branding_notes: Option<String>,
    pub language: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct CompanyRow {
    pub id: Uuid,
    pub name: String,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub mission_statement: Option<String>,
    pub target_audience: Option<String>,
    pub key_products_services: Option<Vec<String>>,
    pub company_culture_notes: Option<String>,
    pub language: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
