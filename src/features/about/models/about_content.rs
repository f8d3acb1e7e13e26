use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the about page
#[derive(Debug, Clone, FromRow)]
pub struct AboutContent {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Values written to the `about_content` table
#[derive(Debug, Clone, PartialEq)]
pub struct AboutRecord {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}
