use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::modules::entity::{SlugEntity, WriteRecord};

/// Database model for app
///
/// `features` and `screenshots` hold codec-encoded lists.
#[derive(Debug, Clone, FromRow)]
pub struct App {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub category_id: Uuid,
    pub version: String,
    pub size: String,
    pub downloads: String,
    pub rating: f64,
    pub developer: String,
    pub features: String,
    pub screenshots: String,
    pub icon: String,
    pub header_image: String,
    pub download_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SlugEntity for App {
    fn id(&self) -> Uuid {
        self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Validated values written to the `apps` table
#[derive(Debug, Clone, PartialEq)]
pub struct AppRecord {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub category_id: Uuid,
    pub version: String,
    pub size: String,
    pub downloads: String,
    pub rating: f64,
    pub developer: String,
    pub features: String,
    pub screenshots: String,
    pub icon: String,
    pub header_image: String,
    pub download_url: String,
}

impl WriteRecord for AppRecord {
    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Filter for the paginated app listing
#[derive(Debug, Clone, Default)]
pub struct AppFilter {
    pub category_id: Option<Uuid>,
    pub offset: i64,
    pub limit: i64,
}
