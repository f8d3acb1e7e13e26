use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::modules::entity::{SlugEntity, WriteRecord};

/// Database model for blog post
#[derive(Debug, Clone, FromRow)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image: Option<String>,
    pub author: String,
    pub author_bio: Option<String>,
    pub author_image: Option<String>,
    pub category_id: Uuid,
    pub app_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SlugEntity for BlogPost {
    fn id(&self) -> Uuid {
        self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Validated values written to the `blog_posts` table
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPostRecord {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image: Option<String>,
    pub author: String,
    pub author_bio: Option<String>,
    pub author_image: Option<String>,
    pub category_id: Uuid,
    pub app_id: Option<Uuid>,
}

impl WriteRecord for BlogPostRecord {
    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Filter for the paginated blog listing
#[derive(Debug, Clone, Default)]
pub struct BlogPostFilter {
    pub category_id: Option<Uuid>,
    pub offset: i64,
    pub limit: i64,
}
