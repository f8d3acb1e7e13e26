use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::apps::dtos::AppSummaryDto;
use crate::features::apps::models::App;
use crate::features::blog_posts::models::{BlogPost, BlogPostRecord};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::models::Category;
use crate::modules::entity::EntityInput;
use crate::shared::constants::BLOG_PAGE_SIZE;
use crate::shared::types::{EntityKind, PaginationQuery};
use crate::shared::validation::{missing_fields, SLUG_REGEX};

/// Request DTO for creating or replacing a blog post
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostInputDto {
    #[serde(default)]
    #[validate(length(max = 300))]
    pub title: String,

    #[serde(default)]
    #[validate(
        length(max = 300),
        regex(path = *SLUG_REGEX, message = "slug must be lowercase words separated by single hyphens")
    )]
    pub slug: String,

    #[serde(default)]
    pub excerpt: String,

    #[serde(default)]
    pub content: String,

    pub image: Option<String>,

    #[serde(default)]
    pub author: String,

    pub author_bio: Option<String>,

    pub author_image: Option<String>,

    /// Id of an existing category
    #[serde(default)]
    pub category_id: String,

    /// Id of the app this post is about, if any
    pub app_id: Option<String>,
}

/// Blank optional text is stored as absent
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl EntityInput for BlogPostInputDto {
    type Record = BlogPostRecord;

    fn check(&self) -> Result<()> {
        let missing = missing_fields(&[
            ("title", &self.title),
            ("slug", &self.slug),
            ("excerpt", &self.excerpt),
            ("content", &self.content),
            ("author", &self.author),
            ("categoryId", &self.category_id),
        ]);
        if !missing.is_empty() {
            return Err(AppError::MissingFields(
                missing.into_iter().map(String::from).collect(),
            ));
        }

        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))
    }

    fn into_record(self) -> Result<BlogPostRecord> {
        let category_id = Uuid::parse_str(self.category_id.trim())
            .map_err(|_| AppError::CategoryMissing(self.category_id.clone()))?;
        let app_id = match non_blank(self.app_id) {
            Some(raw) => Some(Uuid::parse_str(raw.trim()).map_err(|_| {
                AppError::ReferenceMissing {
                    kind: EntityKind::App,
                    id: raw.clone(),
                }
            })?),
            None => None,
        };

        Ok(BlogPostRecord {
            title: self.title.trim().to_string(),
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            image: non_blank(self.image),
            author: self.author,
            author_bio: non_blank(self.author_bio),
            author_image: non_blank(self.author_image),
            category_id,
            app_id,
        })
    }
}

/// Query params for the public blog listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListBlogPostsQuery {
    /// Only posts in the category with this slug
    pub category: Option<String>,

    /// Page number (1-indexed, default: 1)
    pub page: Option<i64>,

    /// Number of posts per page (default: 9, max: 100); `limit` is accepted too
    #[serde(alias = "limit")]
    pub page_size: Option<i64>,
}

impl ListBlogPostsQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(BLOG_PAGE_SIZE),
        )
    }
}

/// Response DTO for blog post
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponseDto {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryResponseDto>,
    pub app_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<AppSummaryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPostResponseDto {
    pub fn build(post: BlogPost, category: Option<Category>, app: Option<App>) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            image: post.image,
            author: post.author,
            author_bio: post.author_bio,
            author_image: post.author_image,
            category_id: post.category_id,
            category: category.map(Into::into),
            app_id: post.app_id,
            app: app.map(Into::into),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
