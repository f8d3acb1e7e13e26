use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::apps::models::{App, AppRecord};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::models::Category;
use crate::modules::entity::EntityInput;
use crate::shared::codec::{decode_list, encode_list, DecodePolicy};
use crate::shared::types::PaginationQuery;
use crate::shared::validation::{missing_fields, SLUG_REGEX};

/// Request DTO for creating or replacing an app
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppInputDto {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub name: String,

    #[serde(default)]
    #[validate(
        length(max = 200),
        regex(path = *SLUG_REGEX, message = "slug must be lowercase words separated by single hyphens")
    )]
    pub slug: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub content: String,

    /// Id of an existing category
    #[serde(default)]
    pub category_id: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub size: String,

    #[serde(default)]
    pub downloads: String,

    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: Option<f64>,

    #[serde(default)]
    pub developer: String,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub screenshots: Vec<String>,

    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub header_image: String,

    #[serde(default)]
    #[validate(url(message = "downloadUrl must be a valid URL"))]
    pub download_url: String,
}

impl EntityInput for AppInputDto {
    type Record = AppRecord;

    fn check(&self) -> Result<()> {
        let mut missing = missing_fields(&[
            ("name", &self.name),
            ("slug", &self.slug),
            ("description", &self.description),
            ("content", &self.content),
            ("categoryId", &self.category_id),
            ("version", &self.version),
            ("size", &self.size),
            ("downloads", &self.downloads),
        ]);
        if self.rating.is_none() {
            missing.push("rating");
        }
        missing.extend(missing_fields(&[
            ("developer", &self.developer),
            ("icon", &self.icon),
            ("headerImage", &self.header_image),
            ("downloadUrl", &self.download_url),
        ]));
        if !missing.is_empty() {
            return Err(AppError::MissingFields(
                missing.into_iter().map(String::from).collect(),
            ));
        }

        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))
    }

    fn into_record(self) -> Result<AppRecord> {
        // A malformed id can never name a stored category
        let category_id = Uuid::parse_str(self.category_id.trim())
            .map_err(|_| AppError::CategoryMissing(self.category_id.clone()))?;
        let rating = self
            .rating
            .ok_or_else(|| AppError::MissingFields(vec!["rating".to_string()]))?;

        Ok(AppRecord {
            features: encode_list("features", &self.features)?,
            screenshots: encode_list("screenshots", &self.screenshots)?,
            name: self.name.trim().to_string(),
            slug: self.slug,
            description: self.description,
            content: self.content,
            category_id,
            version: self.version,
            size: self.size,
            downloads: self.downloads,
            rating,
            developer: self.developer,
            icon: self.icon,
            header_image: self.header_image,
            download_url: self.download_url,
        })
    }
}

/// Query params for the public app listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListAppsQuery {
    /// Only apps in the category with this slug
    pub category: Option<String>,

    /// Page number (1-indexed, default: 1)
    pub page: Option<i64>,

    /// Number of items per page (default: 10, max: 100)
    pub page_size: Option<i64>,
}

impl ListAppsQuery {
    pub fn pagination(&self) -> PaginationQuery {
        let defaults = PaginationQuery::default();
        PaginationQuery::new(
            self.page.unwrap_or(defaults.page),
            self.page_size.unwrap_or(defaults.page_size),
        )
    }
}

/// Response DTO for app, with composite fields decoded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub category_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryResponseDto>,
    pub version: String,
    pub size: String,
    pub downloads: String,
    pub rating: f64,
    pub developer: String,
    pub features: Vec<String>,
    pub screenshots: Vec<String>,
    pub icon: String,
    pub header_image: String,
    pub download_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AppResponseDto {
    /// Decode the stored lists under `policy` and attach the category if known
    pub fn build(app: App, category: Option<Category>, policy: DecodePolicy) -> Result<Self> {
        let features = policy.apply(decode_list("features", &app.features))?;
        let screenshots = policy.apply(decode_list("screenshots", &app.screenshots))?;

        Ok(Self {
            id: app.id,
            name: app.name,
            slug: app.slug,
            description: app.description,
            content: app.content,
            category_id: app.category_id,
            category: category.map(Into::into),
            version: app.version,
            size: app.size,
            downloads: app.downloads,
            rating: app.rating,
            developer: app.developer,
            features,
            screenshots,
            icon: app.icon,
            header_image: app.header_image,
            download_url: app.download_url,
            created_at: app.created_at,
            updated_at: app.updated_at,
        })
    }
}

/// Compact app reference embedded in blog posts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub icon: String,
}

impl From<App> for AppSummaryDto {
    fn from(app: App) -> Self {
        Self {
            id: app.id,
            name: app.name,
            slug: app.slug,
            icon: app.icon,
        }
    }
}
