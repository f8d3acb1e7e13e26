use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryRecord};
use crate::modules::entity::EntityInput;
use crate::shared::validation::{missing_fields, SLUG_REGEX};

/// Request DTO for creating or replacing a category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInputDto {
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
    pub icon: String,
}

impl EntityInput for CategoryInputDto {
    type Record = CategoryRecord;

    fn check(&self) -> Result<()> {
        let missing = missing_fields(&[
            ("name", &self.name),
            ("slug", &self.slug),
            ("description", &self.description),
            ("icon", &self.icon),
        ]);
        if !missing.is_empty() {
            return Err(AppError::MissingFields(
                missing.into_iter().map(String::from).collect(),
            ));
        }

        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))
    }

    fn into_record(self) -> Result<CategoryRecord> {
        Ok(CategoryRecord {
            name: self.name.trim().to_string(),
            slug: self.slug,
            description: self.description,
            icon: self.icon,
        })
    }
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            description: c.description,
            icon: c.icon,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
