use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::about::models::{AboutContent, AboutRecord};
use crate::shared::validation::missing_fields;

/// Request DTO for replacing the about page
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutInputDto {
    #[serde(default)]
    #[validate(length(max = 300))]
    pub title: String,

    /// Rich text (HTML)
    #[serde(default)]
    pub content: String,

    pub image: Option<String>,
}

impl AboutInputDto {
    pub fn check(&self) -> Result<()> {
        let missing = missing_fields(&[("title", &self.title), ("content", &self.content)]);
        if !missing.is_empty() {
            return Err(AppError::MissingFields(
                missing.into_iter().map(String::from).collect(),
            ));
        }

        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))
    }

    pub fn into_record(self) -> AboutRecord {
        AboutRecord {
            title: self.title.trim().to_string(),
            content: self.content,
            image: self.image.filter(|i| !i.trim().is_empty()),
        }
    }
}

/// Response DTO for the about page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutResponseDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<AboutContent> for AboutResponseDto {
    fn from(a: AboutContent) -> Self {
        Self {
            id: a.id,
            title: a.title,
            content: a.content,
            image: a.image,
            updated_at: a.updated_at,
        }
    }
}
