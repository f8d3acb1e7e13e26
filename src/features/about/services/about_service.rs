use std::sync::Arc;

use crate::core::error::Result;
use crate::features::about::dtos::{AboutInputDto, AboutResponseDto};
use crate::features::about::models::AboutRecord;
use crate::features::about::repositories::AboutRepository;
use crate::shared::constants::{
    ABOUT_CONTENT_ID, DEFAULT_ABOUT_CONTENT, DEFAULT_ABOUT_IMAGE, DEFAULT_ABOUT_TITLE,
};

/// Service for the about page singleton
pub struct AboutService {
    repo: Arc<dyn AboutRepository>,
}

impl AboutService {
    pub fn new(repo: Arc<dyn AboutRepository>) -> Self {
        Self { repo }
    }

    /// Read the about page, creating the default one on first read
    pub async fn get(&self) -> Result<AboutResponseDto> {
        if let Some(about) = self.repo.find(ABOUT_CONTENT_ID).await? {
            return Ok(about.into());
        }

        let defaults = AboutRecord {
            title: DEFAULT_ABOUT_TITLE.to_string(),
            content: DEFAULT_ABOUT_CONTENT.to_string(),
            image: Some(DEFAULT_ABOUT_IMAGE.to_string()),
        };
        let about = self
            .repo
            .insert_if_absent(ABOUT_CONTENT_ID, &defaults)
            .await?;
        tracing::info!("Seeded default about content");

        Ok(about.into())
    }

    /// Replace the about page, creating it if needed
    pub async fn update(&self, dto: AboutInputDto) -> Result<AboutResponseDto> {
        dto.check()?;
        let about = self
            .repo
            .upsert(ABOUT_CONTENT_ID, &dto.into_record())
            .await?;
        tracing::info!(id = %about.id, "About content updated");

        Ok(about.into())
    }
}
