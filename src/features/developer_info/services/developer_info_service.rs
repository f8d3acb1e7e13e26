use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::developer_info::dtos::{DeveloperInfoInputDto, DeveloperInfoResponseDto};
use crate::features::developer_info::models::DeveloperInfo;
use crate::features::developer_info::repositories::DeveloperInfoRepository;
use crate::shared::codec::DecodePolicy;
use crate::shared::constants::DEVELOPER_INFO_ID;
use crate::shared::types::EntityKind;

/// Service for the developer profile singleton
pub struct DeveloperInfoService {
    repo: Arc<dyn DeveloperInfoRepository>,
}

impl DeveloperInfoService {
    pub fn new(repo: Arc<dyn DeveloperInfoRepository>) -> Self {
        Self { repo }
    }

    /// Read the profile; not found until an admin has written it
    pub async fn get(&self, policy: DecodePolicy) -> Result<DeveloperInfoResponseDto> {
        let info = self.find_required().await?;
        DeveloperInfoResponseDto::build(info, policy)
    }

    /// Replace the profile, creating it if needed
    pub async fn update(&self, dto: DeveloperInfoInputDto) -> Result<DeveloperInfoResponseDto> {
        dto.check()?;
        let record = dto.into_record()?;
        let info = self.repo.upsert(DEVELOPER_INFO_ID, &record).await?;
        tracing::info!(id = %info.id, "Developer info updated");

        DeveloperInfoResponseDto::build(info, DecodePolicy::Strict)
    }

    async fn find_required(&self) -> Result<DeveloperInfo> {
        self.repo
            .find(DEVELOPER_INFO_ID)
            .await?
            .ok_or_else(|| AppError::EntityNotFound {
                kind: EntityKind::DeveloperInfo,
                identifier: DEVELOPER_INFO_ID.to_string(),
            })
    }
}
