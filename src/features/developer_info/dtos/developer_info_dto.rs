use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::developer_info::models::{DeveloperInfo, DeveloperInfoRecord, TeamMember};
use crate::shared::codec::{
    decode_map, decode_records, encode_map, encode_records, DecodePolicy,
};
use crate::shared::validation::missing_fields;

/// Request DTO for replacing the developer profile
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperInfoInputDto {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub name: String,

    pub logo: Option<String>,

    #[serde(default)]
    pub description: String,

    pub founded: Option<String>,

    pub location: Option<String>,

    pub email: Option<String>,

    pub phone: Option<String>,

    pub address: Option<String>,

    /// Platform name to profile URL
    #[serde(default)]
    pub social_links: BTreeMap<String, String>,

    #[serde(default)]
    pub team_members: Vec<TeamMember>,

    /// Label to display value, e.g. `"appsPublished": "25+"`
    #[serde(default)]
    pub stats: BTreeMap<String, String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl DeveloperInfoInputDto {
    pub fn check(&self) -> Result<()> {
        let missing = missing_fields(&[
            ("name", &self.name),
            ("description", &self.description),
        ]);
        if !missing.is_empty() {
            return Err(AppError::MissingFields(
                missing.into_iter().map(String::from).collect(),
            ));
        }

        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))
    }

    pub fn into_record(self) -> Result<DeveloperInfoRecord> {
        Ok(DeveloperInfoRecord {
            social_links: encode_map("socialLinks", &self.social_links)?,
            team_members: encode_records("teamMembers", &self.team_members)?,
            stats: encode_map("stats", &self.stats)?,
            name: self.name.trim().to_string(),
            logo: non_blank(self.logo),
            description: self.description,
            founded: non_blank(self.founded),
            location: non_blank(self.location),
            email: non_blank(self.email),
            phone: non_blank(self.phone),
            address: non_blank(self.address),
        })
    }
}

/// Response DTO for the developer profile, with composite fields decoded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperInfoResponseDto {
    pub id: Uuid,
    pub name: String,
    pub logo: Option<String>,
    pub description: String,
    pub founded: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub social_links: BTreeMap<String, String>,
    pub team_members: Vec<TeamMember>,
    pub stats: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DeveloperInfoResponseDto {
    pub fn build(info: DeveloperInfo, policy: DecodePolicy) -> Result<Self> {
        let social_links = policy.apply(decode_map("socialLinks", &info.social_links))?;
        let team_members = policy.apply(decode_records("teamMembers", &info.team_members))?;
        let stats = policy.apply(decode_map("stats", &info.stats))?;

        Ok(Self {
            id: info.id,
            name: info.name,
            logo: info.logo,
            description: info.description,
            founded: info.founded,
            location: info.location,
            email: info.email,
            phone: info.phone,
            address: info.address,
            social_links,
            team_members,
            stats,
            created_at: info.created_at,
            updated_at: info.updated_at,
        })
    }
}
