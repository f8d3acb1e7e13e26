use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Database model for the developer profile
///
/// `social_links`, `team_members` and `stats` hold codec-encoded values.
#[derive(Debug, Clone, FromRow)]
pub struct DeveloperInfo {
    pub id: Uuid,
    pub name: String,
    pub logo: Option<String>,
    pub description: String,
    pub founded: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub social_links: String,
    pub team_members: String,
    pub stats: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values written to the `developer_info` table
#[derive(Debug, Clone, PartialEq)]
pub struct DeveloperInfoRecord {
    pub name: String,
    pub logo: Option<String>,
    pub description: String,
    pub founded: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub social_links: String,
    pub team_members: String,
    pub stats: String,
}

/// One entry of the team roster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
}
