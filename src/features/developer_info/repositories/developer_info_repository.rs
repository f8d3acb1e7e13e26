use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::map_error;
use crate::core::error::Result;
use crate::features::developer_info::models::{DeveloperInfo, DeveloperInfoRecord};
use crate::modules::entity::SingletonRepository;

const DEVELOPER_INFO_COLUMNS: &str = "id, name, logo, description, founded, location, email, \
    phone, address, social_links, team_members, stats, created_at, updated_at";

/// Persistence port for the developer profile
pub trait DeveloperInfoRepository:
    SingletonRepository<Entity = DeveloperInfo, Record = DeveloperInfoRecord>
{
}

impl<T> DeveloperInfoRepository for T where
    T: SingletonRepository<Entity = DeveloperInfo, Record = DeveloperInfoRecord>
{
}

/// Postgres-backed developer profile repository
pub struct PgDeveloperInfoRepository {
    pool: PgPool,
}

impl PgDeveloperInfoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SingletonRepository for PgDeveloperInfoRepository {
    type Entity = DeveloperInfo;
    type Record = DeveloperInfoRecord;

    async fn find(&self, id: Uuid) -> Result<Option<DeveloperInfo>> {
        sqlx::query_as::<_, DeveloperInfo>(&format!(
            "SELECT {} FROM developer_info WHERE id = $1",
            DEVELOPER_INFO_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_error)
    }

    async fn upsert(&self, id: Uuid, record: &DeveloperInfoRecord) -> Result<DeveloperInfo> {
        sqlx::query_as::<_, DeveloperInfo>(&format!(
            r#"
            INSERT INTO developer_info (
                id, name, logo, description, founded, location, email, phone, address,
                social_links, team_members, stats
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                logo = EXCLUDED.logo,
                description = EXCLUDED.description,
                founded = EXCLUDED.founded,
                location = EXCLUDED.location,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                address = EXCLUDED.address,
                social_links = EXCLUDED.social_links,
                team_members = EXCLUDED.team_members,
                stats = EXCLUDED.stats,
                updated_at = NOW()
            RETURNING {}
            "#,
            DEVELOPER_INFO_COLUMNS
        ))
        .bind(id)
        .bind(&record.name)
        .bind(&record.logo)
        .bind(&record.description)
        .bind(&record.founded)
        .bind(&record.location)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.address)
        .bind(&record.social_links)
        .bind(&record.team_members)
        .bind(&record.stats)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save developer info: {:?}", e);
            map_error(e)
        })
    }

    async fn insert_if_absent(
        &self,
        id: Uuid,
        record: &DeveloperInfoRecord,
    ) -> Result<DeveloperInfo> {
        sqlx::query(
            r#"
            INSERT INTO developer_info (
                id, name, logo, description, founded, location, email, phone, address,
                social_links, team_members, stats
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(&record.name)
        .bind(&record.logo)
        .bind(&record.description)
        .bind(&record.founded)
        .bind(&record.location)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.address)
        .bind(&record.social_links)
        .bind(&record.team_members)
        .bind(&record.stats)
        .execute(&self.pool)
        .await
        .map_err(map_error)?;

        sqlx::query_as::<_, DeveloperInfo>(&format!(
            "SELECT {} FROM developer_info WHERE id = $1",
            DEVELOPER_INFO_COLUMNS
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_error)
    }
}
