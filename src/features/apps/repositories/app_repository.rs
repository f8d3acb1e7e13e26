use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::{map_delete_error, map_error, map_write_error, WriteTarget};
use crate::core::error::Result;
use crate::features::apps::models::{App, AppFilter, AppRecord};
use crate::modules::entity::SlugRepository;
use crate::shared::types::EntityKind;

const APP_COLUMNS: &str = "id, name, slug, description, content, category_id, version, size, \
    downloads, rating, developer, features, screenshots, icon, header_image, download_url, \
    created_at, updated_at";

/// Persistence port for apps
#[async_trait]
pub trait AppRepository: SlugRepository<Entity = App, Record = AppRecord> {
    /// Number of apps in the category
    async fn count_by_category(&self, category_id: Uuid) -> Result<i64>;

    /// One page of apps, newest first, with the total matching the filter
    async fn list(&self, filter: &AppFilter) -> Result<(Vec<App>, i64)>;
}

/// Postgres-backed app repository
pub struct PgAppRepository {
    pool: PgPool,
}

impl PgAppRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn target(record: &AppRecord) -> WriteTarget<'_> {
        WriteTarget {
            kind: EntityKind::App,
            slug: &record.slug,
            category_id: Some(record.category_id),
            app_id: None,
        }
    }
}

#[async_trait]
impl SlugRepository for PgAppRepository {
    type Entity = App;
    type Record = AppRecord;

    fn kind(&self) -> EntityKind {
        EntityKind::App
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<App>> {
        sqlx::query_as::<_, App>(&format!("SELECT {} FROM apps WHERE id = $1", APP_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_error)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<App>> {
        sqlx::query_as::<_, App>(&format!("SELECT {} FROM apps WHERE slug = $1", APP_COLUMNS))
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_error)
    }

    async fn insert(&self, record: &AppRecord) -> Result<App> {
        sqlx::query_as::<_, App>(&format!(
            r#"
            INSERT INTO apps (
                id, name, slug, description, content, category_id, version, size,
                downloads, rating, developer, features, screenshots, icon, header_image,
                download_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING {}
            "#,
            APP_COLUMNS
        ))
        .bind(Uuid::now_v7())
        .bind(&record.name)
        .bind(&record.slug)
        .bind(&record.description)
        .bind(&record.content)
        .bind(record.category_id)
        .bind(&record.version)
        .bind(&record.size)
        .bind(&record.downloads)
        .bind(record.rating)
        .bind(&record.developer)
        .bind(&record.features)
        .bind(&record.screenshots)
        .bind(&record.icon)
        .bind(&record.header_image)
        .bind(&record.download_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert app: {:?}", e);
            map_write_error(e, Self::target(record))
        })
    }

    async fn update(&self, id: Uuid, record: &AppRecord) -> Result<Option<App>> {
        sqlx::query_as::<_, App>(&format!(
            r#"
            UPDATE apps
            SET name = $2, slug = $3, description = $4, content = $5, category_id = $6,
                version = $7, size = $8, downloads = $9, rating = $10, developer = $11,
                features = $12, screenshots = $13, icon = $14, header_image = $15,
                download_url = $16, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            APP_COLUMNS
        ))
        .bind(id)
        .bind(&record.name)
        .bind(&record.slug)
        .bind(&record.description)
        .bind(&record.content)
        .bind(record.category_id)
        .bind(&record.version)
        .bind(&record.size)
        .bind(&record.downloads)
        .bind(record.rating)
        .bind(&record.developer)
        .bind(&record.features)
        .bind(&record.screenshots)
        .bind(&record.icon)
        .bind(&record.header_image)
        .bind(&record.download_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update app {}: {:?}", id, e);
            map_write_error(e, Self::target(record))
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM apps WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_delete_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl AppRepository for PgAppRepository {
    async fn count_by_category(&self, category_id: Uuid) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM apps WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_error)
    }

    async fn list(&self, filter: &AppFilter) -> Result<(Vec<App>, i64)> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM apps WHERE ($1::uuid IS NULL OR category_id = $1)",
        )
        .bind(filter.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_error)?;

        let apps = sqlx::query_as::<_, App>(&format!(
            r#"
            SELECT {}
            FROM apps
            WHERE ($1::uuid IS NULL OR category_id = $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
            APP_COLUMNS
        ))
        .bind(filter.category_id)
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list apps: {:?}", e);
            map_error(e)
        })?;

        Ok((apps, total))
    }
}
