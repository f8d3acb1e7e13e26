use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::map_error;
use crate::core::error::Result;
use crate::features::about::models::{AboutContent, AboutRecord};
use crate::modules::entity::SingletonRepository;

/// Persistence port for the about page
pub trait AboutRepository:
    SingletonRepository<Entity = AboutContent, Record = AboutRecord>
{
}

impl<T> AboutRepository for T where
    T: SingletonRepository<Entity = AboutContent, Record = AboutRecord>
{
}

/// Postgres-backed about page repository
pub struct PgAboutRepository {
    pool: PgPool,
}

impl PgAboutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SingletonRepository for PgAboutRepository {
    type Entity = AboutContent;
    type Record = AboutRecord;

    async fn find(&self, id: Uuid) -> Result<Option<AboutContent>> {
        sqlx::query_as::<_, AboutContent>(
            "SELECT id, title, content, image, updated_at FROM about_content WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_error)
    }

    async fn upsert(&self, id: Uuid, record: &AboutRecord) -> Result<AboutContent> {
        sqlx::query_as::<_, AboutContent>(
            r#"
            INSERT INTO about_content (id, title, content, image)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title,
                content = EXCLUDED.content,
                image = EXCLUDED.image,
                updated_at = NOW()
            RETURNING id, title, content, image, updated_at
            "#,
        )
        .bind(id)
        .bind(&record.title)
        .bind(&record.content)
        .bind(&record.image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save about content: {:?}", e);
            map_error(e)
        })
    }

    async fn insert_if_absent(&self, id: Uuid, record: &AboutRecord) -> Result<AboutContent> {
        sqlx::query(
            r#"
            INSERT INTO about_content (id, title, content, image)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(&record.title)
        .bind(&record.content)
        .bind(&record.image)
        .execute(&self.pool)
        .await
        .map_err(map_error)?;

        sqlx::query_as::<_, AboutContent>(
            "SELECT id, title, content, image, updated_at FROM about_content WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_error)
    }
}
