use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::{map_delete_error, map_error, map_write_error, WriteTarget};
use crate::core::error::Result;
use crate::features::categories::models::{Category, CategoryRecord};
use crate::modules::entity::SlugRepository;
use crate::shared::types::EntityKind;

const CATEGORY_COLUMNS: &str = "id, name, slug, description, icon, created_at, updated_at";

/// Persistence port for categories
#[async_trait]
pub trait CategoryRepository: SlugRepository<Entity = Category, Record = CategoryRecord> {
    /// All categories ordered by name
    async fn list_all(&self) -> Result<Vec<Category>>;

    /// Categories whose id is in `ids`, in no particular order
    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Category>>;
}

/// Postgres-backed category repository
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn target(record: &CategoryRecord) -> WriteTarget<'_> {
        WriteTarget {
            kind: EntityKind::Category,
            slug: &record.slug,
            category_id: None,
            app_id: None,
        }
    }
}

#[async_trait]
impl SlugRepository for PgCategoryRepository {
    type Entity = Category;
    type Record = CategoryRecord;

    fn kind(&self) -> EntityKind {
        EntityKind::Category
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {} FROM categories WHERE id = $1",
            CATEGORY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_error)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {} FROM categories WHERE slug = $1",
            CATEGORY_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_error)
    }

    async fn insert(&self, record: &CategoryRecord) -> Result<Category> {
        sqlx::query_as::<_, Category>(&format!(
            r#"
            INSERT INTO categories (id, name, slug, description, icon)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        ))
        .bind(Uuid::now_v7())
        .bind(&record.name)
        .bind(&record.slug)
        .bind(&record.description)
        .bind(&record.icon)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert category: {:?}", e);
            map_write_error(e, Self::target(record))
        })
    }

    async fn update(&self, id: Uuid, record: &CategoryRecord) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(&format!(
            r#"
            UPDATE categories
            SET name = $2, slug = $3, description = $4, icon = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        ))
        .bind(id)
        .bind(&record.name)
        .bind(&record.slug)
        .bind(&record.description)
        .bind(&record.icon)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update category {}: {:?}", id, e);
            map_write_error(e, Self::target(record))
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_delete_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {} FROM categories ORDER BY name",
            CATEGORY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            map_error(e)
        })
    }

    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Category>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, Category>(&format!(
            "SELECT {} FROM categories WHERE id = ANY($1)",
            CATEGORY_COLUMNS
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_error)
    }
}
