use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::{map_delete_error, map_error, map_write_error, WriteTarget};
use crate::core::error::Result;
use crate::features::blog_posts::models::{BlogPost, BlogPostFilter, BlogPostRecord};
use crate::modules::entity::SlugRepository;
use crate::shared::types::EntityKind;

const BLOG_POST_COLUMNS: &str = "id, title, slug, excerpt, content, image, author, author_bio, \
    author_image, category_id, app_id, created_at, updated_at";

/// Persistence port for blog posts
#[async_trait]
pub trait BlogPostRepository:
    SlugRepository<Entity = BlogPost, Record = BlogPostRecord>
{
    /// Number of posts in the category
    async fn count_by_category(&self, category_id: Uuid) -> Result<i64>;

    /// One page of posts, newest first, with the total matching the filter
    async fn list(&self, filter: &BlogPostFilter) -> Result<(Vec<BlogPost>, i64)>;
}

/// Postgres-backed blog post repository
pub struct PgBlogPostRepository {
    pool: PgPool,
}

impl PgBlogPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn target(record: &BlogPostRecord) -> WriteTarget<'_> {
        WriteTarget {
            kind: EntityKind::BlogPost,
            slug: &record.slug,
            category_id: Some(record.category_id),
            app_id: record.app_id,
        }
    }
}

#[async_trait]
impl SlugRepository for PgBlogPostRepository {
    type Entity = BlogPost;
    type Record = BlogPostRecord;

    fn kind(&self) -> EntityKind {
        EntityKind::BlogPost
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>> {
        sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {} FROM blog_posts WHERE id = $1",
            BLOG_POST_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_error)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>> {
        sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {} FROM blog_posts WHERE slug = $1",
            BLOG_POST_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_error)
    }

    async fn insert(&self, record: &BlogPostRecord) -> Result<BlogPost> {
        sqlx::query_as::<_, BlogPost>(&format!(
            r#"
            INSERT INTO blog_posts (
                id, title, slug, excerpt, content, image, author, author_bio,
                author_image, category_id, app_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            BLOG_POST_COLUMNS
        ))
        .bind(Uuid::now_v7())
        .bind(&record.title)
        .bind(&record.slug)
        .bind(&record.excerpt)
        .bind(&record.content)
        .bind(&record.image)
        .bind(&record.author)
        .bind(&record.author_bio)
        .bind(&record.author_image)
        .bind(record.category_id)
        .bind(record.app_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert blog post: {:?}", e);
            map_write_error(e, Self::target(record))
        })
    }

    async fn update(&self, id: Uuid, record: &BlogPostRecord) -> Result<Option<BlogPost>> {
        sqlx::query_as::<_, BlogPost>(&format!(
            r#"
            UPDATE blog_posts
            SET title = $2, slug = $3, excerpt = $4, content = $5, image = $6, author = $7,
                author_bio = $8, author_image = $9, category_id = $10, app_id = $11,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            BLOG_POST_COLUMNS
        ))
        .bind(id)
        .bind(&record.title)
        .bind(&record.slug)
        .bind(&record.excerpt)
        .bind(&record.content)
        .bind(&record.image)
        .bind(&record.author)
        .bind(&record.author_bio)
        .bind(&record.author_image)
        .bind(record.category_id)
        .bind(record.app_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update blog post {}: {:?}", id, e);
            map_write_error(e, Self::target(record))
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_delete_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl BlogPostRepository for PgBlogPostRepository {
    async fn count_by_category(&self, category_id: Uuid) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blog_posts WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_error)
    }

    async fn list(&self, filter: &BlogPostFilter) -> Result<(Vec<BlogPost>, i64)> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM blog_posts WHERE ($1::uuid IS NULL OR category_id = $1)",
        )
        .bind(filter.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_error)?;

        let posts = sqlx::query_as::<_, BlogPost>(&format!(
            r#"
            SELECT {}
            FROM blog_posts
            WHERE ($1::uuid IS NULL OR category_id = $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
            BLOG_POST_COLUMNS
        ))
        .bind(filter.category_id)
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list blog posts: {:?}", e);
            map_error(e)
        })?;

        Ok((posts, total))
    }
}
