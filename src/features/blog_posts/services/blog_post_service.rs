use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::apps::models::App;
use crate::features::apps::repositories::AppRepository;
use crate::features::blog_posts::dtos::{
    BlogPostInputDto, BlogPostResponseDto, ListBlogPostsQuery,
};
use crate::features::blog_posts::models::{BlogPost, BlogPostFilter, BlogPostRecord};
use crate::features::blog_posts::repositories::BlogPostRepository;
use crate::features::categories::models::Category;
use crate::features::categories::repositories::CategoryRepository;
use crate::modules::entity::{MutationOrchestrator, MutationRules, UniquenessGuard};
use crate::shared::types::Meta;

/// A post must point at an existing category, and at an existing app if it names one
struct BlogPostRules {
    categories: Arc<dyn CategoryRepository>,
    apps: Arc<dyn AppRepository>,
}

#[async_trait]
impl MutationRules<BlogPost, BlogPostRecord> for BlogPostRules {
    async fn check_references(&self, record: &BlogPostRecord) -> Result<()> {
        UniquenessGuard::check_foreign_key(self.categories.as_ref(), record.category_id).await?;
        if let Some(app_id) = record.app_id {
            UniquenessGuard::check_foreign_key(self.apps.as_ref(), app_id).await?;
        }
        Ok(())
    }
}

/// Service for blog operations
pub struct BlogPostService {
    orchestrator: MutationOrchestrator<dyn BlogPostRepository>,
    categories: Arc<dyn CategoryRepository>,
    apps: Arc<dyn AppRepository>,
}

impl BlogPostService {
    pub fn new(
        repo: Arc<dyn BlogPostRepository>,
        categories: Arc<dyn CategoryRepository>,
        apps: Arc<dyn AppRepository>,
    ) -> Self {
        let rules = Arc::new(BlogPostRules {
            categories: categories.clone(),
            apps: apps.clone(),
        });
        Self {
            orchestrator: MutationOrchestrator::new(repo, rules),
            categories,
            apps,
        }
    }

    /// List posts newest first, optionally limited to one category slug
    pub async fn list(
        &self,
        query: &ListBlogPostsQuery,
    ) -> Result<(Vec<BlogPostResponseDto>, Meta)> {
        let pagination = query.pagination();

        let category_id = match query.category.as_deref() {
            Some(slug) => match self.categories.find_by_slug(slug).await? {
                Some(category) => Some(category.id),
                None => return Ok((Vec::new(), Meta::new(0, &pagination))),
            },
            None => None,
        };

        let filter = BlogPostFilter {
            category_id,
            offset: pagination.offset(),
            limit: pagination.limit(),
        };
        let (posts, total) = self.orchestrator.repo().list(&filter).await?;

        let categories = self.categories_for(&posts).await?;
        let apps = self.apps_for(&posts).await?;

        let items = posts
            .into_iter()
            .map(|post| {
                let category = categories.get(&post.category_id).cloned();
                let app = post.app_id.and_then(|id| apps.get(&id).cloned());
                BlogPostResponseDto::build(post, category, app)
            })
            .collect();

        Ok((items, Meta::new(total, &pagination)))
    }

    /// Get post by id or slug, with its category and app
    pub async fn get(&self, identifier: &str) -> Result<BlogPostResponseDto> {
        let post = self.orchestrator.resolve_required(identifier).await?;
        self.with_relations(post).await
    }

    pub async fn create(&self, dto: BlogPostInputDto) -> Result<BlogPostResponseDto> {
        let post = self.orchestrator.create(dto).await?;
        self.with_relations(post).await
    }

    pub async fn update(
        &self,
        identifier: &str,
        dto: BlogPostInputDto,
    ) -> Result<BlogPostResponseDto> {
        let post = self.orchestrator.update(identifier, dto).await?;
        self.with_relations(post).await
    }

    pub async fn delete(&self, identifier: &str) -> Result<BlogPostResponseDto> {
        let post = self.orchestrator.delete(identifier).await?;
        self.with_relations(post).await
    }

    async fn with_relations(&self, post: BlogPost) -> Result<BlogPostResponseDto> {
        let category = self.categories.find_by_id(post.category_id).await?;
        let app = match post.app_id {
            Some(id) => self.apps.find_by_id(id).await?,
            None => None,
        };
        Ok(BlogPostResponseDto::build(post, category, app))
    }

    async fn categories_for(&self, posts: &[BlogPost]) -> Result<HashMap<Uuid, Category>> {
        let mut ids: Vec<Uuid> = posts.iter().map(|p| p.category_id).collect();
        ids.sort_unstable();
        ids.dedup();

        Ok(self
            .categories
            .find_many(&ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect())
    }

    async fn apps_for(&self, posts: &[BlogPost]) -> Result<HashMap<Uuid, App>> {
        let mut ids: Vec<Uuid> = posts.iter().filter_map(|p| p.app_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let mut apps = HashMap::with_capacity(ids.len());
        for id in ids {
            if let Some(app) = self.apps.find_by_id(id).await? {
                apps.insert(id, app);
            }
        }
        Ok(apps)
    }
}
