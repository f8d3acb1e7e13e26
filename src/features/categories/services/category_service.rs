use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::{AppError, Result};
use crate::features::apps::repositories::AppRepository;
use crate::features::blog_posts::repositories::BlogPostRepository;
use crate::features::categories::dtos::{CategoryInputDto, CategoryResponseDto};
use crate::features::categories::models::{Category, CategoryRecord};
use crate::features::categories::repositories::CategoryRepository;
use crate::modules::entity::{MutationOrchestrator, MutationRules};

/// A category may only be deleted once nothing references it
struct CategoryRules {
    apps: Arc<dyn AppRepository>,
    blog_posts: Arc<dyn BlogPostRepository>,
}

#[async_trait]
impl MutationRules<Category, CategoryRecord> for CategoryRules {
    async fn check_delete(&self, category: &Category) -> Result<()> {
        let (apps_count, blog_posts_count) = futures::try_join!(
            self.apps.count_by_category(category.id),
            self.blog_posts.count_by_category(category.id),
        )?;

        if apps_count > 0 || blog_posts_count > 0 {
            return Err(AppError::DependencyConflict {
                apps_count,
                blog_posts_count,
            });
        }

        Ok(())
    }
}

/// Service for category operations
pub struct CategoryService {
    orchestrator: MutationOrchestrator<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        apps: Arc<dyn AppRepository>,
        blog_posts: Arc<dyn BlogPostRepository>,
    ) -> Self {
        let rules = Arc::new(CategoryRules { apps, blog_posts });
        Self {
            orchestrator: MutationOrchestrator::new(repo, rules),
        }
    }

    /// List all categories (flat list, ordered by name)
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.orchestrator.repo().list_all().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Get category by id or slug
    pub async fn get(&self, identifier: &str) -> Result<CategoryResponseDto> {
        let category = self.orchestrator.resolve_required(identifier).await?;
        Ok(category.into())
    }

    pub async fn create(&self, dto: CategoryInputDto) -> Result<CategoryResponseDto> {
        let category = self.orchestrator.create(dto).await?;
        Ok(category.into())
    }

    pub async fn update(
        &self,
        identifier: &str,
        dto: CategoryInputDto,
    ) -> Result<CategoryResponseDto> {
        let category = self.orchestrator.update(identifier, dto).await?;
        Ok(category.into())
    }

    /// Delete a category; blocked while apps or blog posts reference it
    pub async fn delete(&self, identifier: &str) -> Result<CategoryResponseDto> {
        let category = self.orchestrator.delete(identifier).await?;
        Ok(category.into())
    }
}
