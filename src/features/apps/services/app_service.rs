use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::apps::dtos::{AppInputDto, AppResponseDto, ListAppsQuery};
use crate::features::apps::models::{App, AppFilter, AppRecord};
use crate::features::apps::repositories::AppRepository;
use crate::features::categories::models::Category;
use crate::features::categories::repositories::CategoryRepository;
use crate::modules::entity::{MutationOrchestrator, MutationRules, UniquenessGuard};
use crate::shared::codec::DecodePolicy;
use crate::shared::types::Meta;

/// An app must point at an existing category
struct AppRules {
    categories: Arc<dyn CategoryRepository>,
}

#[async_trait]
impl MutationRules<App, AppRecord> for AppRules {
    async fn check_references(&self, record: &AppRecord) -> Result<()> {
        UniquenessGuard::check_foreign_key(self.categories.as_ref(), record.category_id).await
    }
}

/// Service for app catalog operations
pub struct AppService {
    orchestrator: MutationOrchestrator<dyn AppRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl AppService {
    pub fn new(repo: Arc<dyn AppRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        let rules = Arc::new(AppRules {
            categories: categories.clone(),
        });
        Self {
            orchestrator: MutationOrchestrator::new(repo, rules),
            categories,
        }
    }

    /// List apps newest first, optionally limited to one category slug.
    ///
    /// An unknown category slug yields an empty page rather than an error.
    pub async fn list(&self, query: &ListAppsQuery) -> Result<(Vec<AppResponseDto>, Meta)> {
        let pagination = query.pagination();

        let category_id = match query.category.as_deref() {
            Some(slug) => match self.categories.find_by_slug(slug).await? {
                Some(category) => Some(category.id),
                None => return Ok((Vec::new(), Meta::new(0, &pagination))),
            },
            None => None,
        };

        let filter = AppFilter {
            category_id,
            offset: pagination.offset(),
            limit: pagination.limit(),
        };
        let (apps, total) = self.orchestrator.repo().list(&filter).await?;

        let mut ids: Vec<_> = apps.iter().map(|a| a.category_id).collect();
        ids.sort_unstable();
        ids.dedup();
        let categories: HashMap<_, Category> = self
            .categories
            .find_many(&ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let items = apps
            .into_iter()
            .map(|app| {
                let category = categories.get(&app.category_id).cloned();
                AppResponseDto::build(app, category, DecodePolicy::Lenient)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((items, Meta::new(total, &pagination)))
    }

    /// Get app by id or slug, decoding stored lists under `policy`
    pub async fn get(&self, identifier: &str, policy: DecodePolicy) -> Result<AppResponseDto> {
        let app = self.orchestrator.resolve_required(identifier).await?;
        self.with_category(app, policy).await
    }

    pub async fn create(&self, dto: AppInputDto) -> Result<AppResponseDto> {
        let app = self.orchestrator.create(dto).await?;
        self.with_category(app, DecodePolicy::Strict).await
    }

    pub async fn update(&self, identifier: &str, dto: AppInputDto) -> Result<AppResponseDto> {
        let app = self.orchestrator.update(identifier, dto).await?;
        self.with_category(app, DecodePolicy::Strict).await
    }

    /// Delete an app; blog posts pointing at it lose their app link
    pub async fn delete(&self, identifier: &str) -> Result<AppResponseDto> {
        let app = self.orchestrator.delete(identifier).await?;
        self.with_category(app, DecodePolicy::Lenient).await
    }

    async fn with_category(&self, app: App, policy: DecodePolicy) -> Result<AppResponseDto> {
        let category = self.categories.find_by_id(app.category_id).await?;
        AppResponseDto::build(app, category, policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::core::error::AppError;
    use crate::shared::memory_store::MemoryStore;
    use crate::shared::test_helpers::{app_input, category_input};

    async fn games(store: &MemoryStore) -> String {
        let category = store
            .category_service()
            .create(category_input("games"))
            .await
            .unwrap();
        category.id.to_string()
    }

    fn list_query(category: Option<&str>, page: i64, page_size: i64) -> ListAppsQuery {
        ListAppsQuery {
            category: category.map(String::from),
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    #[tokio::test]
    async fn test_create_embeds_category() {
        let store = MemoryStore::new();
        let category_id = games(&store).await;
        let apps = store.app_service();

        let app = apps.create(app_input("x", &category_id)).await.unwrap();

        assert_eq!(app.slug, "x");
        assert_eq!(app.category.map(|c| c.slug), Some("games".to_string()));
    }

    #[tokio::test]
    async fn test_create_with_unknown_category_persists_nothing() {
        let store = MemoryStore::new();
        let apps = store.app_service();
        let ghost = Uuid::now_v7().to_string();

        let err = apps.create(app_input("x", &ghost)).await.unwrap_err();

        assert!(matches!(err, AppError::CategoryMissing(ref id) if *id == ghost));
        assert!(matches!(
            apps.get("x", DecodePolicy::Lenient).await,
            Err(AppError::EntityNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_to_unknown_category_is_rejected() {
        let store = MemoryStore::new();
        let category_id = games(&store).await;
        let apps = store.app_service();
        apps.create(app_input("x", &category_id)).await.unwrap();

        let ghost = Uuid::now_v7().to_string();
        let err = apps.update("x", app_input("x", &ghost)).await.unwrap_err();

        assert!(matches!(err, AppError::CategoryMissing(_)));
        let unchanged = apps.get("x", DecodePolicy::Strict).await.unwrap();
        assert_eq!(unchanged.category_id.to_string(), category_id);
    }

    #[tokio::test]
    async fn test_duplicate_slug_conflicts() {
        let store = MemoryStore::new();
        let category_id = games(&store).await;
        let apps = store.app_service();
        apps.create(app_input("x", &category_id)).await.unwrap();

        let err = apps.create(app_input("x", &category_id)).await.unwrap_err();
        assert!(matches!(err, AppError::SlugConflict { ref slug, .. } if slug == "x"));
    }

    #[tokio::test]
    async fn test_corrupt_features_strict_vs_lenient() {
        let store = MemoryStore::new();
        let category_id = games(&store).await;
        let apps = store.app_service();
        let created = apps.create(app_input("x", &category_id)).await.unwrap();
        store.corrupt_app_features(created.id, "{not a list").await;

        let public = apps.get("x", DecodePolicy::Lenient).await.unwrap();
        assert!(public.features.is_empty());

        let err = apps.get("x", DecodePolicy::Strict).await.unwrap_err();
        assert!(matches!(err, AppError::Decode(ref e) if e.field == "features"));
    }

    #[tokio::test]
    async fn test_list_filters_by_category_and_paginates() {
        let store = MemoryStore::new();
        let category_id = games(&store).await;
        let social = store
            .category_service()
            .create(category_input("social"))
            .await
            .unwrap();
        let apps = store.app_service();
        for slug in ["a", "b", "c"] {
            apps.create(app_input(slug, &category_id)).await.unwrap();
        }
        apps.create(app_input("chat", &social.id.to_string()))
            .await
            .unwrap();

        let (page, meta) = apps.list(&list_query(Some("games"), 1, 2)).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(meta.total, 3);
        assert_eq!(meta.pages, 2);
        // newest first
        assert_eq!(page[0].slug, "c");
        assert!(page.iter().all(|a| a.category.is_some()));

        let (all, meta) = apps.list(&list_query(None, 1, 10)).await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(meta.total, 4);
    }

    #[tokio::test]
    async fn test_list_unknown_category_is_empty() {
        let store = MemoryStore::new();
        let apps = store.app_service();

        let (items, meta) = apps.list(&list_query(Some("nope"), 1, 10)).await.unwrap();
        assert!(items.is_empty());
        assert_eq!(meta.total, 0);
    }
}
