//! In-memory stand-in for the Postgres repositories, used by tests.
//!
//! Enforces the same slug uniqueness, foreign keys and delete behaviour as
//! the schema in `migrations/`, reporting violations the way
//! `core::database` classifies them.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::router::Services;
use crate::features::about::models::{AboutContent, AboutRecord};
use crate::features::about::AboutService;
use crate::features::apps::models::{App, AppFilter, AppRecord};
use crate::features::apps::{AppRepository, AppService};
use crate::features::blog_posts::models::{BlogPost, BlogPostFilter, BlogPostRecord};
use crate::features::blog_posts::{BlogPostRepository, BlogPostService};
use crate::features::categories::models::{Category, CategoryRecord};
use crate::features::categories::{CategoryRepository, CategoryService};
use crate::features::developer_info::models::{DeveloperInfo, DeveloperInfoRecord};
use crate::features::developer_info::DeveloperInfoService;
use crate::modules::entity::{SingletonRepository, SlugRepository};
use crate::shared::types::EntityKind;

/// Rows are kept in insertion order
#[derive(Default)]
struct State {
    categories: Vec<Category>,
    apps: Vec<App>,
    blog_posts: Vec<BlogPost>,
    about: Option<AboutContent>,
    developer_info: Option<DeveloperInfo>,
}

impl State {
    fn category_exists(&self, id: Uuid) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    fn app_exists(&self, id: Uuid) -> bool {
        self.apps.iter().any(|a| a.id == id)
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category_repo(&self) -> Arc<dyn CategoryRepository> {
        Arc::new(MemoryCategories(self.clone()))
    }

    pub fn app_repo(&self) -> Arc<dyn AppRepository> {
        Arc::new(MemoryApps(self.clone()))
    }

    pub fn blog_post_repo(&self) -> Arc<dyn BlogPostRepository> {
        Arc::new(MemoryBlogPosts(self.clone()))
    }

    pub fn category_service(&self) -> CategoryService {
        CategoryService::new(self.category_repo(), self.app_repo(), self.blog_post_repo())
    }

    pub fn app_service(&self) -> AppService {
        AppService::new(self.app_repo(), self.category_repo())
    }

    pub fn blog_post_service(&self) -> BlogPostService {
        BlogPostService::new(self.blog_post_repo(), self.category_repo(), self.app_repo())
    }

    pub fn about_service(&self) -> AboutService {
        AboutService::new(Arc::new(MemoryAbout(self.clone())))
    }

    pub fn developer_info_service(&self) -> DeveloperInfoService {
        DeveloperInfoService::new(Arc::new(MemoryDeveloperInfo(self.clone())))
    }

    pub fn services(&self) -> Services {
        Services {
            categories: Arc::new(self.category_service()),
            apps: Arc::new(self.app_service()),
            blog_posts: Arc::new(self.blog_post_service()),
            about: Arc::new(self.about_service()),
            developer_info: Arc::new(self.developer_info_service()),
        }
    }

    /// Insert a category bypassing slug validation
    pub async fn insert_category_raw(&self, name: &str, slug: &str) -> Category {
        let now = Utc::now();
        let category = Category {
            id: Uuid::now_v7(),
            name: name.to_string(),
            slug: slug.to_string(),
            description: String::new(),
            icon: String::new(),
            created_at: now,
            updated_at: now,
        };
        self.state.write().await.categories.push(category.clone());
        category
    }

    pub async fn count_categories_with_slug(&self, slug: &str) -> usize {
        self.state
            .read()
            .await
            .categories
            .iter()
            .filter(|c| c.slug == slug)
            .count()
    }

    /// Overwrite an app's stored `features` text
    pub async fn corrupt_app_features(&self, id: Uuid, text: &str) {
        let mut state = self.state.write().await;
        if let Some(app) = state.apps.iter_mut().find(|a| a.id == id) {
            app.features = text.to_string();
        }
    }

    /// Overwrite the developer profile's stored `stats` text
    pub async fn corrupt_developer_stats(&self, text: &str) {
        let mut state = self.state.write().await;
        if let Some(info) = state.developer_info.as_mut() {
            info.stats = text.to_string();
        }
    }
}

fn slug_conflict(kind: EntityKind, slug: &str) -> AppError {
    AppError::SlugConflict {
        kind,
        slug: slug.to_string(),
    }
}

/// Newest first, then one page
fn page<T: Clone>(rows: Vec<&T>, offset: i64, limit: i64) -> (Vec<T>, i64) {
    let total = rows.len() as i64;
    let items = rows
        .into_iter()
        .rev()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .cloned()
        .collect();
    (items, total)
}

struct MemoryCategories(MemoryStore);

#[async_trait]
impl SlugRepository for MemoryCategories {
    type Entity = Category;
    type Record = CategoryRecord;

    fn kind(&self) -> EntityKind {
        EntityKind::Category
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        let state = self.0.state.read().await;
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        let state = self.0.state.read().await;
        Ok(state.categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn insert(&self, record: &CategoryRecord) -> Result<Category> {
        let mut state = self.0.state.write().await;
        if state.categories.iter().any(|c| c.slug == record.slug) {
            return Err(slug_conflict(EntityKind::Category, &record.slug));
        }

        let now = Utc::now();
        let category = Category {
            id: Uuid::now_v7(),
            name: record.name.clone(),
            slug: record.slug.clone(),
            description: record.description.clone(),
            icon: record.icon.clone(),
            created_at: now,
            updated_at: now,
        };
        state.categories.push(category.clone());
        Ok(category)
    }

    async fn update(&self, id: Uuid, record: &CategoryRecord) -> Result<Option<Category>> {
        let mut state = self.0.state.write().await;
        if state
            .categories
            .iter()
            .any(|c| c.slug == record.slug && c.id != id)
        {
            return Err(slug_conflict(EntityKind::Category, &record.slug));
        }

        Ok(state
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .map(|c| {
                c.name = record.name.clone();
                c.slug = record.slug.clone();
                c.description = record.description.clone();
                c.icon = record.icon.clone();
                c.updated_at = Utc::now();
                c.clone()
            }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut state = self.0.state.write().await;
        if state.apps.iter().any(|a| a.category_id == id) {
            return Err(AppError::ReferenceViolation(
                "apps_category_id_fkey".to_string(),
            ));
        }
        if state.blog_posts.iter().any(|p| p.category_id == id) {
            return Err(AppError::ReferenceViolation(
                "blog_posts_category_id_fkey".to_string(),
            ));
        }

        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        Ok(state.categories.len() < before)
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategories {
    async fn list_all(&self) -> Result<Vec<Category>> {
        let state = self.0.state.read().await;
        let mut categories = state.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Category>> {
        let state = self.0.state.read().await;
        Ok(state
            .categories
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }
}

struct MemoryApps(MemoryStore);

impl MemoryApps {
    fn apply(app: &mut App, record: &AppRecord) {
        app.name = record.name.clone();
        app.slug = record.slug.clone();
        app.description = record.description.clone();
        app.content = record.content.clone();
        app.category_id = record.category_id;
        app.version = record.version.clone();
        app.size = record.size.clone();
        app.downloads = record.downloads.clone();
        app.rating = record.rating;
        app.developer = record.developer.clone();
        app.features = record.features.clone();
        app.screenshots = record.screenshots.clone();
        app.icon = record.icon.clone();
        app.header_image = record.header_image.clone();
        app.download_url = record.download_url.clone();
    }

    fn check(state: &State, id: Option<Uuid>, record: &AppRecord) -> Result<()> {
        if state
            .apps
            .iter()
            .any(|a| a.slug == record.slug && Some(a.id) != id)
        {
            return Err(slug_conflict(EntityKind::App, &record.slug));
        }
        if !state.category_exists(record.category_id) {
            return Err(AppError::CategoryMissing(record.category_id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugRepository for MemoryApps {
    type Entity = App;
    type Record = AppRecord;

    fn kind(&self) -> EntityKind {
        EntityKind::App
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<App>> {
        let state = self.0.state.read().await;
        Ok(state.apps.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<App>> {
        let state = self.0.state.read().await;
        Ok(state.apps.iter().find(|a| a.slug == slug).cloned())
    }

    async fn insert(&self, record: &AppRecord) -> Result<App> {
        let mut state = self.0.state.write().await;
        Self::check(&state, None, record)?;

        let now = Utc::now();
        let mut app = App {
            id: Uuid::now_v7(),
            name: String::new(),
            slug: String::new(),
            description: String::new(),
            content: String::new(),
            category_id: record.category_id,
            version: String::new(),
            size: String::new(),
            downloads: String::new(),
            rating: 0.0,
            developer: String::new(),
            features: String::new(),
            screenshots: String::new(),
            icon: String::new(),
            header_image: String::new(),
            download_url: String::new(),
            created_at: now,
            updated_at: now,
        };
        Self::apply(&mut app, record);
        state.apps.push(app.clone());
        Ok(app)
    }

    async fn update(&self, id: Uuid, record: &AppRecord) -> Result<Option<App>> {
        let mut state = self.0.state.write().await;
        Self::check(&state, Some(id), record)?;

        Ok(state.apps.iter_mut().find(|a| a.id == id).map(|app| {
            Self::apply(app, record);
            app.updated_at = Utc::now();
            app.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut state = self.0.state.write().await;
        let before = state.apps.len();
        state.apps.retain(|a| a.id != id);
        let removed = state.apps.len() < before;

        if removed {
            for post in state.blog_posts.iter_mut() {
                if post.app_id == Some(id) {
                    post.app_id = None;
                }
            }
        }
        Ok(removed)
    }
}

#[async_trait]
impl AppRepository for MemoryApps {
    async fn count_by_category(&self, category_id: Uuid) -> Result<i64> {
        let state = self.0.state.read().await;
        Ok(state
            .apps
            .iter()
            .filter(|a| a.category_id == category_id)
            .count() as i64)
    }

    async fn list(&self, filter: &AppFilter) -> Result<(Vec<App>, i64)> {
        let state = self.0.state.read().await;
        let rows = state
            .apps
            .iter()
            .filter(|a| filter.category_id.map_or(true, |id| a.category_id == id))
            .collect();
        Ok(page(rows, filter.offset, filter.limit))
    }
}

struct MemoryBlogPosts(MemoryStore);

impl MemoryBlogPosts {
    fn apply(post: &mut BlogPost, record: &BlogPostRecord) {
        post.title = record.title.clone();
        post.slug = record.slug.clone();
        post.excerpt = record.excerpt.clone();
        post.content = record.content.clone();
        post.image = record.image.clone();
        post.author = record.author.clone();
        post.author_bio = record.author_bio.clone();
        post.author_image = record.author_image.clone();
        post.category_id = record.category_id;
        post.app_id = record.app_id;
    }

    fn check(state: &State, id: Option<Uuid>, record: &BlogPostRecord) -> Result<()> {
        if state
            .blog_posts
            .iter()
            .any(|p| p.slug == record.slug && Some(p.id) != id)
        {
            return Err(slug_conflict(EntityKind::BlogPost, &record.slug));
        }
        if !state.category_exists(record.category_id) {
            return Err(AppError::CategoryMissing(record.category_id.to_string()));
        }
        if let Some(app_id) = record.app_id {
            if !state.app_exists(app_id) {
                return Err(AppError::ReferenceMissing {
                    kind: EntityKind::App,
                    id: app_id.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[async_trait]
impl SlugRepository for MemoryBlogPosts {
    type Entity = BlogPost;
    type Record = BlogPostRecord;

    fn kind(&self) -> EntityKind {
        EntityKind::BlogPost
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>> {
        let state = self.0.state.read().await;
        Ok(state.blog_posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>> {
        let state = self.0.state.read().await;
        Ok(state.blog_posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn insert(&self, record: &BlogPostRecord) -> Result<BlogPost> {
        let mut state = self.0.state.write().await;
        Self::check(&state, None, record)?;

        let now = Utc::now();
        let mut post = BlogPost {
            id: Uuid::now_v7(),
            title: String::new(),
            slug: String::new(),
            excerpt: String::new(),
            content: String::new(),
            image: None,
            author: String::new(),
            author_bio: None,
            author_image: None,
            category_id: record.category_id,
            app_id: None,
            created_at: now,
            updated_at: now,
        };
        Self::apply(&mut post, record);
        state.blog_posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: Uuid, record: &BlogPostRecord) -> Result<Option<BlogPost>> {
        let mut state = self.0.state.write().await;
        Self::check(&state, Some(id), record)?;

        Ok(state.blog_posts.iter_mut().find(|p| p.id == id).map(|post| {
            Self::apply(post, record);
            post.updated_at = Utc::now();
            post.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut state = self.0.state.write().await;
        let before = state.blog_posts.len();
        state.blog_posts.retain(|p| p.id != id);
        Ok(state.blog_posts.len() < before)
    }
}

#[async_trait]
impl BlogPostRepository for MemoryBlogPosts {
    async fn count_by_category(&self, category_id: Uuid) -> Result<i64> {
        let state = self.0.state.read().await;
        Ok(state
            .blog_posts
            .iter()
            .filter(|p| p.category_id == category_id)
            .count() as i64)
    }

    async fn list(&self, filter: &BlogPostFilter) -> Result<(Vec<BlogPost>, i64)> {
        let state = self.0.state.read().await;
        let rows = state
            .blog_posts
            .iter()
            .filter(|p| filter.category_id.map_or(true, |id| p.category_id == id))
            .collect();
        Ok(page(rows, filter.offset, filter.limit))
    }
}

struct MemoryAbout(MemoryStore);

#[async_trait]
impl SingletonRepository for MemoryAbout {
    type Entity = AboutContent;
    type Record = AboutRecord;

    async fn find(&self, id: Uuid) -> Result<Option<AboutContent>> {
        let state = self.0.state.read().await;
        Ok(state.about.clone().filter(|a| a.id == id))
    }

    async fn upsert(&self, id: Uuid, record: &AboutRecord) -> Result<AboutContent> {
        let mut state = self.0.state.write().await;
        let about = AboutContent {
            id,
            title: record.title.clone(),
            content: record.content.clone(),
            image: record.image.clone(),
            updated_at: Utc::now(),
        };
        state.about = Some(about.clone());
        Ok(about)
    }

    async fn insert_if_absent(&self, id: Uuid, record: &AboutRecord) -> Result<AboutContent> {
        let mut state = self.0.state.write().await;
        let about = state.about.get_or_insert_with(|| AboutContent {
            id,
            title: record.title.clone(),
            content: record.content.clone(),
            image: record.image.clone(),
            updated_at: Utc::now(),
        });
        Ok(about.clone())
    }
}

struct MemoryDeveloperInfo(MemoryStore);

impl MemoryDeveloperInfo {
    fn build(
        id: Uuid,
        record: &DeveloperInfoRecord,
        created_at: DateTime<Utc>,
    ) -> DeveloperInfo {
        DeveloperInfo {
            id,
            name: record.name.clone(),
            logo: record.logo.clone(),
            description: record.description.clone(),
            founded: record.founded.clone(),
            location: record.location.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            address: record.address.clone(),
            social_links: record.social_links.clone(),
            team_members: record.team_members.clone(),
            stats: record.stats.clone(),
            created_at,
            updated_at: Utc::now(),
        }
    }
}

#[async_trait]
impl SingletonRepository for MemoryDeveloperInfo {
    type Entity = DeveloperInfo;
    type Record = DeveloperInfoRecord;

    async fn find(&self, id: Uuid) -> Result<Option<DeveloperInfo>> {
        let state = self.0.state.read().await;
        Ok(state.developer_info.clone().filter(|d| d.id == id))
    }

    async fn upsert(&self, id: Uuid, record: &DeveloperInfoRecord) -> Result<DeveloperInfo> {
        let mut state = self.0.state.write().await;
        let created_at = state
            .developer_info
            .as_ref()
            .map(|d| d.created_at)
            .unwrap_or_else(Utc::now);
        let info = Self::build(id, record, created_at);
        state.developer_info = Some(info.clone());
        Ok(info)
    }

    async fn insert_if_absent(
        &self,
        id: Uuid,
        record: &DeveloperInfoRecord,
    ) -> Result<DeveloperInfo> {
        let mut state = self.0.state.write().await;
        let info = state
            .developer_info
            .get_or_insert_with(|| Self::build(id, record, Utc::now()));
        Ok(info.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::entity::EntityInput;
    use crate::shared::constants::DEVELOPER_INFO_ID;
    use crate::shared::test_helpers::{app_input, category_input};

    #[tokio::test]
    async fn test_category_delete_with_app_is_reference_violation() {
        let store = MemoryStore::new();
        let categories = store.category_repo();
        let games = categories
            .insert(&category_input("games").into_record().unwrap())
            .await
            .unwrap();
        store
            .app_repo()
            .insert(&app_input("x", &games.id.to_string()).into_record().unwrap())
            .await
            .unwrap();

        let err = categories.delete(games.id).await.unwrap_err();
        assert!(matches!(err, AppError::ReferenceViolation(_)));
    }

    #[tokio::test]
    async fn test_singleton_insert_if_absent_keeps_existing() {
        let store = MemoryStore::new();
        let repo = MemoryDeveloperInfo(store.clone());
        let record = DeveloperInfoRecord {
            name: "First".to_string(),
            logo: None,
            description: "d".to_string(),
            founded: None,
            location: None,
            email: None,
            phone: None,
            address: None,
            social_links: "{}".to_string(),
            team_members: "[]".to_string(),
            stats: "{}".to_string(),
        };
        repo.upsert(DEVELOPER_INFO_ID, &record).await.unwrap();

        let mut other = record.clone();
        other.name = "Second".to_string();
        let kept = repo
            .insert_if_absent(DEVELOPER_INFO_ID, &other)
            .await
            .unwrap();
        assert_eq!(kept.name, "First");
    }
}
