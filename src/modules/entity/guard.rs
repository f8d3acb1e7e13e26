use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::modules::entity::repository::{SlugEntity, SlugRepository};
use crate::shared::types::EntityKind;

/// Advisory pre-checks run before a write reaches the store.
///
/// The store's own constraints remain the final authority; these checks only
/// produce a precise error early in the common case.
pub struct UniquenessGuard;

impl UniquenessGuard {
    /// Fails with `SlugConflict` when another entity of the same kind owns `slug`.
    /// `exclude` skips the entity being updated.
    pub async fn check_slug<R>(repo: &R, slug: &str, exclude: Option<Uuid>) -> Result<()>
    where
        R: SlugRepository + ?Sized,
    {
        match repo.find_by_slug(slug).await? {
            Some(existing) if Some(existing.id()) != exclude => Err(AppError::SlugConflict {
                kind: repo.kind(),
                slug: slug.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Fails when no entity with `id` exists in `repo`.
    ///
    /// Missing categories surface as `CategoryMissing`, anything else as
    /// `ReferenceMissing`.
    pub async fn check_foreign_key<R>(repo: &R, id: Uuid) -> Result<()>
    where
        R: SlugRepository + ?Sized,
    {
        if repo.find_by_id(id).await?.is_some() {
            return Ok(());
        }

        Err(match repo.kind() {
            EntityKind::Category => AppError::CategoryMissing(id.to_string()),
            kind => AppError::ReferenceMissing {
                kind,
                id: id.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::entity::repository::EntityInput;
    use crate::shared::memory_store::MemoryStore;
    use crate::shared::test_helpers::{app_input, category_input};

    #[tokio::test]
    async fn test_free_slug_passes() {
        let store = MemoryStore::new();
        let categories = store.category_repo();

        UniquenessGuard::check_slug(categories.as_ref(), "games", None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_taken_slug_conflicts_and_names_slug() {
        let store = MemoryStore::new();
        let categories = store.category_repo();
        categories
            .insert(&category_input("games").into_record().unwrap())
            .await
            .unwrap();

        let err = UniquenessGuard::check_slug(categories.as_ref(), "games", None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::SlugConflict { kind: EntityKind::Category, ref slug } if slug == "games"
        ));
    }

    #[tokio::test]
    async fn test_own_slug_is_not_a_conflict() {
        let store = MemoryStore::new();
        let categories = store.category_repo();
        let games = categories
            .insert(&category_input("games").into_record().unwrap())
            .await
            .unwrap();

        UniquenessGuard::check_slug(categories.as_ref(), "games", Some(games.id))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_missing_category_names_id() {
        let store = MemoryStore::new();
        let categories = store.category_repo();
        let id = Uuid::now_v7();

        let err = UniquenessGuard::check_foreign_key(categories.as_ref(), id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::CategoryMissing(ref missing) if *missing == id.to_string()));
    }

    #[tokio::test]
    async fn test_missing_app_reference() {
        let store = MemoryStore::new();
        let apps = store.app_repo();
        let id = Uuid::now_v7();

        let err = UniquenessGuard::check_foreign_key(apps.as_ref(), id)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::ReferenceMissing { kind: EntityKind::App, .. }
        ));
    }

    #[tokio::test]
    async fn test_existing_app_reference_passes() {
        let store = MemoryStore::new();
        let games = store
            .category_repo()
            .insert(&category_input("games").into_record().unwrap())
            .await
            .unwrap();
        let apps = store.app_repo();
        let app = apps
            .insert(&app_input("x", &games.id.to_string()).into_record().unwrap())
            .await
            .unwrap();

        UniquenessGuard::check_foreign_key(apps.as_ref(), app.id)
            .await
            .unwrap();
    }
}
