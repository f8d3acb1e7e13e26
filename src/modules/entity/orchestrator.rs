use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::{AppError, Result};
use crate::modules::entity::guard::UniquenessGuard;
use crate::modules::entity::repository::{EntityInput, SlugEntity, SlugRepository, WriteRecord};
use crate::modules::entity::resolver::Resolver;

/// Entity-specific checks plugged into the orchestrator
#[async_trait]
pub trait MutationRules<E, Rec>: Send + Sync
where
    E: Sync,
    Rec: Sync,
{
    /// Verify every foreign key named by `record`
    async fn check_references(&self, _record: &Rec) -> Result<()> {
        Ok(())
    }

    /// Block deletion of `entity` while something depends on it
    async fn check_delete(&self, _entity: &E) -> Result<()> {
        Ok(())
    }
}

/// Rules for entities with no references and no dependents
pub struct NoRules;

impl<E: Sync, Rec: Sync> MutationRules<E, Rec> for NoRules {}

/// Sequences resolve → validate → persist for create, update and delete.
///
/// Every check runs before the single write, so a failed operation leaves the
/// store untouched.
pub struct MutationOrchestrator<R>
where
    R: SlugRepository + ?Sized,
{
    repo: Arc<R>,
    resolver: Resolver,
    rules: Arc<dyn MutationRules<R::Entity, R::Record>>,
}

impl<R> MutationOrchestrator<R>
where
    R: SlugRepository + ?Sized,
{
    pub fn new(repo: Arc<R>, rules: Arc<dyn MutationRules<R::Entity, R::Record>>) -> Self {
        Self {
            repo,
            resolver: Resolver::default(),
            rules,
        }
    }

    pub fn repo(&self) -> &R {
        self.repo.as_ref()
    }

    /// Resolve a token by id, then slug
    pub async fn resolve(&self, token: &str) -> Result<Option<R::Entity>> {
        self.resolver.resolve(self.repo.as_ref(), token).await
    }

    pub async fn resolve_required(&self, token: &str) -> Result<R::Entity> {
        self.resolver.resolve_required(self.repo.as_ref(), token).await
    }

    pub async fn create<I>(&self, input: I) -> Result<R::Entity>
    where
        I: EntityInput<Record = R::Record>,
    {
        input.check()?;
        let record = input.into_record()?;

        UniquenessGuard::check_slug(self.repo.as_ref(), record.slug(), None).await?;
        self.rules.check_references(&record).await?;

        let entity = self.repo.insert(&record).await?;
        tracing::info!(
            kind = %self.repo.kind(),
            id = %entity.id(),
            slug = entity.slug(),
            "Entity created"
        );

        Ok(entity)
    }

    pub async fn update<I>(&self, token: &str, input: I) -> Result<R::Entity>
    where
        I: EntityInput<Record = R::Record>,
    {
        input.check()?;
        let current = self.resolve_required(token).await?;
        let record = input.into_record()?;

        if record.slug() != current.slug() {
            UniquenessGuard::check_slug(self.repo.as_ref(), record.slug(), Some(current.id()))
                .await?;
        }
        self.rules.check_references(&record).await?;

        let updated = self
            .repo
            .update(current.id(), &record)
            .await?
            .ok_or_else(|| AppError::EntityNotFound {
                kind: self.repo.kind(),
                identifier: token.to_string(),
            })?;
        tracing::info!(
            kind = %self.repo.kind(),
            id = %updated.id(),
            slug = updated.slug(),
            "Entity updated"
        );

        Ok(updated)
    }

    /// Delete and return the removed entity
    pub async fn delete(&self, token: &str) -> Result<R::Entity> {
        let current = self.resolve_required(token).await?;
        self.rules.check_delete(&current).await?;

        match self.repo.delete(current.id()).await {
            Ok(true) => {
                tracing::info!(
                    kind = %self.repo.kind(),
                    id = %current.id(),
                    slug = current.slug(),
                    "Entity deleted"
                );
                Ok(current)
            }
            Ok(false) => Err(AppError::EntityNotFound {
                kind: self.repo.kind(),
                identifier: token.to_string(),
            }),
            // A dependent appeared after the check; report it with fresh counts
            Err(AppError::ReferenceViolation(constraint)) => {
                self.rules.check_delete(&current).await?;
                Err(AppError::ReferenceViolation(constraint))
            }
            Err(e) => Err(e),
        }
    }
}
