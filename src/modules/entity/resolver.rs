use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::modules::entity::repository::SlugRepository;

/// One way of turning a lookup token into an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    /// Exact match on the canonical (hyphenated, lowercase) id text
    PrimaryKey,
    /// Exact, case-sensitive match on the slug
    Slug,
}

impl LookupStrategy {
    async fn lookup<R>(self, repo: &R, token: &str) -> Result<Option<R::Entity>>
    where
        R: SlugRepository + ?Sized,
    {
        match self {
            LookupStrategy::PrimaryKey => match canonical_id(token) {
                Some(id) => repo.find_by_id(id).await,
                None => Ok(None),
            },
            LookupStrategy::Slug => repo.find_by_slug(token).await,
        }
    }
}

/// Only the canonical text form counts as a primary key, so "ABC..." or a
/// braced UUID falls through to the slug lookup.
fn canonical_id(token: &str) -> Option<Uuid> {
    Uuid::parse_str(token)
        .ok()
        .filter(|id| id.hyphenated().to_string() == token)
}

/// Resolves a token by trying each strategy in order until one matches.
#[derive(Debug, Clone)]
pub struct Resolver {
    strategies: Vec<LookupStrategy>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(vec![LookupStrategy::PrimaryKey, LookupStrategy::Slug])
    }
}

impl Resolver {
    pub fn new(strategies: Vec<LookupStrategy>) -> Self {
        Self { strategies }
    }

    /// Returns `None` when no strategy matches. No side effects.
    pub async fn resolve<R>(&self, repo: &R, token: &str) -> Result<Option<R::Entity>>
    where
        R: SlugRepository + ?Sized,
    {
        for strategy in &self.strategies {
            if let Some(entity) = strategy.lookup(repo, token).await? {
                return Ok(Some(entity));
            }
        }

        Ok(None)
    }

    /// Like [`Resolver::resolve`], mapping a miss to `EntityNotFound`
    pub async fn resolve_required<R>(&self, repo: &R, token: &str) -> Result<R::Entity>
    where
        R: SlugRepository + ?Sized,
    {
        self.resolve(repo, token)
            .await?
            .ok_or_else(|| AppError::EntityNotFound {
                kind: repo.kind(),
                identifier: token.to_string(),
            })
    }
}
