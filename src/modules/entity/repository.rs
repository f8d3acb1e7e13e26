use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::shared::types::EntityKind;

/// A persisted entity addressable by primary key or slug
pub trait SlugEntity: Send + Sync {
    fn id(&self) -> Uuid;
    fn slug(&self) -> &str;
}

/// Storage-ready values of an entity, composite fields already encoded
pub trait WriteRecord: Send + Sync {
    fn slug(&self) -> &str;
}

/// Raw admin input for an entity.
///
/// `check` runs every required-field and value constraint; `into_record`
/// encodes composite fields and parses references into their typed form.
pub trait EntityInput: Send {
    type Record: WriteRecord;

    fn check(&self) -> Result<()>;

    fn into_record(self) -> Result<Self::Record>;
}

/// Persistence port shared by every slug-addressable entity kind.
///
/// Implementations must enforce slug uniqueness themselves and report a
/// violation as `AppError::SlugConflict`; the pre-checks done by callers are
/// advisory only.
#[async_trait]
pub trait SlugRepository: Send + Sync {
    type Entity: SlugEntity;
    type Record: WriteRecord;

    fn kind(&self) -> EntityKind;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Self::Entity>>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Self::Entity>>;

    async fn insert(&self, record: &Self::Record) -> Result<Self::Entity>;

    /// Replace the row with `id`; `None` when it no longer exists
    async fn update(&self, id: Uuid, record: &Self::Record) -> Result<Option<Self::Entity>>;

    /// Returns whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// Persistence port for records stored under a fixed, well-known key
#[async_trait]
pub trait SingletonRepository: Send + Sync {
    type Entity: Send + Sync;
    type Record: Send + Sync;

    async fn find(&self, id: Uuid) -> Result<Option<Self::Entity>>;

    async fn upsert(&self, id: Uuid, record: &Self::Record) -> Result<Self::Entity>;

    /// Insert `record` unless a row with `id` exists, then return the stored row
    async fn insert_if_absent(&self, id: Uuid, record: &Self::Record) -> Result<Self::Entity>;
}
