//! Entity resolution and mutation core shared by every catalog feature.
//!
//! - [`Resolver`] turns an id-or-slug token into an entity
//! - [`UniquenessGuard`] runs slug and foreign-key pre-checks
//! - [`MutationOrchestrator`] sequences create, update and delete
//!
//! Features provide the repository implementations and the
//! [`MutationRules`] for their entity kind.

pub mod guard;
pub mod orchestrator;
pub mod repository;
pub mod resolver;

pub use guard::UniquenessGuard;
pub use orchestrator::{MutationOrchestrator, MutationRules, NoRules};
pub use repository::{EntityInput, SingletonRepository, SlugEntity, SlugRepository, WriteRecord};
pub use resolver::{LookupStrategy, Resolver};
