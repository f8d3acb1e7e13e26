use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::core::config::DatabaseConfig;
use crate::core::error::AppError;
use crate::shared::types::EntityKind;

// PostgreSQL SQLSTATE codes we translate into domain errors
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Identity of the row being written, used to name the offending value when
/// the store rejects the write.
#[derive(Debug, Clone, Copy)]
pub struct WriteTarget<'a> {
    pub kind: EntityKind,
    pub slug: &'a str,
    pub category_id: Option<Uuid>,
    pub app_id: Option<Uuid>,
}

/// Classify a read-path error
pub fn map_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => AppError::StoreUnavailable(e.to_string()),
        other => AppError::Database(other),
    }
}

/// Classify an insert/update error, turning constraint violations into the
/// same outcomes the pre-checks would have produced.
pub fn map_write_error(e: sqlx::Error, target: WriteTarget<'_>) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        let constraint = db_err.constraint().unwrap_or_default();
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => {
                return AppError::SlugConflict {
                    kind: target.kind,
                    slug: target.slug.to_string(),
                };
            }
            Some(FOREIGN_KEY_VIOLATION) if constraint.ends_with("app_id_fkey") => {
                return AppError::ReferenceMissing {
                    kind: EntityKind::App,
                    id: target.app_id.map(|id| id.to_string()).unwrap_or_default(),
                };
            }
            Some(FOREIGN_KEY_VIOLATION) => {
                return AppError::CategoryMissing(
                    target
                        .category_id
                        .map(|id| id.to_string())
                        .unwrap_or_default(),
                );
            }
            Some(CHECK_VIOLATION) => {
                return AppError::Validation(format!(
                    "{} violates constraint '{}'",
                    target.kind, constraint
                ));
            }
            _ => {}
        }
    }

    map_error(e)
}

/// Classify a delete error; a foreign key violation means dependents exist
pub fn map_delete_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
            return AppError::ReferenceViolation(
                db_err.constraint().unwrap_or("foreign key").to_string(),
            );
        }
    }

    map_error(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    /// Store error carrying a fixed SQLSTATE and constraint name
    #[derive(Debug)]
    struct PgFailure {
        code: &'static str,
        constraint: &'static str,
    }

    impl fmt::Display for PgFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} on {}", self.code, self.constraint)
        }
    }

    impl StdError for PgFailure {}

    impl DatabaseError for PgFailure {
        fn message(&self) -> &str {
            self.constraint
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn constraint(&self) -> Option<&str> {
            Some(self.constraint)
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            match self.code {
                UNIQUE_VIOLATION => ErrorKind::UniqueViolation,
                FOREIGN_KEY_VIOLATION => ErrorKind::ForeignKeyViolation,
                CHECK_VIOLATION => ErrorKind::CheckViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    fn pg(code: &'static str, constraint: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(PgFailure { code, constraint }))
    }

    fn target() -> WriteTarget<'static> {
        WriteTarget {
            kind: EntityKind::Category,
            slug: "games",
            category_id: None,
            app_id: None,
        }
    }

    #[test]
    fn test_pool_timeout_is_store_unavailable() {
        let err = map_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::StoreUnavailable(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_row_not_found_stays_database_error() {
        let err = map_write_error(sqlx::Error::RowNotFound, target());
        assert!(matches!(err, AppError::Database(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn test_delete_io_error_is_store_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err = map_delete_error(sqlx::Error::Io(io));
        assert!(matches!(err, AppError::StoreUnavailable(_)));
    }

    #[test]
    fn test_unique_violation_is_slug_conflict() {
        let err = map_write_error(pg(UNIQUE_VIOLATION, "categories_slug_key"), target());
        assert!(matches!(
            err,
            AppError::SlugConflict { kind: EntityKind::Category, ref slug } if slug == "games"
        ));
    }

    #[test]
    fn test_app_fk_violation_is_reference_missing() {
        let app_id = Uuid::now_v7();
        let post = WriteTarget {
            kind: EntityKind::BlogPost,
            slug: "launch",
            category_id: Some(Uuid::now_v7()),
            app_id: Some(app_id),
        };

        let err = map_write_error(pg(FOREIGN_KEY_VIOLATION, "blog_posts_app_id_fkey"), post);
        assert!(matches!(
            err,
            AppError::ReferenceMissing { kind: EntityKind::App, ref id } if *id == app_id.to_string()
        ));
    }

    #[test]
    fn test_category_fk_violation_is_category_missing() {
        let category_id = Uuid::now_v7();
        let app = WriteTarget {
            kind: EntityKind::App,
            slug: "x",
            category_id: Some(category_id),
            app_id: None,
        };

        let err = map_write_error(pg(FOREIGN_KEY_VIOLATION, "apps_category_id_fkey"), app);
        assert!(matches!(err, AppError::CategoryMissing(ref id) if *id == category_id.to_string()));
    }

    #[test]
    fn test_check_violation_is_validation() {
        let err = map_write_error(pg(CHECK_VIOLATION, "apps_rating_check"), target());
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("apps_rating_check")));
    }

    #[test]
    fn test_delete_fk_violation_is_reference_violation() {
        let err = map_delete_error(pg(FOREIGN_KEY_VIOLATION, "apps_category_id_fkey"));
        assert!(matches!(
            err,
            AppError::ReferenceViolation(ref constraint) if constraint == "apps_category_id_fkey"
        ));
    }

    #[test]
    fn test_unique_violation_on_delete_is_not_reclassified() {
        let err = map_delete_error(pg(UNIQUE_VIOLATION, "categories_slug_key"));
        assert!(matches!(err, AppError::Database(_)));
    }
}
