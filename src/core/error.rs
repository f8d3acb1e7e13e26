use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::shared::codec::CodecError;
use crate::shared::types::{ApiResponse, EntityKind};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{kind} '{identifier}' not found")]
    EntityNotFound {
        kind: EntityKind,
        identifier: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{kind} with slug '{slug}' already exists")]
    SlugConflict { kind: EntityKind, slug: String },

    #[error("Category '{0}' not found")]
    CategoryMissing(String),

    #[error("Referenced {kind} '{id}' does not exist")]
    ReferenceMissing { kind: EntityKind, id: String },

    #[error("Cannot delete category that has associated apps or blog posts")]
    DependencyConflict {
        apps_count: i64,
        blog_posts_count: i64,
    },

    #[error("Row is still referenced: {0}")]
    ReferenceViolation(String),

    #[error(transparent)]
    Decode(#[from] CodecError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl AppError {
    /// Whether the caller may retry the same request later
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::StoreUnavailable(_))
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Decode(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound(_) | AppError::EntityNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Validation(_)
            | AppError::MissingFields(_)
            | AppError::BadRequest(_)
            | AppError::CategoryMissing(_)
            | AppError::ReferenceMissing { .. }
            | AppError::DependencyConflict { .. } => StatusCode::BAD_REQUEST,
            AppError::SlugConflict { .. } | AppError::ReferenceViolation(_) => {
                StatusCode::CONFLICT
            }
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::EntityNotFound { kind, identifier } => {
                Some(json!({ "entity": kind, "identifier": identifier }))
            }
            AppError::MissingFields(fields) => Some(json!({ "missingFields": fields })),
            AppError::SlugConflict { kind, slug } => Some(json!({ "entity": kind, "slug": slug })),
            AppError::CategoryMissing(id) => Some(json!({ "categoryId": id })),
            AppError::ReferenceMissing { kind, id } => Some(json!({ "entity": kind, "id": id })),
            AppError::DependencyConflict {
                apps_count,
                blog_posts_count,
            } => Some(json!({
                "appsCount": apps_count,
                "blogPostsCount": blog_posts_count,
            })),
            AppError::Decode(e) => Some(json!({ "field": e.field })),
            _ => None,
        }
    }

    /// Caller-facing message; server-side failures hide their internals
    fn public_message(&self) -> String {
        match self {
            AppError::Database(_) => "Database error occurred".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::StoreUnavailable(_) => {
                "Database is temporarily unavailable, please retry".to_string()
            }
            AppError::Decode(e) => format!("Stored field '{}' is corrupt", e.field),
            AppError::ReferenceViolation(_) => {
                "The record is still referenced by other records".to_string()
            }
            AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::BadRequest(msg)
            | AppError::Unauthorized(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Request failed: {:?}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "Request rejected: {}", self);
        }

        let body = Json(ApiResponse::<()>::error(
            self.public_message(),
            self.details(),
        ));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
