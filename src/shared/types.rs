use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Uniform response envelope.
///
/// Success carries `data`; failure carries `error` and optional `details`.
/// Absent fields are omitted from the serialized body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub pages: i64,
}

impl Meta {
    pub fn new(total: i64, pagination: &PaginationQuery) -> Self {
        let page_size = pagination.limit();
        Self {
            total,
            page: pagination.page(),
            page_size,
            pages: (total + page_size - 1) / page_size,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            error: None,
            details: None,
        }
    }

    pub fn error(error: String, details: Option<serde_json::Value>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: None,
            meta: None,
            error: Some(error),
            details,
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Offset/limit pagination resolved from a list query.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationQuery {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Page number bounded so the offset always fits in an `i64`
    pub fn page(&self) -> i64 {
        self.page.clamp(1, i64::MAX / MAX_PAGE_SIZE)
    }

    /// Calculate SQL OFFSET from page number
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }

    /// Get clamped page_size (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> i64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

// =============================================================================
// ENTITY KINDS
// =============================================================================

/// Every persisted entity type in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Category,
    App,
    BlogPost,
    AboutContent,
    DeveloperInfo,
}

impl EntityKind {
    /// Human-readable name used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Category => "Category",
            EntityKind::App => "App",
            EntityKind::BlogPost => "Blog post",
            EntityKind::AboutContent => "About content",
            EntityKind::DeveloperInfo => "Developer info",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
