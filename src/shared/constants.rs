use uuid::Uuid;

/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Default page size for the blog listing
pub const BLOG_PAGE_SIZE: i64 = 9;

// =============================================================================
// SINGLETON KEYS
// =============================================================================

/// Well-known primary key of the about page record
pub const ABOUT_CONTENT_ID: Uuid = Uuid::from_u128(1);

/// Well-known primary key of the developer profile record
pub const DEVELOPER_INFO_ID: Uuid = Uuid::from_u128(2);

/// Title of the about page created on first read
pub const DEFAULT_ABOUT_TITLE: &str = "About Our Development Team";

/// Body of the about page created on first read
pub const DEFAULT_ABOUT_CONTENT: &str = "<p>Welcome to our development team page. We are a dedicated group of professionals committed to creating innovative solutions.</p>";

/// Banner image of the about page created on first read
pub const DEFAULT_ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&w=2070&q=80";
