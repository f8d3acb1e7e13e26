use base64::{engine::general_purpose::STANDARD, Engine};
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::{Paragraph, Sentence, Word};
use fake::faker::name::en::Name;
use fake::Fake;

use crate::features::apps::dtos::AppInputDto;
use crate::features::blog_posts::dtos::BlogPostInputDto;
use crate::features::categories::dtos::CategoryInputDto;

/// Credentials the router tests configure for the admin area
pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "secret";

/// `Authorization` header value for HTTP Basic auth
pub fn basic_auth(username: &str, password: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", username, password))
    )
}

/// Complete, valid category input with the given slug
pub fn category_input(slug: &str) -> CategoryInputDto {
    CategoryInputDto {
        name: Word().fake::<String>(),
        slug: slug.to_string(),
        description: Sentence(3..8).fake(),
        icon: "🎮".to_string(),
    }
}

/// Complete, valid app input in the given category
pub fn app_input(slug: &str, category_id: &str) -> AppInputDto {
    AppInputDto {
        name: CompanyName().fake(),
        slug: slug.to_string(),
        description: Sentence(4..10).fake(),
        content: Paragraph(2..4).fake(),
        category_id: category_id.to_string(),
        version: "1.0.0".to_string(),
        size: "25MB".to_string(),
        downloads: "10K+".to_string(),
        rating: Some(4.5),
        developer: CompanyName().fake(),
        features: vec!["Task Management".to_string(), "Cloud Sync".to_string()],
        screenshots: vec!["https://example.com/shot-1.png".to_string()],
        icon: "https://example.com/icon.png".to_string(),
        header_image: "https://example.com/header.png".to_string(),
        download_url: "https://example.com/download".to_string(),
    }
}

/// Complete, valid blog post input in the given category, not linked to an app
pub fn blog_post_input(slug: &str, category_id: &str) -> BlogPostInputDto {
    BlogPostInputDto {
        title: Sentence(3..6).fake(),
        slug: slug.to_string(),
        excerpt: Sentence(6..12).fake(),
        content: Paragraph(3..5).fake(),
        image: None,
        author: Name().fake(),
        author_bio: None,
        author_image: None,
        category_id: category_id.to_string(),
        app_id: None,
    }
}
