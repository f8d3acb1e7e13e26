pub mod blog_post_service;

pub use blog_post_service::BlogPostService;
