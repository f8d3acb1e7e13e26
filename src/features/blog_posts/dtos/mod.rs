pub mod blog_post_dto;

pub use blog_post_dto::{BlogPostInputDto, BlogPostResponseDto, ListBlogPostsQuery};
