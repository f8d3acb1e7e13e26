mod blog_post;

pub use blog_post::{BlogPost, BlogPostFilter, BlogPostRecord};
