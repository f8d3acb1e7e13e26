pub mod about;
pub mod apps;
pub mod blog_posts;
pub mod categories;
pub mod developer_info;
