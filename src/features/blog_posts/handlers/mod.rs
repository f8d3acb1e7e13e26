pub mod blog_post_handler;

pub use blog_post_handler::{
    __path_create_blog_post, __path_delete_blog_post, __path_get_blog_post,
    __path_list_blog_posts, __path_update_blog_post, create_blog_post, delete_blog_post,
    get_blog_post, list_blog_posts, update_blog_post,
};
