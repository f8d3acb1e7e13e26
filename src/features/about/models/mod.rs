mod about_content;

pub use about_content::{AboutContent, AboutRecord};
