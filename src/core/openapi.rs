use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::about::{dtos as about_dtos, handlers as about_handlers};
use crate::features::apps::{dtos as apps_dtos, handlers as apps_handlers};
use crate::features::blog_posts::{dtos as blog_dtos, handlers as blog_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::developer_info::{
    dtos as developer_dtos, handlers as developer_handlers, models as developer_models,
};
use crate::shared::types::{ApiResponse, EntityKind, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Apps
        apps_handlers::list_apps,
        apps_handlers::get_app,
        apps_handlers::get_app_for_edit,
        apps_handlers::create_app,
        apps_handlers::update_app,
        apps_handlers::delete_app,
        // Blog
        blog_handlers::list_blog_posts,
        blog_handlers::get_blog_post,
        blog_handlers::create_blog_post,
        blog_handlers::update_blog_post,
        blog_handlers::delete_blog_post,
        // About
        about_handlers::get_about,
        about_handlers::update_about,
        // Developer info
        developer_handlers::get_public_developer_info,
        developer_handlers::get_developer_info,
        developer_handlers::update_developer_info,
    ),
    components(
        schemas(
            // Shared
            Meta,
            EntityKind,
            // Categories
            categories_dtos::CategoryInputDto,
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Apps
            apps_dtos::AppInputDto,
            apps_dtos::AppResponseDto,
            apps_dtos::AppSummaryDto,
            ApiResponse<Vec<apps_dtos::AppResponseDto>>,
            ApiResponse<apps_dtos::AppResponseDto>,
            // Blog
            blog_dtos::BlogPostInputDto,
            blog_dtos::BlogPostResponseDto,
            ApiResponse<Vec<blog_dtos::BlogPostResponseDto>>,
            ApiResponse<blog_dtos::BlogPostResponseDto>,
            // About
            about_dtos::AboutInputDto,
            about_dtos::AboutResponseDto,
            ApiResponse<about_dtos::AboutResponseDto>,
            // Developer info
            developer_models::TeamMember,
            developer_dtos::DeveloperInfoInputDto,
            developer_dtos::DeveloperInfoResponseDto,
            ApiResponse<developer_dtos::DeveloperInfoResponseDto>,
        )
    ),
    tags(
        (name = "categories", description = "App and blog categories (public)"),
        (name = "apps", description = "App catalog (public)"),
        (name = "blog", description = "Blog posts (public)"),
        (name = "about", description = "About page (public)"),
        (name = "developer", description = "Developer profile (public)"),
        (name = "admin", description = "Content management, HTTP Basic auth required"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "AppLand API",
        version = "0.1.0",
        description = "API documentation for the AppLand catalog",
    )
)]
pub struct ApiDoc;

/// Adds the admin HTTP Basic security scheme to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

/// Overrides the document info from configuration
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
