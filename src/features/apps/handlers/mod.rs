pub mod app_handler;

pub use app_handler::{
    __path_create_app, __path_delete_app, __path_get_app, __path_get_app_for_edit,
    __path_list_apps, __path_update_app, create_app, delete_app, get_app, get_app_for_edit,
    list_apps, update_app,
};
