pub mod developer_info_handler;

pub use developer_info_handler::{
    __path_get_developer_info, __path_get_public_developer_info, __path_update_developer_info,
    get_developer_info, get_public_developer_info, update_developer_info,
};
