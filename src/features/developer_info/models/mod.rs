mod developer_info;

pub use developer_info::{DeveloperInfo, DeveloperInfoRecord, TeamMember};
