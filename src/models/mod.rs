pub mod assignments;
pub mod attendance;
pub mod common;
pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod reports;
pub mod students;
pub mod submissions;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 进程启动时间，用于启动耗时统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
