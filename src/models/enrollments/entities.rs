use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 选课记录：一个学生与一门课程的关联，(student, course) 唯一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct Enrollment {
    // 唯一 ID
    pub id: i64,
    // 学生 ID
    pub student_id: i64,
    // 课程 ID
    pub course_id: i64,
    // 选课时间
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}
