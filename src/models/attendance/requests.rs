use serde::Deserialize;
use ts_rs::TS;

use crate::models::attendance::entities::AttendanceRecordStatus;

/// 写入考勤记录请求（外部点名流程接口）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct CreateAttendanceRequest {
    pub course_id: i64,
    pub student_id: i64,
    pub date: String,
    pub status: AttendanceRecordStatus,
}
