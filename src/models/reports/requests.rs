use serde::Deserialize;
use ts_rs::TS;

/// 出勤报表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct AttendanceReportQuery {
    pub student_id: i64,
}
