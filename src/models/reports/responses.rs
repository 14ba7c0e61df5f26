use serde::Serialize;
use ts_rs::TS;

// 出勤率标签：≥90 优秀，<75 偏低，其余良好
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub enum AttendanceStatus {
    Excellent,
    Good,
    Low,
}

/// 成绩分布直方图（五桶，A+ 并入 A）
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct GradeDistribution {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
    pub f: i64,
}

/// 学生出勤报表
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct AttendanceReportResponse {
    pub course_id: i64,
    pub student_id: i64,
    // 总课时（课程内不同日期数）
    pub total_classes: i64,
    // 出勤次数
    pub present: i64,
    pub percentage: i64,
    pub status: AttendanceStatus,
}

/// 课程成绩分布报表
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct GradeDistributionResponse {
    pub course_id: i64,
    pub distribution: GradeDistribution,
}
