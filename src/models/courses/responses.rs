use serde::Serialize;
use ts_rs::TS;

use crate::models::grades::entities::EnrollmentLetter;

/// 当前生效的评分方案
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct GradingSchemeResponse {
    pub course_id: i64,
    pub max_internal_marks: f64,
    pub max_external_marks: f64,
}

/// 方案变更后的单条成绩重算预览
///
/// 只重算派生等级，原始分与 total 不动。`needs_save` 标记等级发生
/// 变化、需要显式提交落库的记录。
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct RecalculatedGrade {
    pub enrollment_id: i64,
    pub student_id: i64,
    pub total: f64,
    pub percentage: i64,
    pub old_letter: EnrollmentLetter,
    pub new_letter: EnrollmentLetter,
    pub needs_save: bool,
}

/// 评分方案更新响应：新方案 + 重算预览（未落库）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateGradingSchemeResponse {
    pub scheme: GradingSchemeResponse,
    pub recalculated: Vec<RecalculatedGrade>,
}

/// 显式提交重算的结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct RecomputeGradesResponse {
    pub course_id: i64,
    // 参与重算的成绩条数
    pub examined: i64,
    // 等级发生变化并已写回的条数
    pub updated: i64,
}
