use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::assignments::entities::Assignment;

/// 作业提交漏斗：应交 → 已交 → 已评
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct SubmissionPipeline {
    // 应交人数（课程选课人数）
    pub assigned: i64,
    // 已交人数
    pub submitted: i64,
    // 已评人数
    pub graded: i64,
    // 未交人数，永不为负
    pub pending: i64,
}

/// 漏斗响应中单条已评提交的折算概览（展示用）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct GradedPipelineEntry {
    pub submission_id: i64,
    pub student_id: i64,
    pub marks_obtained: f64,
    // 按作业满分折算的百分比
    pub percentage: i64,
    // 作业五档等级
    pub letter: crate::models::submissions::entities::AssignmentLetter,
}

/// 作业提交漏斗响应：计数 + 已评提交的等级概览
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct SubmissionPipelineResponse {
    pub assignment_id: i64,
    pub course_id: i64,
    pub pipeline: SubmissionPipeline,
    pub graded_entries: Vec<GradedPipelineEntry>,
}

/// 作业列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<Assignment>,
    pub pagination: PaginationInfo,
}
