use serde::Serialize;
use ts_rs::TS;

use crate::models::submissions::entities::{AssignmentLetter, Submission};

/// 评分结果响应
///
/// `out_of_range` 标记得分超过作业满分：服务端容忍不截断，
/// 但明确告知调用方而不是静默接受。
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradedSubmissionResponse {
    pub submission: Submission,
    // 按作业满分折算的百分比
    pub percentage: i64,
    // 作业五档等级（展示用）
    pub letter: AssignmentLetter,
    pub out_of_range: bool,
}
