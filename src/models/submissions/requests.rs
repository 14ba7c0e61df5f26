use serde::Deserialize;
use ts_rs::TS;

/// 记录提交请求（学生动作由外部路由转入，身份显式传参）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct RecordSubmissionRequest {
    pub student_id: i64,
    pub submission_url: Option<String>,
    pub submission_text: Option<String>,
}

/// 评分请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub marks_obtained: f64,
    pub feedback: Option<String>,
    // 评分教师 ID（显式身份参数）
    pub graded_by: i64,
}
