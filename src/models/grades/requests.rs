use serde::Deserialize;
use ts_rs::TS;

/// 保存/更新选课成绩请求（upsert 语义）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct UpsertGradeRequest {
    pub internal_marks: f64,
    pub external_marks: f64,
}
