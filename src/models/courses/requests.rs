use serde::Deserialize;
use ts_rs::TS;

/// 创建课程请求（外部数据层接口）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub code: String,
    pub name: String,
    pub faculty_id: i64,
    // 缺省时使用 40/60 默认方案
    pub max_internal_marks: Option<f64>,
    pub max_external_marks: Option<f64>,
}

/// 更新评分方案请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateGradingSchemeRequest {
    pub max_internal_marks: f64,
    pub max_external_marks: f64,
}
