use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 课程（评分方案直接挂在课程上，单一活动方案，原地覆盖无版本）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    // 唯一 ID
    pub id: i64,
    // 课程代码
    pub code: String,
    // 课程名称
    pub name: String,
    // 授课教师 ID
    pub faculty_id: i64,
    // 平时成绩满分（评分方案的一半，默认 40）
    pub max_internal_marks: f64,
    // 期末成绩满分（评分方案的另一半，默认 60）
    pub max_external_marks: f64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Course {
    /// 方案满分总和（可能为 0，百分比计算处有除零保护）
    pub fn scheme_total(&self) -> f64 {
        self.max_internal_marks + self.max_external_marks
    }
}
