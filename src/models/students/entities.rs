use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 学生档案（由外部数据层开通账号，本服务只读用于成绩汇总展示）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    // 唯一 ID
    pub id: i64,
    // 学号
    pub student_no: String,
    // 姓名
    pub name: String,
    // 邮箱
    pub email: Option<String>,
    // 建档时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}
