use serde::Deserialize;
use ts_rs::TS;

/// 建档请求（外部数据层接口）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub student_no: String,
    pub name: String,
    pub email: Option<String>,
}
