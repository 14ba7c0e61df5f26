use serde::Serialize;
use ts_rs::TS;

use crate::models::grades::entities::EnrollmentLetter;
use crate::models::reports::responses::GradeDistribution;

/// 课程成绩联查行（选课 × 学生档案 × 成绩）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct CourseGradeRow {
    pub grade_id: i64,
    pub enrollment_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub internal_marks: f64,
    pub external_marks: f64,
    pub total: f64,
    pub letter: EnrollmentLetter,
}

/// 课程成绩汇总中的单个学生行（按百分比降序展示）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct StudentRollupRow {
    pub enrollment_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub internal_marks: f64,
    pub external_marks: f64,
    pub total: f64,
    pub percentage: i64,
    pub letter: EnrollmentLetter,
}

/// 课程成绩汇总
///
/// 平均分是各学生百分比的均值取整，不是原始分加权平均；
/// 空课程返回全 0 而不是报错。
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct CourseRollupResponse {
    pub course_id: i64,
    pub avg_percentage: i64,
    pub highest: i64,
    pub lowest: i64,
    pub distribution: GradeDistribution,
    pub students: Vec<StudentRollupRow>,
}
