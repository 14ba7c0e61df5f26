//! 选课成绩存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{GradeSystemError, Result};
use crate::models::grades::{
    entities::{EnrollmentLetter, Grade},
    responses::CourseGradeRow,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 通过选课记录 ID 获取成绩
    pub async fn get_grade_by_enrollment_id_impl(
        &self,
        enrollment_id: i64,
    ) -> Result<Option<Grade>> {
        let result = Grades::find()
            .filter(Column::EnrollmentId.eq(enrollment_id))
            .one(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 成绩 upsert：存在则原地更新分数与等级，不存在则创建
    ///
    /// find-then-insert 在并发下可能撞 enrollment_id 唯一索引，
    /// 此时 From<DbErr> 把错误归一化为 Conflict，由调用方决定重试。
    pub async fn upsert_grade_impl(
        &self,
        enrollment_id: i64,
        internal_marks: f64,
        external_marks: f64,
        total: f64,
        letter: EnrollmentLetter,
    ) -> Result<Grade> {
        let now = chrono::Utc::now().timestamp();

        let existing = Grades::find()
            .filter(Column::EnrollmentId.eq(enrollment_id))
            .one(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        let result = match existing {
            Some(row) => {
                let model = ActiveModel {
                    id: Set(row.id),
                    internal_marks: Set(internal_marks),
                    external_marks: Set(external_marks),
                    total: Set(total),
                    letter: Set(letter.to_string()),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| GradeSystemError::database_operation(format!("更新成绩失败: {e}")))?
            }
            None => {
                let model = ActiveModel {
                    enrollment_id: Set(enrollment_id),
                    internal_marks: Set(internal_marks),
                    external_marks: Set(external_marks),
                    total: Set(total),
                    letter: Set(letter.to_string()),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(GradeSystemError::from)?
            }
        };

        Ok(result.into_grade())
    }

    /// 课程成绩联查（选课 × 学生档案 × 成绩）
    ///
    /// 只返回已录入成绩的选课记录，未录入的学生不出现在结果里。
    pub async fn list_course_grade_rows_impl(&self, course_id: i64) -> Result<Vec<CourseGradeRow>> {
        // 1. 查询课程全部选课记录
        let enrollments = Enrollments::find()
            .filter(EnrollmentColumn::CourseId.eq(course_id))
            .all(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

        if enrollments.is_empty() {
            return Ok(vec![]);
        }

        let enrollment_ids: Vec<i64> = enrollments.iter().map(|e| e.id).collect();
        let enrollment_map: HashMap<i64, i64> =
            enrollments.iter().map(|e| (e.id, e.student_id)).collect();

        // 2. 批量查询成绩
        let grades = Grades::find()
            .filter(Column::EnrollmentId.is_in(enrollment_ids))
            .order_by_asc(Column::EnrollmentId)
            .all(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询成绩列表失败: {e}")))?;

        // 3. 批量查询学生档案
        let student_ids: Vec<i64> = enrollments.iter().map(|e| e.student_id).collect();
        let students = Students::find()
            .filter(StudentColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询学生档案失败: {e}")))?;
        let student_map: HashMap<i64, String> =
            students.into_iter().map(|s| (s.id, s.name)).collect();

        // 4. 组装联查行
        let rows = grades
            .into_iter()
            .map(|g| {
                let student_id = enrollment_map.get(&g.enrollment_id).copied().unwrap_or(0);
                CourseGradeRow {
                    grade_id: g.id,
                    enrollment_id: g.enrollment_id,
                    student_id,
                    student_name: student_map
                        .get(&student_id)
                        .cloned()
                        .unwrap_or_else(|| "未知学生".to_string()),
                    internal_marks: g.internal_marks,
                    external_marks: g.external_marks,
                    total: g.total,
                    letter: g.letter.parse().unwrap_or(EnrollmentLetter::F),
                }
            })
            .collect();

        Ok(rows)
    }

    /// 写回重算后的等级（分数与 total 保持原样）
    pub async fn update_grade_letter_impl(
        &self,
        grade_id: i64,
        letter: EnrollmentLetter,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Grades::update_many()
            .col_expr(
                Column::Letter,
                sea_orm::sea_query::Expr::value(letter.to_string()),
            )
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(grade_id))
            .exec(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("写回成绩等级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
