//! 作业提交存储操作

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{GradeSystemError, Result};
use crate::models::submissions::entities::Submission;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 提交 upsert：同一 (assignment, student) 重交覆盖内容与提交时间
    ///
    /// 重交只动 submission_url / submission_text / submitted_at，
    /// 已有的评分字段（marks/feedback/graded_at/graded_by）保持不变。
    pub async fn upsert_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
        submission_url: Option<String>,
        submission_text: Option<String>,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let existing = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询提交失败: {e}")))?;

        let result = match existing {
            Some(row) => {
                let model = ActiveModel {
                    id: Set(row.id),
                    submission_url: Set(submission_url),
                    submission_text: Set(submission_text),
                    submitted_at: Set(now),
                    ..Default::default()
                };
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| GradeSystemError::database_operation(format!("更新提交失败: {e}")))?
            }
            None => {
                let model = ActiveModel {
                    assignment_id: Set(assignment_id),
                    student_id: Set(student_id),
                    submission_url: Set(submission_url),
                    submission_text: Set(submission_text),
                    submitted_at: Set(now),
                    ..Default::default()
                };
                // 并发首交撞 (assignment, student) 唯一索引时归一化为 Conflict
                model.insert(&self.db).await.map_err(GradeSystemError::from)?
            }
        };

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, submission_id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 获取某学生对某作业的提交
    pub async fn get_submission_by_assignment_and_student_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 列出作业的全部提交（按提交时间倒序）
    pub async fn list_submissions_by_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        let results = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_desc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 一次评分操作整体写入 marks / feedback / graded_at / graded_by
    ///
    /// 后写覆盖：重复评分直接整体替换上一次的评分字段。
    pub async fn apply_submission_grade_impl(
        &self,
        submission_id: i64,
        marks_obtained: f64,
        feedback: Option<String>,
        graded_by: i64,
    ) -> Result<Option<Submission>> {
        let existing = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询提交失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(submission_id),
            marks_obtained: Set(Some(marks_obtained)),
            feedback: Set(feedback),
            graded_at: Set(Some(now)),
            graded_by: Set(Some(graded_by)),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("写入评分失败: {e}")))?;

        Ok(Some(result.into_submission()))
    }
}
