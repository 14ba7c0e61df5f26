//! 课程与评分方案存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Entity as Courses};
use crate::errors::{GradeSystemError, Result};
use crate::models::courses::{entities::Course, requests::CreateCourseRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            code: Set(req.code),
            name: Set(req.name),
            faculty_id: Set(req.faculty_id),
            max_internal_marks: Set(req.max_internal_marks.unwrap_or(40.0)),
            max_external_marks: Set(req.max_external_marks.unwrap_or(60.0)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        // 课程代码唯一冲突由 From<DbErr> 归一化为 Conflict
        let result = model.insert(&self.db).await.map_err(GradeSystemError::from)?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 更新课程评分方案（只改满分配置，成绩行不动）
    pub async fn update_grading_scheme_impl(
        &self,
        course_id: i64,
        max_internal: f64,
        max_external: f64,
    ) -> Result<Option<Course>> {
        let existing = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询课程失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(course_id),
            max_internal_marks: Set(max_internal),
            max_external_marks: Set(max_external),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("更新评分方案失败: {e}")))?;

        Ok(Some(result.into_course()))
    }
}
