//! 选课存储操作

use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{GradeSystemError, Result};
use crate::models::enrollments::{entities::Enrollment, requests::CreateEnrollmentRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 学生选课
    pub async fn create_enrollment_impl(&self, req: CreateEnrollmentRequest) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            enrolled_at: Set(now),
            ..Default::default()
        };

        // 重复选课撞 (student, course) 唯一索引，归一化为 Conflict
        let result = model.insert(&self.db).await.map_err(GradeSystemError::from)?;

        Ok(result.into_enrollment())
    }

    /// 通过 ID 获取选课记录
    pub async fn get_enrollment_by_id_impl(&self, enrollment_id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(enrollment_id)
            .one(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 统计课程选课人数
    pub async fn count_enrollments_by_course_impl(&self, course_id: i64) -> Result<i64> {
        let count = Enrollments::find()
            .filter(Column::CourseId.eq(course_id))
            .count(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("统计选课人数失败: {e}")))?;

        Ok(count as i64)
    }
}
