//! 考勤存储操作

use super::SeaOrmStorage;
use crate::entity::attendance_records::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::errors::{GradeSystemError, Result};
use crate::models::attendance::{entities::AttendanceRecord, requests::CreateAttendanceRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryOrder, QueryFilter, Set};

impl SeaOrmStorage {
    /// 写入考勤记录
    pub async fn create_attendance_record_impl(
        &self,
        req: CreateAttendanceRequest,
    ) -> Result<AttendanceRecord> {
        let model = ActiveModel {
            course_id: Set(req.course_id),
            student_id: Set(req.student_id),
            date: Set(req.date),
            status: Set(req.status.to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("写入考勤记录失败: {e}")))?;

        Ok(result.into_attendance_record())
    }

    /// 列出课程全部考勤记录（按日期升序）
    pub async fn list_attendance_by_course_impl(
        &self,
        course_id: i64,
    ) -> Result<Vec<AttendanceRecord>> {
        let results = AttendanceRecords::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_attendance_record()).collect())
    }
}
