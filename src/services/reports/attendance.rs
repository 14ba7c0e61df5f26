use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::grading;
use crate::models::attendance::entities::AttendanceRecordStatus;
use crate::models::reports::responses::AttendanceReportResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 学生出勤报表
/// GET /courses/{course_id}/reports/attendance?student_id=
///
/// 总课时取课程考勤记录里的不同日期数；每次调用全量重算，无缓存。
pub async fn attendance_report(
    service: &ReportService,
    request: &HttpRequest,
    course_id: i64,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            error!("Failed to fetch course {}: {}", course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程失败: {e}"),
                )),
            );
        }
    }

    let records = match storage.list_attendance_by_course(course_id).await {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to list attendance for course {}: {}", course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询考勤记录失败: {e}"),
                )),
            );
        }
    };

    let total_classes = records
        .iter()
        .map(|r| r.date.as_str())
        .collect::<HashSet<_>>()
        .len() as i64;

    let present = records
        .iter()
        .filter(|r| r.student_id == student_id && r.status == AttendanceRecordStatus::Present)
        .count() as i64;

    let percentage = grading::attendance_percentage(present, total_classes);

    let response = AttendanceReportResponse {
        course_id,
        student_id,
        total_classes,
        present,
        percentage,
        status: grading::attendance_status_label(percentage),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
