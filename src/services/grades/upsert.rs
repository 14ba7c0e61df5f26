use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::GradeService;
use crate::errors::GradeSystemError;
use crate::grading;
use crate::models::grades::requests::UpsertGradeRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 保存/更新选课成绩
/// PUT /enrollments/{enrollment_id}/grade
///
/// total 与等级只在这里（以及显式重算提交）派生，其它路径不改成绩。
pub async fn upsert_grade(
    service: &GradeService,
    request: &HttpRequest,
    enrollment_id: i64,
    req: UpsertGradeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 分数非负校验
    if req.internal_marks < 0.0 || req.external_marks < 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "成绩分数不能为负数",
        )));
    }

    // 选课记录必须存在
    let enrollment = match storage.get_enrollment_by_id(enrollment_id).await {
        Ok(Some(enrollment)) => enrollment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentNotFound,
                "选课记录不存在",
            )));
        }
        Err(e) => {
            error!("Failed to fetch enrollment {}: {}", enrollment_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询选课记录失败: {e}"),
                )),
            );
        }
    };

    // 等级按所属课程当前方案派生
    let course = match storage.get_course_by_id(enrollment.course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            error!("Failed to fetch course {}: {}", enrollment.course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程失败: {e}"),
                )),
            );
        }
    };

    let total = req.internal_marks + req.external_marks;
    let percentage = grading::percentage_of_scheme(
        total,
        course.max_internal_marks,
        course.max_external_marks,
    );
    let letter = grading::letter_for_enrollment_percentage(percentage as f64);

    match storage
        .upsert_grade(enrollment_id, req.internal_marks, req.external_marks, total, letter)
        .await
    {
        Ok(grade) => {
            info!(
                "Grade for enrollment {} saved: total {} -> {}",
                enrollment_id, grade.total, grade.letter
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "成绩已保存")))
        }
        Err(GradeSystemError::Conflict(msg)) => {
            // 并发 upsert 输掉唯一索引竞争
            error!("Grade upsert conflict for enrollment {}: {}", enrollment_id, msg);
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::DuplicateGrade,
                "该选课记录的成绩正在被并发写入，请重试",
            )))
        }
        Err(e) => {
            error!("Failed to upsert grade for enrollment {}: {}", enrollment_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("保存成绩失败: {e}"),
                )),
            )
        }
    }
}
