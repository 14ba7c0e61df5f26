use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::courses::responses::GradingSchemeResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 读取当前评分方案
/// GET /courses/{course_id}/grading-scheme
pub async fn get_grading_scheme(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => {
            let scheme = GradingSchemeResponse {
                course_id: course.id,
                max_internal_marks: course.max_internal_marks,
                max_external_marks: course.max_external_marks,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(scheme, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "课程不存在",
        ))),
        Err(e) => {
            error!("Failed to fetch course {}: {}", course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程失败: {e}"),
                )),
            )
        }
    }
}
