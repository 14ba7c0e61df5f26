use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::grading;
use crate::models::reports::responses::GradeDistributionResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 课程成绩分布报表
/// GET /courses/{course_id}/reports/grade-distribution
///
/// 五桶直方图，A+ 并入 A；每次调用全量重算，无缓存。
pub async fn grade_distribution_report(
    service: &ReportService,
    request: &HttpRequest,
    course_id: i64,
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

    let rows = match storage.list_course_grade_rows(course_id).await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Failed to list grades for course {}: {}", course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程成绩失败: {e}"),
                )),
            );
        }
    };

    let letters: Vec<_> = rows.iter().map(|r| r.letter).collect();

    let response = GradeDistributionResponse {
        course_id,
        distribution: grading::grade_distribution(&letters),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
