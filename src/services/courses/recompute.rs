use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::grading;
use crate::models::courses::responses::RecomputeGradesResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 按当前方案重算并落库课程全部成绩等级
/// POST /courses/{course_id}/grades/recompute
///
/// 只写回等级发生变化的记录，total 与原始分保持不变。
pub async fn recompute_grades(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
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
    };

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

    let examined = rows.len() as i64;
    let mut updated = 0i64;

    for row in rows {
        let percentage = grading::percentage_of_scheme(
            row.total,
            course.max_internal_marks,
            course.max_external_marks,
        );
        let new_letter = grading::letter_for_enrollment_percentage(percentage as f64);

        if new_letter == row.letter {
            continue;
        }

        match storage.update_grade_letter(row.grade_id, new_letter).await {
            Ok(true) => updated += 1,
            Ok(false) => {}
            Err(e) => {
                error!("Failed to write back letter for grade {}: {}", row.grade_id, e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("写回成绩等级失败: {e}"),
                    )),
                );
            }
        }
    }

    info!(
        "Recomputed grades for course {}: {} examined, {} updated",
        course_id, examined, updated
    );

    let response = RecomputeGradesResponse {
        course_id,
        examined,
        updated,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "成绩等级重算完成")))
}
