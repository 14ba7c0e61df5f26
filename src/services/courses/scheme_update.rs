use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::grading;
use crate::models::courses::requests::UpdateGradingSchemeRequest;
use crate::models::courses::responses::{
    GradingSchemeResponse, RecalculatedGrade, UpdateGradingSchemeResponse,
};
use crate::models::{ApiResponse, ErrorCode};

/// 更新评分方案
/// PUT /courses/{course_id}/grading-scheme
///
/// 只持久化满分配置；随响应返回的重算预览不落库，
/// 等级写回由显式的 recompute 提交完成。
pub async fn update_grading_scheme(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    req: UpdateGradingSchemeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 满分非负校验
    if req.max_internal_marks < 0.0 || req.max_external_marks < 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "评分方案满分不能为负数",
        )));
    }

    let course = match storage
        .update_grading_scheme(course_id, req.max_internal_marks, req.max_external_marks)
        .await
    {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            error!("Failed to update grading scheme for course {}: {}", course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("更新评分方案失败: {e}"),
                )),
            );
        }
    };

    // 新方案下的等级重算预览（原始分与 total 不动，仅派生等级）
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

    let recalculated: Vec<RecalculatedGrade> = rows
        .into_iter()
        .map(|row| {
            let percentage = grading::percentage_of_scheme(
                row.total,
                course.max_internal_marks,
                course.max_external_marks,
            );
            let new_letter = grading::letter_for_enrollment_percentage(percentage as f64);
            RecalculatedGrade {
                enrollment_id: row.enrollment_id,
                student_id: row.student_id,
                total: row.total,
                percentage,
                old_letter: row.letter,
                new_letter,
                needs_save: new_letter != row.letter,
            }
        })
        .collect();

    info!(
        "Grading scheme for course {} updated to {}/{}, {} grades previewed",
        course_id,
        course.max_internal_marks,
        course.max_external_marks,
        recalculated.len()
    );

    let response = UpdateGradingSchemeResponse {
        scheme: GradingSchemeResponse {
            course_id: course.id,
            max_internal_marks: course.max_internal_marks,
            max_external_marks: course.max_external_marks,
        },
        recalculated,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "评分方案已更新")))
}
