use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::grading;
use crate::models::assignments::responses::{GradedPipelineEntry, SubmissionPipelineResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 作业提交漏斗统计
/// GET /assignments/{id}/pipeline?course_id=
///
/// assigned 取课程选课人数，submitted/graded 取提交表计数，
/// pending 永不为负；已评提交附带按作业满分折算的五档等级。
pub async fn submission_pipeline(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            error!("Failed to fetch assignment {}: {}", assignment_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    let assigned = match storage.count_enrollments_by_course(course_id).await {
        Ok(count) => count,
        Err(e) => {
            error!("Failed to count enrollments for course {}: {}", course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("统计选课人数失败: {e}"),
                )),
            );
        }
    };

    let submissions = match storage.list_submissions_by_assignment(assignment_id).await {
        Ok(submissions) => submissions,
        Err(e) => {
            error!("Failed to list submissions for assignment {}: {}", assignment_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交列表失败: {e}"),
                )),
            );
        }
    };

    let submitted = submissions.len() as i64;
    let graded = submissions.iter().filter(|s| s.is_graded()).count() as i64;

    let graded_entries: Vec<GradedPipelineEntry> = submissions
        .iter()
        .filter_map(|s| {
            let marks = s.marks_obtained?;
            let percentage = if assignment.total_marks > 0.0 {
                (100.0 * marks / assignment.total_marks).round() as i64
            } else {
                0
            };
            Some(GradedPipelineEntry {
                submission_id: s.id,
                student_id: s.student_id,
                marks_obtained: marks,
                percentage,
                letter: grading::letter_for_assignment_percentage(percentage as f64),
            })
        })
        .collect();

    let response = SubmissionPipelineResponse {
        assignment_id,
        course_id,
        pipeline: grading::submission_pipeline(assigned, submitted, graded),
        graded_entries,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
