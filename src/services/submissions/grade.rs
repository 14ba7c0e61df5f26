use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::SubmissionService;
use crate::grading;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::submissions::responses::GradedSubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 评分
/// PUT /submissions/{id}/grade
///
/// marks/feedback/graded_at/graded_by 一次性写入；重复评分整体覆盖。
/// 负分拒绝；超过作业满分容忍不截断，记 WARN 并在响应里打 out_of_range 标记。
pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.marks_obtained < 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "得分不能为负数",
        )));
    }

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            error!("Failed to fetch submission {}: {}", submission_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交失败: {e}"),
                )),
            );
        }
    };

    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            error!("Failed to fetch assignment {}: {}", submission.assignment_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    let out_of_range = req.marks_obtained > assignment.total_marks;
    if out_of_range {
        warn!(
            "Submission {} graded {} above assignment {} total_marks {}",
            submission_id, req.marks_obtained, assignment.id, assignment.total_marks
        );
    }

    let graded = match storage
        .apply_submission_grade(submission_id, req.marks_obtained, req.feedback, req.graded_by)
        .await
    {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            error!("Failed to grade submission {}: {}", submission_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("写入评分失败: {e}"),
                )),
            );
        }
    };

    let percentage = if assignment.total_marks > 0.0 {
        (100.0 * req.marks_obtained / assignment.total_marks).round() as i64
    } else {
        0
    };
    let letter = grading::letter_for_assignment_percentage(percentage as f64);

    info!(
        "Submission {} graded {} by {} ({}%, {:?})",
        submission_id, req.marks_obtained, req.graded_by, percentage, letter
    );

    let response = GradedSubmissionResponse {
        submission: graded,
        percentage,
        letter,
        out_of_range,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "评分已保存")))
}
