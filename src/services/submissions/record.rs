use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubmissionService;
use crate::errors::GradeSystemError;
use crate::models::submissions::requests::RecordSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 记录提交
/// POST /assignments/{assignment_id}/submissions
///
/// 同一 (assignment, student) 重交覆盖内容与提交时间，
/// 已有评分保持不变（不会从已评退回未评）。
pub async fn record_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    assignment_id: i64,
    req: RecordSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // url 与 text 至少提供一项
    let has_url = req.submission_url.as_deref().is_some_and(|s| !s.trim().is_empty());
    let has_text = req.submission_text.as_deref().is_some_and(|s| !s.trim().is_empty());
    if !has_url && !has_text {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "提交内容不能为空：链接与文本至少填写一项",
        )));
    }

    // 作业必须存在
    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(_)) => {}
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
    }

    // 学生必须建档
    match storage.get_student_by_id(req.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "学生不存在",
            )));
        }
        Err(e) => {
            error!("Failed to fetch student {}: {}", req.student_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            );
        }
    }

    match storage
        .upsert_submission(assignment_id, req.student_id, req.submission_url, req.submission_text)
        .await
    {
        Ok(submission) => {
            info!(
                "Submission {} recorded for assignment {} by student {}",
                submission.id, assignment_id, submission.student_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "提交已记录")))
        }
        Err(GradeSystemError::Conflict(msg)) => {
            error!(
                "Submission upsert conflict for assignment {} student {}: {}",
                assignment_id, req.student_id, msg
            );
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::DuplicateSubmission,
                "该作业提交正在被并发写入，请重试",
            )))
        }
        Err(e) => {
            error!("Failed to record submission for assignment {}: {}", assignment_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("记录提交失败: {e}"),
                )),
            )
        }
    }
}
