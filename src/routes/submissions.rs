use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::submissions::requests::{GradeSubmissionRequest, RecordSubmissionRequest};
use crate::services::SubmissionService;
use crate::utils::{SafeAssignmentIdI64, SafeIDI64};

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 记录提交（重交覆盖）
pub async fn record_submission(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
    body: web::Json<RecordSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .record_submission(&req, assignment_id.0, body.into_inner())
        .await
}

// 评分
pub async fn grade_submission(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, path.0, body.into_inner())
        .await
}

// 获取提交详情
pub async fn get_submission(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.get_submission(&req, path.0).await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .route("/{id}", web::get().to(get_submission))
            .route("/{id}/grade", web::put().to(grade_submission)),
    );

    // 作业相关的提交路由
    cfg.service(
        web::scope("/api/v1/assignments/{assignment_id}/submissions")
            .route("", web::post().to(record_submission)),
    );
}
