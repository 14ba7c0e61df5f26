use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::{
    AssignmentListQuery, CreateAssignmentRequest, PipelineQuery,
};
use crate::services::AssignmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 发布作业
pub async fn create_assignment(
    req: HttpRequest,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, body.into_inner())
        .await
}

// 列出课程作业
pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentListQuery>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, query.into_inner())
        .await
}

// 删除作业（提交级联删除）
pub async fn delete_assignment(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.delete_assignment(&req, path.0).await
}

// 作业提交漏斗统计
pub async fn submission_pipeline(
    req: HttpRequest,
    path: SafeIDI64,
    query: web::Query<PipelineQuery>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .submission_pipeline(&req, path.0, query.course_id)
        .await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .route("", web::post().to(create_assignment))
            .route("", web::get().to(list_assignments))
            .route("/{id}", web::delete().to(delete_assignment))
            .route("/{id}/pipeline", web::get().to(submission_pipeline)),
    );
}
