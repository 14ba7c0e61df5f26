use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::grades::requests::UpsertGradeRequest;
use crate::services::GradeService;
use crate::utils::{SafeCourseIdI64, SafeEnrollmentIdI64};

// 懒加载的全局 GradeService 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// 保存/更新选课成绩（upsert）
pub async fn upsert_grade(
    req: HttpRequest,
    enrollment_id: SafeEnrollmentIdI64,
    body: web::Json<UpsertGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .upsert_grade(&req, enrollment_id.0, body.into_inner())
        .await
}

// 读取单条选课成绩
pub async fn get_grade(
    req: HttpRequest,
    enrollment_id: SafeEnrollmentIdI64,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.get_grade(&req, enrollment_id.0).await
}

// 课程成绩汇总
pub async fn course_rollup(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.course_rollup(&req, course_id.0).await
}

// 配置路由
pub fn configure_enrollments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments/{enrollment_id}")
            .route("/grade", web::put().to(upsert_grade))
            .route("/grade", web::get().to(get_grade)),
    );

    // 课程维度的成绩汇总
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/rollup")
            .route("", web::get().to(course_rollup)),
    );
}
