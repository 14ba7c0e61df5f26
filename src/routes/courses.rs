use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::courses::requests::UpdateGradingSchemeRequest;
use crate::services::CourseService;
use crate::utils::SafeCourseIdI64;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// 读取当前评分方案
pub async fn get_grading_scheme(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_grading_scheme(&req, course_id.0).await
}

// 更新评分方案（返回未落库的重算预览）
pub async fn update_grading_scheme(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    body: web::Json<UpdateGradingSchemeRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_grading_scheme(&req, course_id.0, body.into_inner())
        .await
}

// 按当前方案重算并落库课程全部成绩等级
pub async fn recompute_grades(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.recompute_grades(&req, course_id.0).await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses/{course_id}")
            .route("/grading-scheme", web::get().to(get_grading_scheme))
            .route("/grading-scheme", web::put().to(update_grading_scheme))
            .route("/grades/recompute", web::post().to(recompute_grades)),
    );
}
