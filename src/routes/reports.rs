use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::reports::requests::AttendanceReportQuery;
use crate::services::ReportService;
use crate::utils::SafeCourseIdI64;

// 懒加载的全局 ReportService 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// 学生出勤报表
pub async fn attendance_report(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    query: web::Query<AttendanceReportQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .attendance_report(&req, course_id.0, query.student_id)
        .await
}

// 课程成绩分布报表
pub async fn grade_distribution_report(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .grade_distribution_report(&req, course_id.0)
        .await
}

// 配置路由
pub fn configure_reports_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/reports")
            .route("/attendance", web::get().to(attendance_report))
            .route(
                "/grade-distribution",
                web::get().to(grade_distribution_report),
            ),
    );
}
