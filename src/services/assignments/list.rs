use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::models::assignments::requests::AssignmentListQuery;
use crate::models::assignments::responses::AssignmentListResponse;
use crate::models::{ApiResponse, ErrorCode, PaginationInfo};

/// 列出课程作业（分页）
/// GET /assignments?course_id=
pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    query: AssignmentListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let page = query.pagination.page() as u64;
    let size = query.pagination.size() as u64;

    match storage
        .list_assignments_by_course(query.course_id, page, size)
        .await
    {
        Ok((items, total, pages)) => {
            let response = AssignmentListResponse {
                items,
                pagination: PaginationInfo {
                    page: page as i64,
                    page_size: size as i64,
                    total: total as i64,
                    total_pages: pages as i64,
                },
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
        }
        Err(e) => {
            error!("Failed to list assignments for course {}: {}", query.course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业列表失败: {e}"),
                )),
            )
        }
    }
}
