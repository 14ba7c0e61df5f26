use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GradeService;
use crate::grading;
use crate::models::grades::responses::{CourseRollupResponse, StudentRollupRow};
use crate::models::reports::responses::GradeDistribution;
use crate::models::{ApiResponse, ErrorCode};

/// 课程成绩汇总
/// GET /courses/{course_id}/rollup
///
/// 平均分取各学生百分比的均值再取整；空课程返回全 0 而不是报错。
/// 明细按百分比降序，同分保持录入顺序（稳定排序）。
pub async fn course_rollup(
    service: &GradeService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            error!("Failed to fetch course {}: {}", course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程失败: {e}"),
                )),
            );
        }
    };

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

    if rows.is_empty() {
        let response = CourseRollupResponse {
            course_id,
            avg_percentage: 0,
            highest: 0,
            lowest: 0,
            distribution: GradeDistribution::default(),
            students: vec![],
        };
        return Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")));
    }

    let mut students: Vec<StudentRollupRow> = rows
        .into_iter()
        .map(|row| {
            let percentage = grading::percentage_of_scheme(
                row.total,
                course.max_internal_marks,
                course.max_external_marks,
            );
            StudentRollupRow {
                enrollment_id: row.enrollment_id,
                student_id: row.student_id,
                student_name: row.student_name,
                internal_marks: row.internal_marks,
                external_marks: row.external_marks,
                total: row.total,
                percentage,
                letter: row.letter,
            }
        })
        .collect();

    let count = students.len() as i64;
    let sum: i64 = students.iter().map(|s| s.percentage).sum();
    let avg_percentage = ((sum as f64) / (count as f64)).round() as i64;
    let highest = students.iter().map(|s| s.percentage).max().unwrap_or(0);
    let lowest = students.iter().map(|s| s.percentage).min().unwrap_or(0);

    let letters: Vec<_> = students.iter().map(|s| s.letter).collect();
    let distribution = grading::grade_distribution(&letters);

    // 稳定排序，同分保持联查返回顺序
    students.sort_by(|a, b| b.percentage.cmp(&a.percentage));

    let response = CourseRollupResponse {
        course_id,
        avg_percentage,
        highest,
        lowest,
        distribution,
        students,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
