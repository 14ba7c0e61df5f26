pub mod get;
pub mod rollup;
pub mod upsert;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grades::requests::UpsertGradeRequest;
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 保存/更新选课成绩（upsert）
    pub async fn upsert_grade(
        &self,
        request: &HttpRequest,
        enrollment_id: i64,
        req: UpsertGradeRequest,
    ) -> ActixResult<HttpResponse> {
        upsert::upsert_grade(self, request, enrollment_id, req).await
    }

    /// 读取单条选课成绩
    pub async fn get_grade(
        &self,
        request: &HttpRequest,
        enrollment_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_grade(self, request, enrollment_id).await
    }

    /// 课程成绩汇总（均值/极值/分布/明细）
    pub async fn course_rollup(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        rollup::course_rollup(self, request, course_id).await
    }
}
