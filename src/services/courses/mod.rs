pub mod recompute;
pub mod scheme_get;
pub mod scheme_update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::requests::UpdateGradingSchemeRequest;
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
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

    /// 读取当前评分方案
    pub async fn get_grading_scheme(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        scheme_get::get_grading_scheme(self, request, course_id).await
    }

    /// 更新评分方案（持久化新满分 + 返回未落库的重算预览）
    pub async fn update_grading_scheme(
        &self,
        request: &HttpRequest,
        course_id: i64,
        req: UpdateGradingSchemeRequest,
    ) -> ActixResult<HttpResponse> {
        scheme_update::update_grading_scheme(self, request, course_id, req).await
    }

    /// 按当前方案重算并落库课程全部成绩等级
    pub async fn recompute_grades(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        recompute::recompute_grades(self, request, course_id).await
    }
}
