//! 路径参数安全提取器
//!
//! actix 默认的 `web::Path<i64>` 解析失败时返回框架自带的错误页，
//! 这里统一换成 ApiResponse 格式的 400。

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_id_i64_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let value = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok());

                ready(match value {
                    Some(id) if id > 0 => Ok($name(id)),
                    _ => {
                        let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::BadRequest,
                            concat!("非法的路径参数: ", $param),
                        ));
                        Err(InternalError::from_response("invalid path parameter", response)
                            .into())
                    }
                })
            }
        }
    };
}

define_safe_id_i64_extractor!(SafeIDI64, "id");
define_safe_id_i64_extractor!(SafeCourseIdI64, "course_id");
define_safe_id_i64_extractor!(SafeEnrollmentIdI64, "enrollment_id");
define_safe_id_i64_extractor!(SafeAssignmentIdI64, "assignment_id");
