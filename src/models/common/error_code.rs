//! 业务错误码
//!
//! 编码规则：HTTP 状态码 * 100 + 两位序号，0 表示成功。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 400xx 参数错误
    BadRequest = 40000,
    ValidationFailed = 40001,

    // 404xx 资源不存在
    NotFound = 40400,
    CourseNotFound = 40401,
    EnrollmentNotFound = 40402,
    AssignmentNotFound = 40403,
    SubmissionNotFound = 40404,
    GradeNotFound = 40405,
    StudentNotFound = 40406,

    // 409xx 唯一性冲突
    Conflict = 40900,
    DuplicateGrade = 40901,
    DuplicateSubmission = 40902,

    // 500xx 服务端错误
    InternalServerError = 50000,
}
