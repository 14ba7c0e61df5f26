//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_gradesys_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum GradeSystemError {
            $($variant(String),)*
        }

        impl GradeSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(GradeSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(GradeSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(GradeSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl GradeSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        GradeSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_gradesys_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Conflict("E006", "Conflict Error"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    FileOperation("E009", "File Operation Error"),
}

impl GradeSystemError {
    /// 判断是否为存储层唯一约束冲突
    ///
    /// `upsert` 的 find-then-insert 在并发下可能撞上唯一索引，
    /// 存储层用此方法将底层错误归一化为 Conflict。
    pub fn is_unique_violation(message: &str) -> bool {
        message.contains("UNIQUE constraint failed")
            || message.contains("duplicate key value")
            || message.contains("Duplicate entry")
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GradeSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GradeSystemError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for GradeSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        let msg = err.to_string();
        if GradeSystemError::is_unique_violation(&msg) {
            GradeSystemError::Conflict(msg)
        } else {
            GradeSystemError::DatabaseOperation(msg)
        }
    }
}

impl From<std::io::Error> for GradeSystemError {
    fn from(err: std::io::Error) -> Self {
        GradeSystemError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for GradeSystemError {
    fn from(err: serde_json::Error) -> Self {
        GradeSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for GradeSystemError {
    fn from(err: chrono::ParseError) -> Self {
        GradeSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GradeSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(GradeSystemError::database_config("test").code(), "E001");
        assert_eq!(GradeSystemError::validation("test").code(), "E004");
        assert_eq!(GradeSystemError::not_found("test").code(), "E005");
        assert_eq!(GradeSystemError::conflict("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            GradeSystemError::validation("test").error_type(),
            "Validation Error"
        );
        assert_eq!(
            GradeSystemError::conflict("test").error_type(),
            "Conflict Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = GradeSystemError::validation("负数的满分无效");
        assert_eq!(err.message(), "负数的满分无效");
    }

    #[test]
    fn test_unique_violation_detection() {
        assert!(GradeSystemError::is_unique_violation(
            "UNIQUE constraint failed: grades.enrollment_id"
        ));
        assert!(GradeSystemError::is_unique_violation(
            "duplicate key value violates unique constraint"
        ));
        assert!(!GradeSystemError::is_unique_violation("connection refused"));
    }

    #[test]
    fn test_format_simple() {
        let err = GradeSystemError::validation("Invalid scheme");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid scheme"));
    }
}
