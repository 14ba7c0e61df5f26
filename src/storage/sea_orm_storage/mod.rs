//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod attendance;
mod courses;
mod enrollments;
mod grades;
mod students;
mod submissions;

use crate::config::AppConfig;
use crate::errors::{GradeSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移（唯一索引等约束都在迁移里建立）
        Migrator::up(&db, None)
            .await
            .map_err(|e| GradeSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| GradeSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| GradeSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| GradeSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(GradeSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{entities::Assignment, requests::CreateAssignmentRequest},
    attendance::{entities::AttendanceRecord, requests::CreateAttendanceRequest},
    courses::{entities::Course, requests::CreateCourseRequest},
    enrollments::{entities::Enrollment, requests::CreateEnrollmentRequest},
    grades::{entities::EnrollmentLetter, entities::Grade, responses::CourseGradeRow},
    students::{entities::Student, requests::CreateStudentRequest},
    submissions::entities::Submission,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn update_grading_scheme(
        &self,
        course_id: i64,
        max_internal: f64,
        max_external: f64,
    ) -> Result<Option<Course>> {
        self.update_grading_scheme_impl(course_id, max_internal, max_external)
            .await
    }

    // 选课模块
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment> {
        self.create_enrollment_impl(enrollment).await
    }

    async fn get_enrollment_by_id(&self, enrollment_id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(enrollment_id).await
    }

    async fn count_enrollments_by_course(&self, course_id: i64) -> Result<i64> {
        self.count_enrollments_by_course_impl(course_id).await
    }

    // 成绩模块
    async fn get_grade_by_enrollment_id(&self, enrollment_id: i64) -> Result<Option<Grade>> {
        self.get_grade_by_enrollment_id_impl(enrollment_id).await
    }

    async fn upsert_grade(
        &self,
        enrollment_id: i64,
        internal_marks: f64,
        external_marks: f64,
        total: f64,
        letter: EnrollmentLetter,
    ) -> Result<Grade> {
        self.upsert_grade_impl(enrollment_id, internal_marks, external_marks, total, letter)
            .await
    }

    async fn list_course_grade_rows(&self, course_id: i64) -> Result<Vec<CourseGradeRow>> {
        self.list_course_grade_rows_impl(course_id).await
    }

    async fn update_grade_letter(&self, grade_id: i64, letter: EnrollmentLetter) -> Result<bool> {
        self.update_grade_letter_impl(grade_id, letter).await
    }

    // 作业模块
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(assignment).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn list_assignments_by_course(
        &self,
        course_id: i64,
        page: u64,
        size: u64,
    ) -> Result<(Vec<Assignment>, u64, u64)> {
        self.list_assignments_by_course_impl(course_id, page, size)
            .await
    }

    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool> {
        self.delete_assignment_impl(assignment_id).await
    }

    // 提交模块
    async fn upsert_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        submission_url: Option<String>,
        submission_text: Option<String>,
    ) -> Result<Submission> {
        self.upsert_submission_impl(assignment_id, student_id, submission_url, submission_text)
            .await
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn get_submission_by_assignment_and_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_by_assignment_and_student_impl(assignment_id, student_id)
            .await
    }

    async fn list_submissions_by_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_by_assignment_impl(assignment_id).await
    }

    async fn apply_submission_grade(
        &self,
        submission_id: i64,
        marks_obtained: f64,
        feedback: Option<String>,
        graded_by: i64,
    ) -> Result<Option<Submission>> {
        self.apply_submission_grade_impl(submission_id, marks_obtained, feedback, graded_by)
            .await
    }

    // 考勤模块
    async fn create_attendance_record(
        &self,
        record: CreateAttendanceRequest,
    ) -> Result<AttendanceRecord> {
        self.create_attendance_record_impl(record).await
    }

    async fn list_attendance_by_course(&self, course_id: i64) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_by_course_impl(course_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceRecordStatus;
    use crate::models::attendance::requests::CreateAttendanceRequest;
    use crate::models::grades::entities::EnrollmentLetter;

    async fn memory_storage() -> SeaOrmStorage {
        // 内存库必须单连接：连接池里每个连接各自是一个独立的 :memory: 库
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await.expect("connect in-memory sqlite");
        Migrator::up(&db, None).await.expect("run migrations");
        SeaOrmStorage { db }
    }

    fn student_req(no: &str, name: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            student_no: no.to_string(),
            name: name.to_string(),
            email: None,
        }
    }

    fn course_req(code: &str) -> CreateCourseRequest {
        CreateCourseRequest {
            code: code.to_string(),
            name: "数据结构".to_string(),
            faculty_id: 1,
            max_internal_marks: None,
            max_external_marks: None,
        }
    }

    #[tokio::test]
    async fn test_grade_upsert_round_trip() {
        let storage = memory_storage().await;

        let student = storage.create_student_impl(student_req("S001", "张三")).await.unwrap();
        let course = storage.create_course_impl(course_req("CS101")).await.unwrap();
        assert_eq!(course.max_internal_marks, 40.0);
        assert_eq!(course.max_external_marks, 60.0);

        let enrollment = storage
            .create_enrollment_impl(CreateEnrollmentRequest {
                student_id: student.id,
                course_id: course.id,
            })
            .await
            .unwrap();

        // 首次保存创建
        let grade = storage
            .upsert_grade_impl(enrollment.id, 35.0, 48.0, 83.0, EnrollmentLetter::A)
            .await
            .unwrap();
        assert_eq!(grade.total, 83.0);
        assert_eq!(grade.letter, EnrollmentLetter::A);

        // 重复保存原地更新，不新增行
        let updated = storage
            .upsert_grade_impl(enrollment.id, 28.0, 42.0, 70.0, EnrollmentLetter::B)
            .await
            .unwrap();
        assert_eq!(updated.id, grade.id);
        assert_eq!(updated.total, 70.0);
        assert_eq!(updated.letter, EnrollmentLetter::B);

        let fetched = storage
            .get_grade_by_enrollment_id_impl(enrollment.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.id, grade.id);
        assert_eq!(fetched.letter, EnrollmentLetter::B);
    }

    #[tokio::test]
    async fn test_duplicate_enrollment_is_conflict() {
        let storage = memory_storage().await;

        let student = storage.create_student_impl(student_req("S002", "李四")).await.unwrap();
        let course = storage.create_course_impl(course_req("CS102")).await.unwrap();

        let req = CreateEnrollmentRequest {
            student_id: student.id,
            course_id: course.id,
        };
        storage.create_enrollment_impl(req).await.unwrap();

        let err = storage
            .create_enrollment_impl(CreateEnrollmentRequest {
                student_id: student.id,
                course_id: course.id,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, GradeSystemError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_resubmission_keeps_grading_fields() {
        let storage = memory_storage().await;

        let student = storage.create_student_impl(student_req("S003", "王五")).await.unwrap();
        let course = storage.create_course_impl(course_req("CS103")).await.unwrap();
        let assignment = storage
            .create_assignment_impl(crate::models::assignments::requests::CreateAssignmentRequest {
                course_id: course.id,
                title: "实验一".to_string(),
                description: None,
                due_date: None,
                total_marks: Some(100.0),
                created_by: 1,
            })
            .await
            .unwrap();

        let submission = storage
            .upsert_submission_impl(
                assignment.id,
                student.id,
                Some("https://example.com/v1".to_string()),
                None,
            )
            .await
            .unwrap();
        assert!(!submission.is_graded());

        let graded = storage
            .apply_submission_grade_impl(submission.id, 92.0, Some("不错".to_string()), 1)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(graded.marks_obtained, Some(92.0));

        // 重交只覆盖内容与提交时间，评分字段保持不变
        let resubmitted = storage
            .upsert_submission_impl(
                assignment.id,
                student.id,
                Some("https://example.com/v2".to_string()),
                None,
            )
            .await
            .unwrap();
        assert_eq!(resubmitted.id, submission.id);
        assert_eq!(resubmitted.submission_url.as_deref(), Some("https://example.com/v2"));
        assert_eq!(resubmitted.marks_obtained, Some(92.0));
        assert_eq!(resubmitted.feedback.as_deref(), Some("不错"));
    }

    #[tokio::test]
    async fn test_delete_assignment_cascades_to_submissions() {
        let storage = memory_storage().await;

        let student = storage.create_student_impl(student_req("S004", "赵六")).await.unwrap();
        let course = storage.create_course_impl(course_req("CS104")).await.unwrap();
        let assignment = storage
            .create_assignment_impl(crate::models::assignments::requests::CreateAssignmentRequest {
                course_id: course.id,
                title: "实验二".to_string(),
                description: None,
                due_date: None,
                total_marks: None,
                created_by: 1,
            })
            .await
            .unwrap();
        let submission = storage
            .upsert_submission_impl(assignment.id, student.id, None, Some("答案".to_string()))
            .await
            .unwrap();

        assert!(storage.delete_assignment_impl(assignment.id).await.unwrap());
        assert!(storage.get_assignment_by_id_impl(assignment.id).await.unwrap().is_none());
        assert!(storage.get_submission_by_id_impl(submission.id).await.unwrap().is_none());

        // 重复删除返回 false 而不是报错
        assert!(!storage.delete_assignment_impl(assignment.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_course_grade_rows_join() {
        let storage = memory_storage().await;

        let course = storage.create_course_impl(course_req("CS105")).await.unwrap();
        let alice = storage.create_student_impl(student_req("S005", "Alice")).await.unwrap();
        let bob = storage.create_student_impl(student_req("S006", "Bob")).await.unwrap();

        let e1 = storage
            .create_enrollment_impl(CreateEnrollmentRequest {
                student_id: alice.id,
                course_id: course.id,
            })
            .await
            .unwrap();
        let e2 = storage
            .create_enrollment_impl(CreateEnrollmentRequest {
                student_id: bob.id,
                course_id: course.id,
            })
            .await
            .unwrap();

        storage
            .upsert_grade_impl(e1.id, 35.0, 48.0, 83.0, EnrollmentLetter::A)
            .await
            .unwrap();
        // Bob 未录入成绩，不应出现在联查结果里
        let _ = e2;

        let rows = storage.list_course_grade_rows_impl(course.id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].student_id, alice.id);
        assert_eq!(rows[0].student_name, "Alice");
        assert_eq!(rows[0].letter, EnrollmentLetter::A);

        // 等级写回只改 letter，分数不动
        assert!(
            storage
                .update_grade_letter_impl(rows[0].grade_id, EnrollmentLetter::B)
                .await
                .unwrap()
        );
        let rows = storage.list_course_grade_rows_impl(course.id).await.unwrap();
        assert_eq!(rows[0].letter, EnrollmentLetter::B);
        assert_eq!(rows[0].total, 83.0);

        assert_eq!(storage.count_enrollments_by_course_impl(course.id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_attendance_records_round_trip() {
        let storage = memory_storage().await;

        let course = storage.create_course_impl(course_req("CS106")).await.unwrap();
        let student = storage.create_student_impl(student_req("S007", "周七")).await.unwrap();

        for (date, status) in [
            ("2026-03-02", AttendanceRecordStatus::Present),
            ("2026-03-09", AttendanceRecordStatus::Absent),
        ] {
            storage
                .create_attendance_record_impl(CreateAttendanceRequest {
                    course_id: course.id,
                    student_id: student.id,
                    date: date.to_string(),
                    status,
                })
                .await
                .unwrap();
        }

        let records = storage.list_attendance_by_course_impl(course.id).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, "2026-03-02");
        assert_eq!(records[0].status, AttendanceRecordStatus::Present);
        assert_eq!(records[1].status, AttendanceRecordStatus::Absent);
    }
}
