use std::sync::Arc;

use crate::models::{
    assignments::{entities::Assignment, requests::CreateAssignmentRequest},
    attendance::{entities::AttendanceRecord, requests::CreateAttendanceRequest},
    courses::{entities::Course, requests::CreateCourseRequest},
    enrollments::{entities::Enrollment, requests::CreateEnrollmentRequest},
    grades::{entities::Grade, responses::CourseGradeRow},
    students::{entities::Student, requests::CreateStudentRequest},
    submissions::entities::Submission,
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 外部数据层接口（开通档案/课程/选课，本服务核心只读这些记录）
    // 建档学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 学生选课
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment>;
    // 通过ID获取选课记录
    async fn get_enrollment_by_id(&self, enrollment_id: i64) -> Result<Option<Enrollment>>;
    // 统计课程选课人数
    async fn count_enrollments_by_course(&self, course_id: i64) -> Result<i64>;

    /// 评分方案
    // 更新课程评分方案（仅持久化满分配置，不触碰成绩）
    async fn update_grading_scheme(
        &self,
        course_id: i64,
        max_internal: f64,
        max_external: f64,
    ) -> Result<Option<Course>>;

    /// 选课成绩
    // 通过选课记录ID获取成绩
    async fn get_grade_by_enrollment_id(&self, enrollment_id: i64) -> Result<Option<Grade>>;
    // 成绩 upsert：存在则原地更新，不存在则创建（唯一索引兜底）
    async fn upsert_grade(
        &self,
        enrollment_id: i64,
        internal_marks: f64,
        external_marks: f64,
        total: f64,
        letter: crate::models::grades::entities::EnrollmentLetter,
    ) -> Result<Grade>;
    // 课程成绩联查（选课 × 学生 × 成绩）
    async fn list_course_grade_rows(&self, course_id: i64) -> Result<Vec<CourseGradeRow>>;
    // 写回重算后的等级（total 不变）
    async fn update_grade_letter(
        &self,
        grade_id: i64,
        letter: crate::models::grades::entities::EnrollmentLetter,
    ) -> Result<bool>;

    /// 作业
    // 发布作业
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 列出课程作业（分页）
    async fn list_assignments_by_course(
        &self,
        course_id: i64,
        page: u64,
        size: u64,
    ) -> Result<(Vec<Assignment>, u64, u64)>;
    // 删除作业（提交级联删除）
    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool>;

    /// 作业提交
    // 提交 upsert：同一 (assignment, student) 重交覆盖内容与提交时间，评分字段不动
    async fn upsert_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        submission_url: Option<String>,
        submission_text: Option<String>,
    ) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 获取某学生对某作业的提交
    async fn get_submission_by_assignment_and_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    // 列出作业的全部提交
    async fn list_submissions_by_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>>;
    // 一次评分操作整体写入 marks/feedback/graded_at/graded_by
    async fn apply_submission_grade(
        &self,
        submission_id: i64,
        marks_obtained: f64,
        feedback: Option<String>,
        graded_by: i64,
    ) -> Result<Option<Submission>>;

    /// 考勤（外部点名流程写入，报表只读）
    // 写入考勤记录
    async fn create_attendance_record(
        &self,
        record: CreateAttendanceRequest,
    ) -> Result<AttendanceRecord>;
    // 列出课程全部考勤记录
    async fn list_attendance_by_course(&self, course_id: i64) -> Result<Vec<AttendanceRecord>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
