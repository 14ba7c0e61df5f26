use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 作业百分比等级（五档刻度，仅用于按作业满分折算的展示，
// 与选课成绩的六档 EnrollmentLetter 是两套独立标准）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum AssignmentLetter {
    A,
    B,
    C,
    D,
    F,
}

impl std::fmt::Display for AssignmentLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AssignmentLetter::A => "A",
            AssignmentLetter::B => "B",
            AssignmentLetter::C => "C",
            AssignmentLetter::D => "D",
            AssignmentLetter::F => "F",
        };
        write!(f, "{s}")
    }
}

impl<'de> Deserialize<'de> for AssignmentLetter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "A" => Ok(AssignmentLetter::A),
            "B" => Ok(AssignmentLetter::B),
            "C" => Ok(AssignmentLetter::C),
            "D" => Ok(AssignmentLetter::D),
            "F" => Ok(AssignmentLetter::F),
            _ => Err(serde::de::Error::custom(format!(
                "无效的作业等级: '{s}'. 支持: A, B, C, D, F"
            ))),
        }
    }
}

/// 作业提交：每个学生对每个作业至多一条，重交覆盖原记录
///
/// 生命周期：未交 → 已交 → 已评；评分字段由一次评分操作整体写入，
/// 重新评分原地覆盖，状态不会退回已交。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    // 唯一 ID
    pub id: i64,
    // 作业 ID
    pub assignment_id: i64,
    // 学生 ID
    pub student_id: i64,
    // 提交链接（与正文至少其一，引擎侧校验）
    pub submission_url: Option<String>,
    // 提交正文
    pub submission_text: Option<String>,
    // 提交时间（重交时更新）
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    // 得分，评分前为空
    pub marks_obtained: Option<f64>,
    // 评语
    pub feedback: Option<String>,
    // 评分时间
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
    // 评分教师 ID
    pub graded_by: Option<i64>,
}

impl Submission {
    /// 已评分判定：以 marks_obtained 是否存在为准
    pub fn is_graded(&self) -> bool {
        self.marks_obtained.is_some()
    }
}
