use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 单条考勤记录的状态（区别于报表里的出勤率标签）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum AttendanceRecordStatus {
    Present, // 出勤
    Absent,  // 缺勤
}

impl std::fmt::Display for AttendanceRecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceRecordStatus::Present => write!(f, "present"),
            AttendanceRecordStatus::Absent => write!(f, "absent"),
        }
    }
}

impl std::str::FromStr for AttendanceRecordStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceRecordStatus::Present),
            "absent" => Ok(AttendanceRecordStatus::Absent),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for AttendanceRecordStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("无效的考勤状态: '{s}'. 支持: present, absent")))
    }
}

/// 考勤记录：由外部点名流程写入，本服务只读用于报表
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRecord {
    // 唯一 ID
    pub id: i64,
    // 课程 ID
    pub course_id: i64,
    // 学生 ID
    pub student_id: i64,
    // 上课日期（ISO 日期串，如 "2026-03-02"；同一日期视为同一节课）
    pub date: String,
    // 出勤状态
    pub status: AttendanceRecordStatus,
}
