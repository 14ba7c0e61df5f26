use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 选课成绩等级（六档刻度，区别于作业百分比的五档刻度）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub enum EnrollmentLetter {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl<'de> Deserialize<'de> for EnrollmentLetter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("无效的成绩等级: '{s}'. 支持: A+, A, B, C, D, F")))
    }
}

impl std::fmt::Display for EnrollmentLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EnrollmentLetter::APlus => "A+",
            EnrollmentLetter::A => "A",
            EnrollmentLetter::B => "B",
            EnrollmentLetter::C => "C",
            EnrollmentLetter::D => "D",
            EnrollmentLetter::F => "F",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for EnrollmentLetter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A+" => Ok(EnrollmentLetter::APlus),
            "A" => Ok(EnrollmentLetter::A),
            "B" => Ok(EnrollmentLetter::B),
            "C" => Ok(EnrollmentLetter::C),
            "D" => Ok(EnrollmentLetter::D),
            "F" => Ok(EnrollmentLetter::F),
            _ => Err(format!("Invalid enrollment letter: {s}")),
        }
    }
}

/// 选课成绩：每条选课记录至多一条，首次保存创建，之后原地更新
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct Grade {
    // 唯一 ID
    pub id: i64,
    // 选课记录 ID（唯一索引兜底）
    pub enrollment_id: i64,
    // 平时原始分（不按方案满分截断）
    pub internal_marks: f64,
    // 期末原始分（不按方案满分截断）
    pub external_marks: f64,
    // 原始分合计，与方案无关
    pub total: f64,
    // 按方案派生的等级
    pub letter: EnrollmentLetter,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_letter_round_trip() {
        for s in ["A+", "A", "B", "C", "D", "F"] {
            let letter = EnrollmentLetter::from_str(s).unwrap();
            assert_eq!(letter.to_string(), s);
        }
    }

    #[test]
    fn test_letter_rejects_unknown() {
        assert!(EnrollmentLetter::from_str("E").is_err());
        assert!(EnrollmentLetter::from_str("a+").is_err());
    }
}
