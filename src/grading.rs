//! 成绩计算引擎
//!
//! 纯函数模块，无 I/O、无状态。所有派生值（百分比、等级、统计）都在这里计算，
//! 方案变更后的重算依赖这些函数的幂等性。
//!
//! 注意存在两套容易混淆的等级标准：
//! - 选课成绩等级（六档 A+/A/B/C/D/F）：[`letter_for_enrollment_percentage`]
//! - 单次作业百分比等级（五档 A/B/C/D/F）：[`letter_for_assignment_percentage`]
//!
//! 两者刻度不同，必须保持为独立的具名函数和独立的枚举类型，禁止参数化合并。

use crate::models::assignments::responses::SubmissionPipeline;
use crate::models::grades::entities::EnrollmentLetter;
use crate::models::reports::responses::{AttendanceStatus, GradeDistribution};
use crate::models::submissions::entities::AssignmentLetter;

/// 选课成绩等级映射（含下界，无上界截断，>100 仍映射到最高档）
///
/// 分档：≥90 → A+，≥80 → A，≥70 → B，≥60 → C，≥50 → D，其余 → F。
/// 未评分（total 缺失）由调用方处理，不要把 NaN 传进来。
pub fn letter_for_enrollment_percentage(percentage: f64) -> EnrollmentLetter {
    if percentage >= 90.0 {
        EnrollmentLetter::APlus
    } else if percentage >= 80.0 {
        EnrollmentLetter::A
    } else if percentage >= 70.0 {
        EnrollmentLetter::B
    } else if percentage >= 60.0 {
        EnrollmentLetter::C
    } else if percentage >= 50.0 {
        EnrollmentLetter::D
    } else {
        EnrollmentLetter::F
    }
}

/// 作业百分比等级映射（仅用于单次作业按满分折算的场景）
///
/// 分档：≥90 → A，≥80 → B，≥70 → C，≥60 → D，其余 → F。
pub fn letter_for_assignment_percentage(percentage: f64) -> AssignmentLetter {
    if percentage >= 90.0 {
        AssignmentLetter::A
    } else if percentage >= 80.0 {
        AssignmentLetter::B
    } else if percentage >= 70.0 {
        AssignmentLetter::C
    } else if percentage >= 60.0 {
        AssignmentLetter::D
    } else {
        AssignmentLetter::F
    }
}

/// 按课程评分方案计算得分百分比，四舍五入到整数
///
/// 分母（max_internal + max_external）为 0 时返回 0，不会报错。
pub fn percentage_of_scheme(earned: f64, max_internal: f64, max_external: f64) -> i64 {
    let denominator = max_internal + max_external;
    if denominator <= 0.0 {
        return 0;
    }
    (100.0 * earned / denominator).round() as i64
}

/// 作业提交漏斗统计
///
/// `pending = max(0, assigned - submitted)`，提交数超过应交人数时不会出现负数。
pub fn submission_pipeline(total_students: i64, submitted: i64, graded: i64) -> SubmissionPipeline {
    SubmissionPipeline {
        assigned: total_students,
        submitted,
        graded,
        pending: (total_students - submitted).max(0),
    }
}

/// 出勤率计算，四舍五入到整数
///
/// 约定：总课时为 0 时按 1 计算（避免除零），此时出勤率为 0。
pub fn attendance_percentage(present: i64, total_classes: i64) -> i64 {
    let total = if total_classes == 0 { 1 } else { total_classes };
    (100.0 * present as f64 / total as f64).round() as i64
}

/// 出勤状态标签：≥90 → Excellent，<75 → Low，其余 → Good
pub fn attendance_status_label(percentage: i64) -> AttendanceStatus {
    if percentage >= 90 {
        AttendanceStatus::Excellent
    } else if percentage < 75 {
        AttendanceStatus::Low
    } else {
        AttendanceStatus::Good
    }
}

/// 成绩分布直方图（展示用的五档视图，A+ 并入 A 桶）
pub fn grade_distribution(letters: &[EnrollmentLetter]) -> GradeDistribution {
    let mut distribution = GradeDistribution::default();
    for letter in letters {
        match letter {
            EnrollmentLetter::APlus | EnrollmentLetter::A => distribution.a += 1,
            EnrollmentLetter::B => distribution.b += 1,
            EnrollmentLetter::C => distribution.c += 1,
            EnrollmentLetter::D => distribution.d += 1,
            EnrollmentLetter::F => distribution.f += 1,
        }
    }
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrollment_letter_breakpoints() {
        // 断点恰好在 90/80/70/60/50，含下界
        assert_eq!(letter_for_enrollment_percentage(90.0), EnrollmentLetter::APlus);
        assert_eq!(letter_for_enrollment_percentage(89.9), EnrollmentLetter::A);
        assert_eq!(letter_for_enrollment_percentage(80.0), EnrollmentLetter::A);
        assert_eq!(letter_for_enrollment_percentage(79.9), EnrollmentLetter::B);
        assert_eq!(letter_for_enrollment_percentage(70.0), EnrollmentLetter::B);
        assert_eq!(letter_for_enrollment_percentage(60.0), EnrollmentLetter::C);
        assert_eq!(letter_for_enrollment_percentage(50.0), EnrollmentLetter::D);
        assert_eq!(letter_for_enrollment_percentage(49.9), EnrollmentLetter::F);
        assert_eq!(letter_for_enrollment_percentage(0.0), EnrollmentLetter::F);
    }

    #[test]
    fn test_enrollment_letter_no_upper_clamp() {
        // 脏数据 >100 仍映射到最高档，不截断也不报错
        assert_eq!(letter_for_enrollment_percentage(130.0), EnrollmentLetter::APlus);
        assert_eq!(letter_for_enrollment_percentage(-5.0), EnrollmentLetter::F);
    }

    #[test]
    fn test_assignment_letter_is_a_different_scale() {
        // 同样是 90，作业等级是 A 而不是 A+
        assert_eq!(letter_for_assignment_percentage(90.0), AssignmentLetter::A);
        assert_eq!(letter_for_assignment_percentage(85.0), AssignmentLetter::B);
        assert_eq!(letter_for_assignment_percentage(70.0), AssignmentLetter::C);
        assert_eq!(letter_for_assignment_percentage(60.0), AssignmentLetter::D);
        assert_eq!(letter_for_assignment_percentage(59.9), AssignmentLetter::F);
    }

    #[test]
    fn test_percentage_of_scheme() {
        assert_eq!(percentage_of_scheme(83.0, 40.0, 60.0), 83);
        assert_eq!(percentage_of_scheme(70.0, 40.0, 60.0), 70);
        assert_eq!(percentage_of_scheme(70.0, 50.0, 50.0), 70);
        // 四舍五入
        assert_eq!(percentage_of_scheme(41.0, 30.0, 30.0), 68);
    }

    #[test]
    fn test_percentage_of_scheme_zero_denominator() {
        // 除零保护：分母为 0 时返回 0，而不是 panic
        assert_eq!(percentage_of_scheme(100.0, 0.0, 0.0), 0);
        assert_eq!(percentage_of_scheme(0.0, 0.0, 0.0), 0);
        assert_eq!(percentage_of_scheme(-3.0, 0.0, 0.0), 0);
    }

    #[test]
    fn test_percentage_monotonic_in_earned() {
        let mut last = i64::MIN;
        for earned in 0..=120 {
            let p = percentage_of_scheme(earned as f64, 40.0, 60.0);
            assert!(p >= last, "percentage must be non-decreasing in earned");
            last = p;
        }
    }

    #[test]
    fn test_scheme_scenarios() {
        // 方案 40/60：35 + 48 → 83 → A
        let total = 35.0 + 48.0;
        let p = percentage_of_scheme(total, 40.0, 60.0);
        assert_eq!(p, 83);
        assert_eq!(letter_for_enrollment_percentage(p as f64), EnrollmentLetter::A);

        // 方案 40/60：28 + 42 → 70 → B
        let total = 28.0 + 42.0;
        let p = percentage_of_scheme(total, 40.0, 60.0);
        assert_eq!(p, 70);
        assert_eq!(letter_for_enrollment_percentage(p as f64), EnrollmentLetter::B);

        // 方案改为 50/50 后 total=70 重算：70% → 仍是 B（重算路径必须执行）
        let p = percentage_of_scheme(70.0, 50.0, 50.0);
        assert_eq!(p, 70);
        assert_eq!(letter_for_enrollment_percentage(p as f64), EnrollmentLetter::B);
    }

    #[test]
    fn test_submission_pipeline_counts() {
        let pipeline = submission_pipeline(10, 4, 2);
        assert_eq!(pipeline.assigned, 10);
        assert_eq!(pipeline.submitted, 4);
        assert_eq!(pipeline.graded, 2);
        assert_eq!(pipeline.pending, 6);
    }

    #[test]
    fn test_submission_pipeline_never_negative() {
        // 提交数超过应交人数（例如退课后残留提交）时 pending 为 0 而不是 -2
        let pipeline = submission_pipeline(10, 12, 5);
        assert_eq!(pipeline.pending, 0);
    }

    #[test]
    fn test_attendance_percentage() {
        assert_eq!(attendance_percentage(8, 10), 80);
        assert_eq!(attendance_percentage(1, 3), 33);
        assert_eq!(attendance_percentage(2, 3), 67);
    }

    #[test]
    fn test_attendance_percentage_zero_classes() {
        // 0 节课按 1 计算：round(100*0/1) = 0，不报错
        assert_eq!(attendance_percentage(0, 0), 0);
    }

    #[test]
    fn test_attendance_status_labels() {
        assert_eq!(attendance_status_label(95), AttendanceStatus::Excellent);
        assert_eq!(attendance_status_label(90), AttendanceStatus::Excellent);
        assert_eq!(attendance_status_label(89), AttendanceStatus::Good);
        assert_eq!(attendance_status_label(75), AttendanceStatus::Good);
        assert_eq!(attendance_status_label(74), AttendanceStatus::Low);
        assert_eq!(attendance_status_label(0), AttendanceStatus::Low);
    }

    #[test]
    fn test_grade_distribution_folds_a_plus() {
        let letters = vec![
            EnrollmentLetter::APlus,
            EnrollmentLetter::A,
            EnrollmentLetter::B,
            EnrollmentLetter::B,
            EnrollmentLetter::C,
            EnrollmentLetter::D,
            EnrollmentLetter::F,
        ];
        let distribution = grade_distribution(&letters);
        assert_eq!(distribution.a, 2); // A+ 并入 A 桶
        assert_eq!(distribution.b, 2);
        assert_eq!(distribution.c, 1);
        assert_eq!(distribution.d, 1);
        assert_eq!(distribution.f, 1);
    }

    #[test]
    fn test_grade_distribution_empty() {
        let distribution = grade_distribution(&[]);
        assert_eq!(distribution.a, 0);
        assert_eq!(distribution.f, 0);
    }
}
