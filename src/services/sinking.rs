//! Sinking fund calculation
//!
//! Sizes the weekly set-aside needed to reach a goal by its due date.

use chrono::NaiveDate;

use crate::models::GoalLine;

/// Whole weeks from `today` until `due_date`, rounded up and never below one.
///
/// A goal due today or already overdue counts as due in one week.
pub fn weeks_until(due_date: NaiveDate, today: NaiveDate) -> i64 {
    let days = (due_date - today).num_days().max(0);
    let weeks = (days + 6) / 7;
    weeks.max(1)
}

/// Weekly contribution for `goal`, in fractional cents
pub fn weekly_requirement(goal: &GoalLine, today: NaiveDate) -> f64 {
    let weeks = weeks_until(goal.due_date, today);
    goal.target_amount.cents_f64() / weeks as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn goal_due(days: i64, cents: i64) -> GoalLine {
        GoalLine::new("Goal", Money::from_cents(cents), today() + Duration::days(days))
    }

    #[test]
    fn test_due_today_requires_full_amount() {
        let goal = goal_due(0, 50000);
        assert_eq!(weekly_requirement(&goal, today()), 50000.0);
    }

    #[test]
    fn test_overdue_clamps_to_one_week() {
        let goal = goal_due(-30, 50000);
        assert_eq!(weeks_until(goal.due_date, today()), 1);
        assert_eq!(weekly_requirement(&goal, today()), 50000.0);
    }

    #[test]
    fn test_partial_weeks_round_up() {
        assert_eq!(weeks_until(today() + Duration::days(1), today()), 1);
        assert_eq!(weeks_until(today() + Duration::days(7), today()), 1);
        assert_eq!(weeks_until(today() + Duration::days(8), today()), 2);
        assert_eq!(weeks_until(today() + Duration::days(70), today()), 10);
    }

    #[test]
    fn test_ten_week_goal() {
        let goal = goal_due(70, 100000);
        assert_eq!(weekly_requirement(&goal, today()), 10000.0);
    }
}
