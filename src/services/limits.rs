//! Free-tier entitlement limits
//!
//! Counting only. The result says whether the input fits and why not; the
//! caller decides whether to block or just warn.

use crate::config::TierLimits;
use crate::error::{StashError, StashResult};
use crate::models::{BudgetInput, PlanTier};

/// Outcome of a limit check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimitCheck {
    Ok,
    Exceeded {
        what: &'static str,
        count: usize,
        limit: usize,
    },
}

impl LimitCheck {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Human-readable reason, if a limit was exceeded
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Ok => None,
            Self::Exceeded { what, count, limit } => Some(format!(
                "Free plan allows {} {}, but {} were provided. Upgrade to add more.",
                limit, what, count
            )),
        }
    }

    /// Turn an exceeded check into an error for callers that block
    pub fn into_result(self) -> StashResult<()> {
        match self.reason() {
            None => Ok(()),
            Some(reason) => Err(StashError::LimitExceeded(reason)),
        }
    }
}

/// Check `input` against the free-tier line limits. Paid tiers always pass.
pub fn check_limits(input: &BudgetInput, tier: PlanTier, limits: &TierLimits) -> LimitCheck {
    if tier.is_paid() {
        return LimitCheck::Ok;
    }

    let checks = [
        ("incomes", input.incomes.len(), limits.max_incomes),
        (
            "fixed expenses",
            input.fixed_expenses.len(),
            limits.max_fixed_expenses,
        ),
        ("goals", input.goals.len(), limits.max_goals),
    ];

    for (what, count, limit) in checks {
        if count > limit {
            tracing::info!(what, count, limit, "free-tier limit exceeded");
            return LimitCheck::Exceeded { what, count, limit };
        }
    }

    LimitCheck::Ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cadence, GoalLine, IncomeLine, Money};
    use chrono::NaiveDate;

    fn with_incomes(n: usize) -> BudgetInput {
        (0..n).fold(BudgetInput::new(), |input, _| {
            input.with_income(IncomeLine::new(Money::from_cents(1000), Cadence::Weekly))
        })
    }

    #[test]
    fn test_within_limits() {
        let check = check_limits(&with_incomes(2), PlanTier::Free, &TierLimits::default());
        assert!(check.is_ok());
        assert!(check.reason().is_none());
        assert!(check.into_result().is_ok());
    }

    #[test]
    fn test_too_many_incomes_on_free() {
        let check = check_limits(&with_incomes(3), PlanTier::Free, &TierLimits::default());
        assert_eq!(
            check,
            LimitCheck::Exceeded {
                what: "incomes",
                count: 3,
                limit: 2
            }
        );
        assert!(check.reason().unwrap().contains("allows 2 incomes"));
    }

    #[test]
    fn test_paid_tier_is_unlimited() {
        assert!(check_limits(&with_incomes(50), PlanTier::Paid, &TierLimits::default()).is_ok());
    }

    #[test]
    fn test_goal_limit_into_error() {
        let due = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let input = (0..4).fold(BudgetInput::new(), |input, i| {
            input.with_goal(GoalLine::new(format!("Goal {}", i), Money::from_cents(100), due))
        });

        let err = check_limits(&input, PlanTier::Free, &TierLimits::default())
            .into_result()
            .unwrap_err();
        assert!(matches!(err, StashError::LimitExceeded(_)));
    }
}
