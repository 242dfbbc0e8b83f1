use crate::models::{BudgetPolicy, GymCandidate, PlanType};

/// Check whether a gym's pricing fits the user's budget
///
/// An unset budget is no constraint. Under [`BudgetPolicy::AnyTier`] the gym
/// fits when either its daily or monthly price is at or under budget. Under
/// [`BudgetPolicy::PlanAware`] only the tier of the user's plan is compared,
/// falling back to any tier when no plan type is known. A tier with no price
/// never fits a set budget.
#[inline]
pub fn within_budget(
    gym: &GymCandidate,
    budget: Option<f64>,
    plan_type: Option<PlanType>,
    policy: BudgetPolicy,
) -> bool {
    let Some(budget) = budget else {
        return true;
    };

    let fits = |price: Option<f64>| price.is_some_and(|p| p <= budget);

    match (policy, plan_type) {
        (BudgetPolicy::PlanAware, Some(plan)) => fits(gym.price_for(plan)),
        _ => fits(gym.daily_price) || fits(gym.monthly_price),
    }
}

/// Check whether a gym sells the plan type the user wants
///
/// No plan type means any gym is compatible.
#[inline]
pub fn is_plan_compatible(plan_type: Option<PlanType>, gym: &GymCandidate) -> bool {
    match plan_type {
        Some(plan) => gym.price_for(plan).is_some(),
        None => true,
    }
}

/// Continuous budget fit (0-1)
///
/// Ratio of budget to the price of the user's tier (monthly when the plan
/// type is unknown), capped at 1. Zero when there is no positive budget or
/// the tier has no price.
pub fn budget_score(gym: &GymCandidate, budget: Option<f64>, plan_type: Option<PlanType>) -> f64 {
    let budget = match budget {
        Some(b) if b > 0.0 => b,
        _ => return 0.0,
    };

    match gym.price_for(plan_type.unwrap_or(PlanType::Monthly)) {
        None => 0.0,
        Some(price) if price <= 0.0 => 1.0,
        Some(price) => (budget / price).min(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_gym(daily: Option<f64>, monthly: Option<f64>) -> GymCandidate {
        GymCandidate {
            id: 1,
            daily_price: daily,
            monthly_price: monthly,
            ..Default::default()
        }
    }

    #[test]
    fn test_daily_tier_qualifies() {
        let gym = create_gym(Some(300.0), Some(2000.0));
        assert!(within_budget(&gym, Some(500.0), None, BudgetPolicy::AnyTier));
    }

    #[test]
    fn test_unset_budget_always_fits() {
        let gym = create_gym(None, None);
        assert!(within_budget(&gym, None, None, BudgetPolicy::AnyTier));
        assert!(within_budget(&gym, None, Some(PlanType::Daily), BudgetPolicy::PlanAware));
    }

    #[test]
    fn test_no_prices_never_fit_a_budget() {
        let gym = create_gym(None, None);
        assert!(!within_budget(&gym, Some(10_000.0), None, BudgetPolicy::AnyTier));
    }

    #[test]
    fn test_boundary_price_fits() {
        let gym = create_gym(None, Some(500.0));
        assert!(within_budget(&gym, Some(500.0), None, BudgetPolicy::AnyTier));
        assert!(!within_budget(&gym, Some(499.99), None, BudgetPolicy::AnyTier));
    }

    #[test]
    fn test_plan_aware_ignores_other_tier() {
        let gym = create_gym(Some(300.0), Some(2000.0));

        // Any tier: the daily price satisfies a monthly shopper
        assert!(within_budget(&gym, Some(500.0), Some(PlanType::Monthly), BudgetPolicy::AnyTier));
        // Plan aware: only the monthly price counts
        assert!(!within_budget(&gym, Some(500.0), Some(PlanType::Monthly), BudgetPolicy::PlanAware));
        assert!(within_budget(&gym, Some(500.0), Some(PlanType::Daily), BudgetPolicy::PlanAware));
        // Without a plan type the plan-aware policy falls back to any tier
        assert!(within_budget(&gym, Some(500.0), None, BudgetPolicy::PlanAware));
    }

    #[test]
    fn test_plan_compatibility() {
        let gym = create_gym(None, Some(1500.0));

        assert!(is_plan_compatible(Some(PlanType::Monthly), &gym));
        assert!(!is_plan_compatible(Some(PlanType::Daily), &gym));
        assert!(is_plan_compatible(None, &gym));
    }

    #[test]
    fn test_budget_score() {
        let gym = create_gym(Some(100.0), Some(2000.0));

        assert_eq!(budget_score(&gym, Some(1000.0), Some(PlanType::Monthly)), 0.5);
        assert_eq!(budget_score(&gym, Some(1000.0), Some(PlanType::Daily)), 1.0);
        // Monthly tier is assumed when the plan type is unknown
        assert_eq!(budget_score(&gym, Some(1000.0), None), 0.5);
        assert_eq!(budget_score(&gym, None, None), 0.0);
        assert_eq!(budget_score(&gym, Some(0.0), None), 0.0);

        let free = create_gym(Some(0.0), None);
        assert_eq!(budget_score(&free, Some(50.0), Some(PlanType::Daily)), 1.0);
        assert_eq!(budget_score(&free, Some(50.0), Some(PlanType::Monthly)), 0.0);
    }
}
