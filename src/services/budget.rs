use crate::models::ScoredSubscription;

use super::money::{ceil_dollars, fits_within};
use super::scoring::rank_for_rotation;

/// Default share of current spend the rotation aims to stay under
pub const TARGET_BUDGET_RATIO: f64 = 0.6;

/// How many ranked subscriptions fit under the target budget at once
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSelection {
    /// Sum of all valid subscription costs
    pub actual_spending: f64,
    pub target_budget: f64,
    pub simultaneous_services: usize,
    /// Subscriptions in rotation order
    pub ranked: Vec<ScoredSubscription>,
}

/// Whole-dollar cap: `ceil(actual_spending * ratio)`
pub fn target_budget(actual_spending: f64, ratio: f64) -> f64 {
    ceil_dollars(actual_spending * ratio)
}

/// Ranks subscriptions and sizes the concurrent set
///
/// Walks the ranking, accumulating costs while the running total stays within
/// the target budget; stops at the first subscription that doesn't fit. At
/// least one service is always allowed. Returns `None` for fewer than two
/// subscriptions, where there is nothing to rotate.
pub fn select_within_budget(scored: &[ScoredSubscription], ratio: f64) -> Option<BudgetSelection> {
    if scored.len() < 2 {
        return None;
    }

    let actual_spending: f64 = scored.iter().map(|s| s.cost).sum();
    let target_budget = target_budget(actual_spending, ratio);
    let ranked = rank_for_rotation(scored);

    let mut running = 0.0;
    let mut fitted = 0;
    for sub in &ranked {
        if !fits_within(running + sub.cost, target_budget) {
            break;
        }
        running += sub.cost;
        fitted += 1;
    }

    Some(BudgetSelection {
        actual_spending,
        target_budget,
        simultaneous_services: fitted.max(1),
        ranked,
    })
}
