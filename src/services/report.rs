use std::fmt::Write;

use crate::models::{OptimizationResult, RotationPlan};

use super::rotation::ROTATION_PERIODS;

const GENERIC_STRATEGY: &str =
    "Consider rotating subscriptions monthly to maximize content access while minimizing costs.";

/// Periods spelled out in the strategy text before it summarizes the rest
const STRATEGY_PREVIEW_PERIODS: usize = 3;

/// Cost-saving tips that don't depend on the user's data
pub fn alternatives() -> Vec<String> {
    [
        "Share subscriptions with family/friends using family plans to split costs",
        "Wait for free trials when new shows you want are released",
        "Use annual plans for frequently-used services (often 15-20% cheaper)",
        "Check if your mobile carrier or credit card offers free subscriptions",
        "Consider ad-supported tiers which are typically $5-10 cheaper",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Periods between swaps so every service gets a turn within the year
fn rotation_cadence(plan: &RotationPlan) -> usize {
    if plan.total_subscriptions == 0 || plan.simultaneous_services == 0 {
        return ROTATION_PERIODS;
    }
    let groups = plan.total_subscriptions as f64 / plan.simultaneous_services as f64;
    (ROTATION_PERIODS as f64 / groups).ceil().max(1.0) as usize
}

/// Narrative for the rotation plan
pub fn strategy(plan: Option<&RotationPlan>, actual_spending: f64) -> String {
    let Some(plan) = plan else {
        return GENERIC_STRATEGY.to_string();
    };

    let monthly_savings = (actual_spending - plan.average_monthly).max(0.0);
    let mut text = String::from("SMART ROTATION PLAN:\n\n");

    let _ = writeln!(
        text,
        "Your budget allows {} active subscription(s) at a time out of {} total.\n",
        plan.simultaneous_services, plan.total_subscriptions
    );
    let _ = writeln!(
        text,
        "By rotating your subscriptions every {} month(s), you can:",
        rotation_cadence(plan)
    );
    let _ = writeln!(text, "- Stay within your ${:.0}/month target budget", plan.target_budget);
    let _ = writeln!(text, "- Access all {} services throughout the year", plan.total_subscriptions);
    let _ = writeln!(text, "- Save approximately ${:.2}/month on average", monthly_savings);
    let _ = writeln!(text, "- Total yearly savings: ${:.2}\n", plan.estimated_savings);
    text.push_str("RECOMMENDED ROTATION:\n");

    for period in plan.periods.iter().take(STRATEGY_PREVIEW_PERIODS) {
        let names: Vec<&str> = period.subscriptions.iter().map(|s| s.name.as_str()).collect();
        let _ = writeln!(
            text,
            "\n{} ({}): {} (${:.2})",
            period.index,
            period.label,
            names.join(" + "),
            period.total_cost
        );
        for sub in &period.subscriptions {
            let _ = writeln!(text, "  - {}: {}", sub.name, sub.reason);
        }
    }

    if plan.periods.len() > STRATEGY_PREVIEW_PERIODS {
        let _ = writeln!(
            text,
            "\n...and so on for the remaining {} months.",
            plan.periods.len() - STRATEGY_PREVIEW_PERIODS
        );
    }

    text.push_str(
        "\nTIP: Set calendar reminders to cancel/reactivate subscriptions at the start of each rotation period.",
    );
    text
}

/// Plain-text report of a finished optimization
pub fn full_analysis(result: &OptimizationResult) -> String {
    let mut text = String::from("SUBSCRIPTION OPTIMIZATION ANALYSIS\n\n");
    let _ = writeln!(text, "Current Monthly Spending: ${:.2}\n", result.current_spending);

    text.push_str("SUBSCRIPTIONS TO KEEP:\n");
    for line in &result.keep {
        let _ = writeln!(text, "- {}", line);
    }

    if !result.cancel.is_empty() {
        text.push_str("\nSUBSCRIPTIONS TO CANCEL:\n");
        for line in &result.cancel {
            let _ = writeln!(text, "- {}", line);
        }
    }

    let _ = writeln!(text, "\nOPTIMIZATION STRATEGY:\n{}", result.strategy);

    text.push_str("\nPOTENTIAL SAVINGS:\n");
    let _ = writeln!(text, "- Monthly: ${:.2}", result.savings.amount);
    let _ = writeln!(text, "- Annual: ${:.2}", result.savings.amount * 12.0);
    let _ = writeln!(text, "- Percentage: {}% reduction", result.savings.percentage);

    text.push_str("\nALTERNATIVE STRATEGIES:\n");
    for tip in &result.alternatives {
        let _ = writeln!(text, "- {}", tip);
    }

    if let Some(plan) = &result.rotation_plan {
        text.push_str("\nROTATION PLAN:\n");
        let _ = writeln!(text, "Budget: ${:.0}/month", plan.target_budget);
        let _ = writeln!(text, "Active Services: {}\n", plan.simultaneous_services);
        for period in &plan.periods {
            let names: Vec<&str> = period.subscriptions.iter().map(|s| s.name.as_str()).collect();
            let _ = writeln!(
                text,
                "Month {}: {} - ${:.2}",
                period.index,
                names.join(", "),
                period.total_cost
            );
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Period, PeriodSubscription, Savings};

    fn plan(total: usize, simultaneous: usize) -> RotationPlan {
        let periods = (1..=ROTATION_PERIODS)
            .map(|index| Period {
                index,
                label: format!("Month {}", index),
                subscriptions: vec![PeriodSubscription {
                    name: "Netflix".to_string(),
                    cost: 15.49,
                    reason: "2 watchlist items".to_string(),
                }],
                total_cost: 15.49,
                available_content: vec![],
                waiting_content: vec![],
            })
            .collect();

        RotationPlan {
            target_budget: 19.0,
            simultaneous_services: simultaneous,
            total_subscriptions: total,
            periods,
            yearly_total: 185.88,
            average_monthly: 15.49,
            estimated_savings: 191.88,
            savings_percentage: 51,
        }
    }

    #[test]
    fn test_generic_strategy_without_plan() {
        assert_eq!(strategy(None, 15.49), GENERIC_STRATEGY);
    }

    #[test]
    fn test_rotation_cadence() {
        assert_eq!(rotation_cadence(&plan(2, 1)), 6);
        assert_eq!(rotation_cadence(&plan(5, 2)), 5);
        assert_eq!(rotation_cadence(&plan(4, 4)), 12);
    }

    #[test]
    fn test_strategy_previews_three_periods() {
        let text = strategy(Some(&plan(2, 1)), 31.48);
        assert!(text.contains("1 active subscription(s) at a time out of 2 total"));
        assert!(text.contains("every 6 month(s)"));
        assert!(text.contains("Save approximately $15.99/month"));
        assert!(text.contains("remaining 9 months"));
        assert_eq!(text.matches("Netflix: 2 watchlist items").count(), 3);
    }

    #[test]
    fn test_full_analysis_sections() {
        let result = OptimizationResult {
            current_spending: 31.48,
            keep: vec!["Netflix ($15.49/month) - 2 items in your watchlist".to_string()],
            cancel: vec!["HBO Max ($15.99/month) - no content".to_string()],
            savings: Savings {
                amount: 15.99,
                percentage: 51,
            },
            strategy: "rotate".to_string(),
            alternatives: alternatives(),
            rotation_plan: Some(plan(2, 1)),
            ..Default::default()
        };

        let text = full_analysis(&result);
        assert!(text.contains("Current Monthly Spending: $31.48"));
        assert!(text.contains("SUBSCRIPTIONS TO CANCEL:"));
        assert!(text.contains("- Annual: $191.88"));
        assert!(text.contains("Month 12: Netflix - $15.49"));
    }

    #[test]
    fn test_full_analysis_omits_empty_cancel() {
        let result = OptimizationResult::default();
        let text = full_analysis(&result);
        assert!(!text.contains("SUBSCRIPTIONS TO CANCEL:"));
        assert!(!text.contains("ROTATION PLAN:"));
    }
}
