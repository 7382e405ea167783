use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::{ContentItem, Period, PeriodSubscription, RotationPlan, ScoredSubscription, WatchlistItem};

use super::budget::BudgetSelection;
use super::calendar::month_label;
use super::money::{fits_within, percentage_of};

/// Length of the rotation schedule
pub const ROTATION_PERIODS: usize = 12;

/// Maximum deferred items listed per period
pub const WAITING_CONTENT_LIMIT: usize = 5;

fn period_reason(sub: &ScoredSubscription) -> String {
    if sub.watchlist_count > 0 {
        format!("{} watchlist items", sub.watchlist_count)
    } else if sub.genre_match_count > 0 {
        "Matches your preferences".to_string()
    } else {
        "Content variety".to_string()
    }
}

/// Builds the twelve-period rotation from a budget selection
///
/// A pointer into the ranking starts at zero and moves one step (wrapping)
/// after every period. Each period takes up to `simultaneous_services`
/// consecutive subscriptions from the pointer, skipping any that would push the
/// period total above the full current spend.
pub fn build_rotation_plan(
    selection: &BudgetSelection,
    watchlist: &[WatchlistItem],
    start: NaiveDate,
) -> RotationPlan {
    let ranked = &selection.ranked;
    let count = ranked.len();
    let mut periods = Vec::with_capacity(ROTATION_PERIODS);
    let mut pointer = 0;

    for period in 0..ROTATION_PERIODS {
        let mut subscriptions = Vec::new();
        let mut total_cost = 0.0;

        if count > 0 {
            for offset in 0..selection.simultaneous_services.min(count) {
                let sub = &ranked[(pointer + offset) % count];
                if !fits_within(total_cost + sub.cost, selection.actual_spending) {
                    continue;
                }
                total_cost += sub.cost;
                subscriptions.push(PeriodSubscription {
                    name: sub.name.clone(),
                    cost: sub.cost,
                    reason: period_reason(sub),
                });
            }
            pointer = (pointer + 1) % count;
        }

        let active: HashSet<&str> = subscriptions.iter().map(|s| s.name.as_str()).collect();
        let (available_content, waiting_content) = split_content(watchlist, &active);

        periods.push(Period {
            index: period + 1,
            label: month_label(start, period as u32),
            subscriptions,
            total_cost,
            available_content,
            waiting_content,
        });
    }

    let yearly_total: f64 = periods.iter().map(|p| p.total_cost).sum();
    let full_year = selection.actual_spending * ROTATION_PERIODS as f64;
    let estimated_savings = (full_year - yearly_total).max(0.0);

    RotationPlan {
        target_budget: selection.target_budget,
        simultaneous_services: selection.simultaneous_services,
        total_subscriptions: count,
        periods,
        yearly_total,
        average_monthly: yearly_total / ROTATION_PERIODS as f64,
        estimated_savings,
        savings_percentage: percentage_of(estimated_savings, full_year),
    }
}

/// Reachable items (all of them) and deferred items (first few) for one period
fn split_content(
    watchlist: &[WatchlistItem],
    active: &HashSet<&str>,
) -> (Vec<ContentItem>, Vec<ContentItem>) {
    let mut available = Vec::new();
    let mut waiting = Vec::new();

    for item in watchlist {
        let Some(platform) = item.platform() else {
            continue;
        };
        let Some(content) = ContentItem::from_item(item) else {
            continue;
        };
        if active.contains(platform) {
            available.push(content);
        } else if waiting.len() < WAITING_CONTENT_LIMIT {
            waiting.push(content);
        }
    }

    (available, waiting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::budget::{select_within_budget, TARGET_BUDGET_RATIO};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn scored(name: &str, cost: f64, watchlist_count: usize) -> ScoredSubscription {
        ScoredSubscription {
            name: name.to_string(),
            cost,
            watchlist_count,
            genre_match_count: 0,
            classification_score: (watchlist_count * 3) as u64,
            rotation_score: (watchlist_count * 10) as u64,
        }
    }

    fn names(period: &Period) -> Vec<&str> {
        period.subscriptions.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_two_services_alternate() {
        let selection = select_within_budget(
            &[scored("Netflix", 15.49, 2), scored("HBO Max", 15.99, 0)],
            TARGET_BUDGET_RATIO,
        )
        .unwrap();
        let plan = build_rotation_plan(&selection, &[], start());

        assert_eq!(plan.periods.len(), ROTATION_PERIODS);
        for (i, period) in plan.periods.iter().enumerate() {
            let expected = if i % 2 == 0 { "Netflix" } else { "HBO Max" };
            assert_eq!(names(period), vec![expected]);
        }
        assert_eq!(plan.periods[0].subscriptions[0].reason, "2 watchlist items");
        assert_eq!(plan.periods[1].subscriptions[0].reason, "Content variety");
    }

    #[test]
    fn test_totals_and_savings() {
        let selection = select_within_budget(
            &[scored("Netflix", 15.49, 2), scored("HBO Max", 15.99, 0)],
            TARGET_BUDGET_RATIO,
        )
        .unwrap();
        let plan = build_rotation_plan(&selection, &[], start());

        let expected_yearly = 6.0 * 15.49 + 6.0 * 15.99;
        assert!((plan.yearly_total - expected_yearly).abs() < 1e-6);
        assert!((plan.average_monthly - expected_yearly / 12.0).abs() < 1e-6);
        assert!((plan.estimated_savings - (31.48 * 12.0 - expected_yearly)).abs() < 1e-6);
        assert_eq!(plan.savings_percentage, 50);
        assert_eq!(plan.target_budget, 19.0);
        assert_eq!(plan.total_subscriptions, 2);
    }

    #[test]
    fn test_genre_only_signal_reason() {
        let genre_only = ScoredSubscription {
            name: "Hulu".to_string(),
            cost: 7.99,
            watchlist_count: 0,
            genre_match_count: 2,
            classification_score: 2,
            rotation_score: 10,
        };
        let selection =
            select_within_budget(&[genre_only, scored("HBO Max", 15.99, 0)], TARGET_BUDGET_RATIO)
                .unwrap();
        let plan = build_rotation_plan(&selection, &[], start());

        assert_eq!(names(&plan.periods[0]), vec!["Hulu"]);
        assert_eq!(plan.periods[0].subscriptions[0].reason, "Matches your preferences");
    }

    #[test]
    fn test_window_wraps_around_ranking() {
        // total 40, target 24: three fit at once
        let selection = select_within_budget(
            &[
                scored("A", 8.0, 3),
                scored("B", 8.0, 2),
                scored("C", 8.0, 1),
                scored("D", 16.0, 0),
            ],
            TARGET_BUDGET_RATIO,
        )
        .unwrap();
        let plan = build_rotation_plan(&selection, &[], start());

        assert_eq!(names(&plan.periods[0]), vec!["A", "B", "C"]);
        assert_eq!(names(&plan.periods[1]), vec!["B", "C", "D"]);
        assert_eq!(names(&plan.periods[2]), vec!["C", "D", "A"]);
        assert_eq!(names(&plan.periods[3]), vec!["D", "A", "B"]);
        assert_eq!(names(&plan.periods[4]), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_period_totals_never_exceed_current_spend() {
        let selection = select_within_budget(
            &[
                scored("Netflix", 15.49, 4),
                scored("Hulu", 7.99, 2),
                scored("Peacock", 5.99, 1),
                scored("HBO Max", 15.99, 0),
                scored("Disney+", 10.99, 0),
            ],
            TARGET_BUDGET_RATIO,
        )
        .unwrap();
        let plan = build_rotation_plan(&selection, &[], start());

        for period in &plan.periods {
            let sum: f64 = period.subscriptions.iter().map(|s| s.cost).sum();
            assert!(sum <= selection.actual_spending + 1e-9);
            assert!(period.subscriptions.len() <= plan.simultaneous_services);
            assert!(!period.subscriptions.is_empty());
        }
    }

    #[test]
    fn test_available_and_waiting_content() {
        let selection = select_within_budget(
            &[scored("Netflix", 15.49, 2), scored("HBO Max", 15.99, 0)],
            TARGET_BUDGET_RATIO,
        )
        .unwrap();
        let mut watchlist = vec![
            WatchlistItem::new("Stranger Things", Some("Netflix")),
            WatchlistItem::new("Wednesday", Some("Netflix")),
            WatchlistItem::new("No Platform", None),
        ];
        for i in 0..7 {
            watchlist.push(WatchlistItem::new(format!("Hulu Show {}", i), Some("Hulu")));
        }

        let plan = build_rotation_plan(&selection, &watchlist, start());
        let first = &plan.periods[0];

        assert_eq!(first.available_content.len(), 2);
        assert_eq!(first.waiting_content.len(), WAITING_CONTENT_LIMIT);
        assert_eq!(first.waiting_content[0].title, "Hulu Show 0");

        let second = &plan.periods[1];
        assert!(second.available_content.is_empty());
        assert_eq!(second.waiting_content[0].title, "Stranger Things");
    }

    #[test]
    fn test_period_labels_follow_calendar() {
        let selection = select_within_budget(
            &[scored("Netflix", 15.49, 2), scored("HBO Max", 15.99, 0)],
            TARGET_BUDGET_RATIO,
        )
        .unwrap();
        let plan = build_rotation_plan(&selection, &[], start());

        assert_eq!(plan.periods[0].index, 1);
        assert_eq!(plan.periods[0].label, "January 2026");
        assert_eq!(plan.periods[11].index, 12);
        assert_eq!(plan.periods[11].label, "December 2026");
    }
}
