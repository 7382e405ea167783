use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::{
    ContentItem, MonthSnapshot, SchedulePeriod, ScoredSubscription, SnapshotSubscription,
    SpendingBreakdown, WatchlistItem,
};

use super::calendar::month_label;
use super::classifier::{Classification, Decision};
use super::scoring::rotation_order;

/// Months covered by the short-term schedule
pub const SCHEDULE_PERIODS: usize = 3;

/// Maximum reachable items listed per short-term period
pub const SCHEDULE_CONTENT_LIMIT: usize = 10;

fn snapshot_line(sub: &ScoredSubscription, reason: Option<String>) -> SnapshotSubscription {
    SnapshotSubscription {
        name: sub.name.clone(),
        cost: sub.cost,
        watchlist_items: sub.watchlist_count,
        reason,
    }
}

/// Current spend, spend after the keep/cancel advice, and a three-month outlook
///
/// `scored` holds every valid subscription in input order. The first schedule
/// month still pays for all of them; the following months pay only for the
/// keep set, listed in rotation order.
pub fn project_spending(
    scored: &[ScoredSubscription],
    classification: &Classification,
    watchlist: &[WatchlistItem],
    start: NaiveDate,
) -> SpendingBreakdown {
    if scored.is_empty() {
        return SpendingBreakdown::default();
    }

    let current_month = MonthSnapshot {
        subscriptions: scored.iter().map(|s| snapshot_line(s, None)).collect(),
        total: scored.iter().map(|s| s.cost).sum(),
    };

    let mut kept: Vec<(&ScoredSubscription, &Decision)> = scored
        .iter()
        .filter_map(|s| classification.kept_decision(&s.name).map(|d| (s, d)))
        .collect();
    kept.sort_by(|(a, _), (b, _)| rotation_order(a, b));

    let next_month = MonthSnapshot {
        subscriptions: kept
            .iter()
            .map(|(s, decision)| {
                let reason = if s.watchlist_count > 0 {
                    format!("{} watchlist items", s.watchlist_count)
                } else if decision.fallback {
                    "Lowest-cost service".to_string()
                } else {
                    "Matches your preferences".to_string()
                };
                snapshot_line(s, Some(reason))
            })
            .collect(),
        total: kept.iter().map(|(s, _)| s.cost).sum(),
    };

    let three_month_schedule = (0..SCHEDULE_PERIODS)
        .map(|month| {
            let snapshot = if month == 0 { &current_month } else { &next_month };
            let active: HashSet<&str> = snapshot.subscriptions.iter().map(|s| s.name.as_str()).collect();
            let available_content = watchlist
                .iter()
                .filter(|item| item.platform().is_some_and(|p| active.contains(p)))
                .filter_map(ContentItem::from_item)
                .take(SCHEDULE_CONTENT_LIMIT)
                .collect();

            SchedulePeriod {
                index: month + 1,
                label: month_label(start, month as u32),
                subscriptions: snapshot
                    .subscriptions
                    .iter()
                    .map(|s| SnapshotSubscription {
                        reason: None,
                        ..s.clone()
                    })
                    .collect(),
                total: snapshot.total,
                available_content,
            }
        })
        .collect();

    let monthly_savings = (current_month.total - next_month.total).max(0.0);

    SpendingBreakdown {
        current_month,
        next_month,
        three_month_schedule,
        monthly_savings,
        yearly_savings: monthly_savings * 12.0,
    }
}
