use chrono::NaiveDate;
use serde::Serialize;

use crate::models::ValidSubscription;

use super::calendar::{month_label, month_start};

/// Months shown in the subscription timeline
pub const TIMELINE_MONTHS: usize = 12;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActiveSubscription {
    pub name: String,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimelineMonth {
    pub label: String,
    pub date: NaiveDate,
    pub subscriptions: Vec<ActiveSubscription>,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimelineSummary {
    pub yearly_total: f64,
    pub average_monthly: f64,
    pub current_month_total: f64,
}

/// What the user pays each month if nothing changes
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubscriptionTimeline {
    pub months: Vec<TimelineMonth>,
    pub summary: TimelineSummary,
}

/// Whether the subscription is billed in the month starting on `month`
fn is_active(sub: &ValidSubscription, month: NaiveDate) -> bool {
    let started = sub.start_date.map_or(true, |start| start <= month);
    let not_ended = sub.end_date.map_or(true, |end| end >= month);
    started && not_ended
}

/// Twelve months from `today`'s month, listing the active subscriptions
///
/// A subscription is active in a month when it started on or before the first
/// of that month and has not ended before it. Subscriptions are listed in
/// start-date order; undated ones come first.
pub fn subscription_timeline(subscriptions: &[ValidSubscription], today: NaiveDate) -> SubscriptionTimeline {
    let mut ordered: Vec<&ValidSubscription> = subscriptions.iter().collect();
    ordered.sort_by_key(|sub| sub.start_date);

    let months: Vec<TimelineMonth> = (0..TIMELINE_MONTHS as u32)
        .map(|offset| {
            let date = month_start(today, offset);
            let subscriptions: Vec<ActiveSubscription> = ordered
                .iter()
                .filter(|sub| is_active(sub, date))
                .map(|sub| ActiveSubscription {
                    name: sub.name.clone(),
                    cost: sub.cost,
                })
                .collect();
            let total_cost = subscriptions.iter().map(|s| s.cost).sum();

            TimelineMonth {
                label: month_label(today, offset),
                date,
                subscriptions,
                total_cost,
            }
        })
        .collect();

    let yearly_total: f64 = months.iter().map(|m| m.total_cost).sum();
    let current_month_total = months.first().map_or(0.0, |m| m.total_cost);

    SubscriptionTimeline {
        summary: TimelineSummary {
            yearly_total,
            average_monthly: yearly_total / TIMELINE_MONTHS as f64,
            current_month_total,
        },
        months,
    }
}
