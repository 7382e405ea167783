use serde::Serialize;

use super::{ContentType, WatchStatus, WatchlistItem};

/// Usage signals for one subscription, recomputed on every request
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct UsageStat {
    /// Watchlist items whose platform is this subscription
    pub watchlist_count: usize,
    /// Platform-attributed items, counted only when the user declared genres
    pub genre_match_count: usize,
}

/// A valid subscription together with its usage signals and both scores
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredSubscription {
    pub name: String,
    pub cost: f64,
    pub watchlist_count: usize,
    pub genre_match_count: usize,
    /// Score used for keep/cancel decisions
    pub classification_score: u64,
    /// Score used to rank subscriptions for rotation
    pub rotation_score: u64,
}

/// Watchlist entry as shown inside a schedule period
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContentItem {
    pub title: String,
    pub platform: String,
    pub content_type: ContentType,
    pub status: WatchStatus,
}

impl ContentItem {
    /// Builds a display entry; items without a platform have none
    pub fn from_item(item: &WatchlistItem) -> Option<Self> {
        let platform = item.platform()?;
        let title = if item.title.trim().is_empty() {
            "Untitled".to_string()
        } else {
            item.title.clone()
        };

        Some(Self {
            title,
            platform: platform.to_string(),
            content_type: item.content_type,
            status: item.status,
        })
    }
}

/// A subscription active during one rotation period
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PeriodSubscription {
    pub name: String,
    pub cost: f64,
    pub reason: String,
}

/// One month of the rotation schedule
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Period {
    /// 1-based position in the schedule
    pub index: usize,
    pub label: String,
    pub subscriptions: Vec<PeriodSubscription>,
    pub total_cost: f64,
    /// Watchlist items reachable with this period's subscriptions
    pub available_content: Vec<ContentItem>,
    /// Watchlist items deferred to a later period
    pub waiting_content: Vec<ContentItem>,
}

/// Twelve-period rotation schedule kept under a target budget
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RotationPlan {
    pub target_budget: f64,
    pub simultaneous_services: usize,
    pub total_subscriptions: usize,
    pub periods: Vec<Period>,
    pub yearly_total: f64,
    pub average_monthly: f64,
    pub estimated_savings: f64,
    pub savings_percentage: u32,
}

/// A subscription line in a spending snapshot
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SnapshotSubscription {
    pub name: String,
    pub cost: f64,
    pub watchlist_items: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// The set of subscriptions paid for in one month
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MonthSnapshot {
    pub subscriptions: Vec<SnapshotSubscription>,
    pub total: f64,
}

/// One month of the short-term spending schedule
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SchedulePeriod {
    pub index: usize,
    pub label: String,
    pub subscriptions: Vec<SnapshotSubscription>,
    pub total: f64,
    pub available_content: Vec<ContentItem>,
}

/// Current spend versus recommended spend
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SpendingBreakdown {
    pub current_month: MonthSnapshot,
    pub next_month: MonthSnapshot,
    pub three_month_schedule: Vec<SchedulePeriod>,
    pub monthly_savings: f64,
    pub yearly_savings: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct Savings {
    pub amount: f64,
    pub percentage: u32,
}

/// A subscription record that was left out of the computation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExcludedSubscription {
    pub name: String,
    pub reason: String,
}

/// Everything the optimizer produces for one user
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct OptimizationResult {
    pub current_spending: f64,
    pub keep: Vec<String>,
    pub cancel: Vec<String>,
    pub savings: Savings,
    pub strategy: String,
    pub alternatives: Vec<String>,
    pub spending_breakdown: SpendingBreakdown,
    /// `None` when fewer than two valid subscriptions exist
    pub rotation_plan: Option<RotationPlan>,
    pub scored_subscriptions: Vec<ScoredSubscription>,
    pub excluded_subscriptions: Vec<ExcludedSubscription>,
    pub full_analysis: String,
    /// Set when there is nothing to optimize
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
