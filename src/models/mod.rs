pub mod interest;
pub mod plan;
pub mod pricing;
pub mod subscription;
pub mod watchlist;

pub use interest::{InterestProfile, PreferredContentType};
pub use plan::{
    ContentItem, ExcludedSubscription, MonthSnapshot, OptimizationResult, Period,
    PeriodSubscription, RotationPlan, Savings, SchedulePeriod, ScoredSubscription,
    SnapshotSubscription, SpendingBreakdown, UsageStat,
};
pub use subscription::{BillingCycle, InvalidSubscription, SubscriptionRecord, ValidSubscription};
pub use watchlist::{ContentType, WatchStatus, WatchlistItem};
