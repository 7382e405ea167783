use crate::models::{InvalidSubscription, RotationPlan, ScoredSubscription, SubscriptionRecord};

/// Diagnostics sink handed to the optimizer
///
/// Hooks observe the computation; they return nothing and cannot change the
/// result. Every hook defaults to a no-op.
pub trait OptimizerTelemetry: Send + Sync {
    fn subscription_excluded(&self, _record: &SubscriptionRecord, _reason: &InvalidSubscription) {}

    fn usage_analyzed(&self, _scored: &[ScoredSubscription]) {}

    fn fallback_applied(&self, _kept: &[&str]) {}

    fn budget_selected(&self, _actual_spending: f64, _target_budget: f64, _simultaneous: usize) {}

    fn plan_built(&self, _plan: &RotationPlan) {}
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetry;

impl OptimizerTelemetry for NoopTelemetry {}

/// Emits structured `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetry;

impl OptimizerTelemetry for TracingTelemetry {
    fn subscription_excluded(&self, record: &SubscriptionRecord, reason: &InvalidSubscription) {
        tracing::warn!(
            name = %record.name,
            cost = ?record.cost,
            reason = %reason,
            "Invalid subscription excluded from optimization"
        );
    }

    fn usage_analyzed(&self, scored: &[ScoredSubscription]) {
        for sub in scored {
            tracing::debug!(
                name = %sub.name,
                cost = sub.cost,
                watchlist_count = sub.watchlist_count,
                genre_match_count = sub.genre_match_count,
                classification_score = sub.classification_score,
                rotation_score = sub.rotation_score,
                "Subscription scored"
            );
        }
    }

    fn fallback_applied(&self, kept: &[&str]) {
        tracing::info!(kept = ?kept, "No subscription scored, keeping cheapest");
    }

    fn budget_selected(&self, actual_spending: f64, target_budget: f64, simultaneous: usize) {
        tracing::debug!(
            actual_spending,
            target_budget,
            simultaneous_services = simultaneous,
            "Rotation budget selected"
        );
    }

    fn plan_built(&self, plan: &RotationPlan) {
        tracing::info!(
            simultaneous_services = plan.simultaneous_services,
            periods = plan.periods.len(),
            yearly_total = plan.yearly_total,
            estimated_savings = plan.estimated_savings,
            "Rotation plan created"
        );
    }
}
