use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{
    ExcludedSubscription, InterestProfile, OptimizationResult, SubscriptionRecord,
    ValidSubscription, WatchlistItem,
};

use super::budget::{select_within_budget, TARGET_BUDGET_RATIO};
use super::classifier::classify;
use super::projection::project_spending;
use super::report;
use super::rotation::build_rotation_plan;
use super::scoring::{score_subscriptions, ScoreWeights};
use super::telemetry::{OptimizerTelemetry, TracingTelemetry};
use super::usage::analyze_usage;

pub const NO_SUBSCRIPTIONS_MESSAGE: &str =
    "No subscriptions found. Add your subscriptions to get optimization recommendations.";

pub const NO_VALID_SUBSCRIPTIONS_MESSAGE: &str =
    "None of your subscriptions has a valid monthly cost. Update their prices to get optimization recommendations.";

/// Error types for the optimizer
#[derive(Debug, Error, PartialEq)]
pub enum OptimizerError {
    #[error("target budget ratio must be within (0, 1], got {0}")]
    InvalidBudgetRatio(f64),
}

/// Tunable policy for the optimizer
///
/// The two weight profiles intentionally stay separate: classification decides
/// keep/cancel while rotation ranks services for the schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizerSettings {
    pub classification_weights: ScoreWeights,
    pub rotation_weights: ScoreWeights,
    pub target_budget_ratio: f64,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            classification_weights: ScoreWeights::CLASSIFICATION,
            rotation_weights: ScoreWeights::ROTATION,
            target_budget_ratio: TARGET_BUDGET_RATIO,
        }
    }
}

impl OptimizerSettings {
    pub fn validate(&self) -> Result<(), OptimizerError> {
        let ratio = self.target_budget_ratio;
        if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
            return Err(OptimizerError::InvalidBudgetRatio(ratio));
        }
        Ok(())
    }
}

/// Subscription optimization engine
///
/// Runs one forward pass per request: analyze usage, score, classify,
/// size the rotation budget, schedule, and project spending. It holds no
/// mutable state and can be shared across requests.
#[derive(Clone)]
pub struct Optimizer {
    settings: OptimizerSettings,
    telemetry: Arc<dyn OptimizerTelemetry>,
}

impl std::fmt::Debug for Optimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Optimizer")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Optimizer {
    /// Creates an optimizer reporting to `telemetry`
    pub fn new(
        settings: OptimizerSettings,
        telemetry: Arc<dyn OptimizerTelemetry>,
    ) -> Result<Self, OptimizerError> {
        settings.validate()?;
        Ok(Self {
            settings,
            telemetry,
        })
    }

    pub fn settings(&self) -> &OptimizerSettings {
        &self.settings
    }

    /// Produces keep/cancel advice, a spending breakdown and a rotation plan
    ///
    /// `start` anchors calendar labels: the first period is `start`'s month.
    /// Never fails on degenerate input. No subscriptions, or none with a usable
    /// cost, yields an empty result with `message` set; fewer than two valid
    /// subscriptions yields no rotation plan.
    pub fn optimize(
        &self,
        subscriptions: &[SubscriptionRecord],
        interests: Option<&InterestProfile>,
        watchlist: &[WatchlistItem],
        start: NaiveDate,
    ) -> OptimizationResult {
        let started = Instant::now();

        if subscriptions.is_empty() {
            return OptimizationResult {
                strategy: "Add subscriptions to get personalized recommendations.".to_string(),
                message: Some(NO_SUBSCRIPTIONS_MESSAGE.to_string()),
                ..Default::default()
            };
        }

        let (valid, excluded) = self.validate_subscriptions(subscriptions);

        let usage = analyze_usage(&valid, watchlist, interests);
        let scored = score_subscriptions(
            &valid,
            &usage,
            self.settings.classification_weights,
            self.settings.rotation_weights,
        );
        self.telemetry.usage_analyzed(&scored);

        let actual_spending: f64 = valid.iter().map(|s| s.cost).sum();

        let classification = classify(&scored);
        if classification.fallback_applied {
            let kept: Vec<&str> = classification.kept().map(|d| d.name.as_str()).collect();
            self.telemetry.fallback_applied(&kept);
        }

        let rotation_plan =
            select_within_budget(&scored, self.settings.target_budget_ratio).map(|selection| {
                self.telemetry.budget_selected(
                    selection.actual_spending,
                    selection.target_budget,
                    selection.simultaneous_services,
                );
                let plan = build_rotation_plan(&selection, watchlist, start);
                self.telemetry.plan_built(&plan);
                plan
            });

        let spending_breakdown = project_spending(&scored, &classification, watchlist, start);

        let mut result = OptimizationResult {
            current_spending: actual_spending,
            keep: classification.keep_summaries(),
            cancel: classification.cancel_summaries(),
            savings: classification.savings(actual_spending),
            strategy: report::strategy(rotation_plan.as_ref(), actual_spending),
            alternatives: report::alternatives(),
            spending_breakdown,
            rotation_plan,
            scored_subscriptions: scored,
            excluded_subscriptions: excluded,
            full_analysis: String::new(),
            message: valid
                .is_empty()
                .then(|| NO_VALID_SUBSCRIPTIONS_MESSAGE.to_string()),
        };
        result.full_analysis = report::full_analysis(&result);

        tracing::debug!(
            processing_time_us = started.elapsed().as_micros() as u64,
            "Optimization pass finished"
        );

        result
    }

    /// Splits records into usable subscriptions and excluded ones
    fn validate_subscriptions(
        &self,
        records: &[SubscriptionRecord],
    ) -> (Vec<ValidSubscription>, Vec<ExcludedSubscription>) {
        let mut valid = Vec::with_capacity(records.len());
        let mut excluded = Vec::new();

        for record in records {
            match ValidSubscription::try_from(record) {
                Ok(sub) => valid.push(sub),
                Err(reason) => {
                    self.telemetry.subscription_excluded(record, &reason);
                    excluded.push(ExcludedSubscription {
                        name: record.name.clone(),
                        reason: reason.to_string(),
                    });
                }
            }
        }

        (valid, excluded)
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self {
            settings: OptimizerSettings::default(),
            telemetry: Arc::new(TracingTelemetry),
        }
    }
}

/// Runs the optimizer with default settings and `tracing` diagnostics
pub fn optimize(
    subscriptions: &[SubscriptionRecord],
    interests: Option<&InterestProfile>,
    watchlist: &[WatchlistItem],
    start: NaiveDate,
) -> OptimizationResult {
    Optimizer::default().optimize(subscriptions, interests, watchlist, start)
}
