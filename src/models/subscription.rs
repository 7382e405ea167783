use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How often the provider bills the user
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

/// A subscription as supplied by the subscription store
///
/// Records are taken as-is; nothing guarantees `cost` is usable. Convert to
/// [`ValidSubscription`] before handing one to the optimizer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionRecord {
    /// Service name (e.g., "Netflix"); identifies the subscription for a user
    pub name: String,
    /// Monthly cost in dollars
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub billing_cycle: BillingCycle,
}

impl SubscriptionRecord {
    /// Creates a monthly record with no dates
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost: Some(cost),
            start_date: None,
            end_date: None,
            billing_cycle: BillingCycle::Monthly,
        }
    }
}

/// Why a subscription record was excluded from optimization
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum InvalidSubscription {
    #[error("service name is empty")]
    MissingName,
    #[error("cost is missing")]
    MissingCost,
    #[error("cost is not a finite number")]
    NonFiniteCost,
    #[error("cost {0} is not positive")]
    NonPositiveCost(f64),
}

/// A subscription with a non-empty name and a positive, finite monthly cost
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidSubscription {
    pub name: String,
    pub cost: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub billing_cycle: BillingCycle,
}

impl TryFrom<&SubscriptionRecord> for ValidSubscription {
    type Error = InvalidSubscription;

    fn try_from(record: &SubscriptionRecord) -> Result<Self, Self::Error> {
        if record.name.trim().is_empty() {
            return Err(InvalidSubscription::MissingName);
        }

        let cost = record.cost.ok_or(InvalidSubscription::MissingCost)?;
        if !cost.is_finite() {
            return Err(InvalidSubscription::NonFiniteCost);
        }
        if cost <= 0.0 {
            return Err(InvalidSubscription::NonPositiveCost(cost));
        }

        Ok(Self {
            name: record.name.clone(),
            cost,
            start_date: record.start_date,
            end_date: record.end_date,
            billing_cycle: record.billing_cycle,
        })
    }
}
