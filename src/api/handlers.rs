use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::RequestId;
use crate::models::{
    pricing, BillingCycle, ContentType, InterestProfile, OptimizationResult, SubscriptionRecord,
    ValidSubscription, WatchStatus, WatchlistItem,
};
use crate::services::{subscription_timeline, SubscriptionTimeline};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct CreateSubscriptionRequest {
    pub service_name: String,
    /// Defaults to the platform's list price when omitted
    pub monthly_price: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub billing_cycle: BillingCycle,
}

#[derive(Debug, Serialize)]
pub struct SubscriptionListResponse {
    pub subscriptions: Vec<SubscriptionRecord>,
    /// Sum over subscriptions with a usable cost
    pub total_monthly_spending: f64,
}

#[derive(Debug, Deserialize)]
pub struct AddWatchlistItemRequest {
    pub title: String,
    pub platform: Option<String>,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub status: WatchStatus,
}

#[derive(Debug, Serialize)]
pub struct WatchlistEntryResponse {
    #[serde(flatten)]
    pub item: WatchlistItem,
    pub user_has_subscription: bool,
    /// Monthly cost of reaching the title; zero when already subscribed
    pub platform_cost: Option<f64>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Get a user's subscriptions
pub async fn list_subscriptions(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<SubscriptionListResponse>> {
    let subscriptions = state.store.subscriptions(user_id).await?;
    let total_monthly_spending = subscriptions
        .iter()
        .filter_map(|record| ValidSubscription::try_from(record).ok())
        .map(|sub| sub.cost)
        .sum();

    Ok(Json(SubscriptionListResponse {
        subscriptions,
        total_monthly_spending,
    }))
}

/// Add a subscription
pub async fn create_subscription(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<CreateSubscriptionRequest>,
) -> AppResult<(StatusCode, Json<SubscriptionRecord>)> {
    let name = request.service_name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidInput("Please add a service name".to_string()));
    }

    let cost = match request.monthly_price {
        Some(price) if !price.is_finite() || price < 0.0 => {
            return Err(AppError::InvalidInput(
                "Monthly price must be a non-negative number".to_string(),
            ));
        }
        Some(price) => price,
        None => {
            if !pricing::is_known_platform(name) {
                tracing::debug!(service = %name, "No list price for service, using fallback");
            }
            pricing::default_monthly_price(name)
        }
    };

    if let (Some(start), Some(end)) = (request.start_date, request.end_date) {
        if end < start {
            return Err(AppError::InvalidInput(
                "End date must not be before start date".to_string(),
            ));
        }
    }

    let record = SubscriptionRecord {
        name: name.to_string(),
        cost: Some(cost),
        start_date: request.start_date,
        end_date: request.end_date,
        billing_cycle: request.billing_cycle,
    };

    let created = state.store.add_subscription(user_id, record).await?;
    tracing::info!(user_id = %user_id, service = %created.name, "Subscription added");

    Ok((StatusCode::CREATED, Json(created)))
}

/// Remove a subscription by service name
pub async fn delete_subscription(
    State(state): State<AppState>,
    Path((user_id, name)): Path<(Uuid, String)>,
) -> AppResult<StatusCode> {
    state.store.remove_subscription(user_id, &name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get a user's interests (empty when never set)
pub async fn get_interests(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<InterestProfile>> {
    let interests = state.store.interests(user_id).await?.unwrap_or_default();
    Ok(Json(interests))
}

/// Replace a user's interests
pub async fn put_interests(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(profile): Json<InterestProfile>,
) -> AppResult<Json<InterestProfile>> {
    let saved = state.store.set_interests(user_id, profile).await?;
    Ok(Json(saved))
}

/// Get a user's watchlist, annotated with what it costs to watch each title
pub async fn list_watchlist(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<Vec<WatchlistEntryResponse>>> {
    let (watchlist, subscriptions) = tokio::try_join!(
        state.store.watchlist(user_id),
        state.store.subscriptions(user_id)
    )?;

    let entries = watchlist
        .into_iter()
        .map(|item| {
            let user_has_subscription = item
                .platform()
                .is_some_and(|p| subscriptions.iter().any(|s| s.name == p));
            let platform_cost = item.platform().map(|p| {
                if user_has_subscription {
                    0.0
                } else {
                    pricing::default_monthly_price(p)
                }
            });

            WatchlistEntryResponse {
                item,
                user_has_subscription,
                platform_cost,
            }
        })
        .collect();

    Ok(Json(entries))
}

/// Add a watchlist item
pub async fn add_watchlist_item(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<AddWatchlistItemRequest>,
) -> AppResult<(StatusCode, Json<WatchlistItem>)> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(AppError::InvalidInput("Please add a title".to_string()));
    }

    let item = WatchlistItem {
        title: title.to_string(),
        platform: request
            .platform
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty()),
        content_type: request.content_type,
        status: request.status,
    };

    let created = state.store.add_watchlist_item(user_id, item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Run the optimizer over the user's current data
pub async fn recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<OptimizationResult>> {
    let (subscriptions, interests, watchlist) = tokio::try_join!(
        state.store.subscriptions(user_id),
        state.store.interests(user_id),
        state.store.watchlist(user_id)
    )?;

    tracing::info!(
        request_id = %request_id,
        user_id = %user_id,
        subscriptions = subscriptions.len(),
        watchlist = watchlist.len(),
        "Processing optimization request"
    );

    let today = Utc::now().date_naive();
    let result = state
        .optimizer
        .optimize(&subscriptions, interests.as_ref(), &watchlist, today);

    tracing::info!(
        request_id = %request_id,
        keep = result.keep.len(),
        cancel = result.cancel.len(),
        rotation_plan = result.rotation_plan.is_some(),
        "Optimization completed"
    );

    Ok(Json(result))
}

/// Twelve-month outlook of what the user pays if nothing changes
pub async fn schedule(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<SubscriptionTimeline>> {
    let subscriptions: Vec<ValidSubscription> = state
        .store
        .subscriptions(user_id)
        .await?
        .iter()
        .filter_map(|record| ValidSubscription::try_from(record).ok())
        .collect();

    let today = Utc::now().date_naive();
    Ok(Json(subscription_timeline(&subscriptions, today)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MockUserDataStore;
    use crate::services::Optimizer;
    use std::sync::Arc;

    fn state_with(store: MockUserDataStore) -> AppState {
        AppState::with_parts(Arc::new(store), Optimizer::default())
    }

    #[tokio::test]
    async fn test_store_failure_stops_before_optimizing() {
        let mut store = MockUserDataStore::new();
        store
            .expect_subscriptions()
            .returning(|_| Err(AppError::StoreUnavailable("connection refused".to_string())));
        store.expect_interests().returning(|_| Ok(None));
        store.expect_watchlist().returning(|_| Ok(vec![]));

        let result = recommendations(
            State(state_with(store)),
            Extension(RequestId::generate()),
            Path(Uuid::new_v4()),
        )
        .await;

        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_recommendations_from_store_snapshot() {
        let mut store = MockUserDataStore::new();
        store.expect_subscriptions().returning(|_| {
            Ok(vec![
                SubscriptionRecord::new("Netflix", 15.49),
                SubscriptionRecord::new("HBO Max", 15.99),
            ])
        });
        store.expect_interests().returning(|_| Ok(None));
        store
            .expect_watchlist()
            .returning(|_| Ok(vec![WatchlistItem::new("Wednesday", Some("Netflix"))]));

        let Json(result) = recommendations(
            State(state_with(store)),
            Extension(RequestId::generate()),
            Path(Uuid::new_v4()),
        )
        .await
        .unwrap();

        assert_eq!(result.keep.len(), 1);
        assert_eq!(result.cancel.len(), 1);
        assert!(result.rotation_plan.is_some());
    }

    #[tokio::test]
    async fn test_create_subscription_uses_list_price() {
        let mut store = MockUserDataStore::new();
        store
            .expect_add_subscription()
            .withf(|_, record| record.name == "Hulu" && record.cost == Some(7.99))
            .returning(|_, record| Ok(record));

        let (status, Json(created)) = create_subscription(
            State(state_with(store)),
            Path(Uuid::new_v4()),
            Json(CreateSubscriptionRequest {
                service_name: " Hulu ".to_string(),
                monthly_price: None,
                start_date: None,
                end_date: None,
                billing_cycle: BillingCycle::Monthly,
            }),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.cost, Some(7.99));
    }

    #[tokio::test]
    async fn test_create_subscription_rejects_negative_price() {
        let store = MockUserDataStore::new();

        let result = create_subscription(
            State(state_with(store)),
            Path(Uuid::new_v4()),
            Json(CreateSubscriptionRequest {
                service_name: "Hulu".to_string(),
                monthly_price: Some(-1.0),
                start_date: None,
                end_date: None,
                billing_cycle: BillingCycle::Monthly,
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
