use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Subscriptions
        .route(
            "/users/:user_id/subscriptions",
            get(handlers::list_subscriptions).post(handlers::create_subscription),
        )
        .route(
            "/users/:user_id/subscriptions/:name",
            delete(handlers::delete_subscription),
        )
        // Interests
        .route(
            "/users/:user_id/interests",
            get(handlers::get_interests).put(handlers::put_interests),
        )
        // Watchlist
        .route(
            "/users/:user_id/watchlist",
            get(handlers::list_watchlist).post(handlers::add_watchlist_item),
        )
        // Optimization
        .route(
            "/users/:user_id/optimization/recommendations",
            get(handlers::recommendations),
        )
        .route(
            "/users/:user_id/optimization/schedule",
            get(handlers::schedule),
        )
}
