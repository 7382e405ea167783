use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use watchwise_api::api::{create_router, AppState};
use watchwise_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("watchwise_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Reject a bad budget ratio before accepting traffic
    let state = AppState::from_config(&config)?;
    tracing::info!(settings = ?state.optimizer.settings(), "Optimizer configured");
    let store_name = state.store.name();

    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, store = store_name, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
