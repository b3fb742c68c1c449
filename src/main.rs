use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movie_search::{
    api::{create_router, AppState},
    config::Config,
    services::{SearchController, TmdbClient},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_search=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::debug!(config = ?config, "Configuration loaded");

    // Mount the search screen; this fetches the genre list once
    let api = Arc::new(TmdbClient::from_config(&config));
    let controller = SearchController::mount(api, config.search_debounce()).await;
    let app = create_router(AppState::new(controller));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Search bridge listening");
    axum::serve(listener, app).await?;

    Ok(())
}
