use std::sync::Arc;

use tracing::{Level, info};

use notes_service::{AppState, Config, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Starting Notes Service");

    let config = Config::from_env().unwrap_or_default();
    info!(
        external_provider = config.provider.api_key.is_some(),
        "Configuration loaded"
    );

    let state = Arc::new(AppState::from_config(&config));
    let app = create_router(state);

    let addr = config.socket_addr()?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
