//! obesiq Web Server
//!
//! Run with: cargo run -p obesiq-web

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting obesiq web server...");

    let config = obesiq_config::Config::load()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = obesiq_web::state::AppState::new(config);

    // Warm the classifier slot; a failure here is not fatal, the first
    // assessment will retry the load.
    if let Err(err) = state.classifier().await {
        warn!(error = %err, "classifier not available at startup");
    }

    let app = obesiq_web::router::build_router(state);

    info!("Server listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
