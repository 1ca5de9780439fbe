use sales_explorer::api::routes::build_router;
use sales_explorer::config::AppConfig;
use sales_explorer::dataset::loader::SharedDataset;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    tracing::info!("Loading dataset from {}", config.data_path.display());

    // 1. Dataset: built once, before any request can observe it.
    let dataset = SharedDataset::new(config.data_path.clone());
    if let Err(err) = dataset.get().await {
        tracing::error!(
            "Failed to load dataset from {}: {}",
            dataset.source().display(),
            err
        );
        return Err(err.into());
    }

    // 2. HTTP Router:
    let app = build_router(dataset);

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("API available at http://{}/api/sales", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
