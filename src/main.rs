use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::AppConfig;
use activities::database::{catalog, ActivityStore};
use activities::models::Activity;
use activities::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let store = match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "loading catalog seed file");
            ActivityStore::new(catalog::load_catalog_file(path)?)?
        }
        None => ActivityStore::with_default_catalog(),
    };
    let snapshot = store.list_activities();
    info!(
        activities = snapshot.len(),
        open_spots = snapshot.values().map(Activity::spots_left).sum::<usize>(),
        build = env!("ACTIVITIES_BUILD_ID"),
        "activity catalog ready"
    );

    let app = web::router(Arc::new(store), &config.static_dir);

    let listener = bind_with_fallback(&config).await?;
    let bound_addr = listener.local_addr()?;
    info!("Server running on http://{}", bound_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn bind_with_fallback(config: &AppConfig) -> anyhow::Result<TcpListener> {
    let addr = config.bind_addr();
    match TcpListener::bind(&addr).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            let fallback = config
                .fallback_bind_addr()
                .with_context(|| format!("could not bind {} and no fallback port is left", addr))?;
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            TcpListener::bind(&fallback)
                .await
                .with_context(|| format!("could not bind fallback {}", fallback))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
