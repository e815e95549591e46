mod btv;
mod catalog;
mod config;
mod error;
mod fetch;
mod models;
mod routes;
mod state;
mod urls;

#[cfg(test)]
mod testing;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Config ───────────────────────────────────────────────────────────────
    let config = config::AppConfig::from_env()?;

    // ── Logging ──────────────────────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "beetv=info,tower_http=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.log_format == "json" {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    info!(
        "Starting beetv for {} (connect timeout {}s, read timeout {}s)",
        config.site_origin, config.connect_timeout_secs, config.read_timeout_secs
    );
    match config.fan_out_limit() {
        Some(n) => info!("Fan-out limited to {n} concurrent page fetches"),
        None => info!("Fan-out unbounded"),
    }

    // ── Application state ─────────────────────────────────────────────────────
    let state = AppState::from_config(config)?;
    let bind = state.config.bind.clone();

    // ── HTTP server ───────────────────────────────────────────────────────────
    let router = routes::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("Listening on http://{bind}");

    axum::serve(listener, router).await?;

    Ok(())
}
