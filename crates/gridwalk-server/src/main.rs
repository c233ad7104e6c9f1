//! gridwalk-server binary
//!
//! Loads configuration, applies migrations, and serves until interrupted.

use anyhow::Context;
use gridwalk_core::logging_facility;
use gridwalk_server::{router, AppConfig, AppState};
use gridwalk_store::{db, migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    logging_facility::init(config.logging_profile()?);

    let mut conn = db::open_configured(&config.database.path)?;
    if let Err(err) = migrations::apply_migrations(&mut conn) {
        tracing::error!(err_code = err.code(), "{}", err);
        return Err(err).context("applying migrations");
    }

    let state = AppState::new(conn, config.strategy()?);
    let app = router(state, &config.server.path);

    let addr = (config.server.host.as_str(), config.server.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}:{}", config.server.host, config.server.port))?;
    tracing::info!(
        addr = %listener.local_addr()?,
        route = %config.server.path,
        strategy = %config.engine.strategy,
        "gridwalk-server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown requested");
    }
}
