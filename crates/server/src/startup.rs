use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::{AppConfig, LogFormat};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

/// Initialize logging in the format selected by the config.
pub fn init_logging(cfg: &AppConfig) {
    common::utils::logging::init_logging(cfg.logging.format == LogFormat::Json);
}

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect to the database and build the application context.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    Ok(ServerState::new(db))
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: build the app and serve until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "starting services api");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("services api stopped");
    Ok(())
}
