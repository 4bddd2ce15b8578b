//! HTTP agent serving the current host snapshot.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method, header};
use axum::routing::get;
use axum::{Json, Router};
use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::system::collector::Collector;
use crate::system::snapshot::Snapshot;

pub const SNAPSHOT_PATH: &str = "/api/system";
pub const SNAPSHOT_ALIAS: &str = "/system";

pub type SharedCollector = Arc<Mutex<Collector>>;

pub fn router(collector: SharedCollector) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(SNAPSHOT_PATH, get(system_handler))
        .route(SNAPSHOT_ALIAS, get(system_handler))
        .with_state(collector)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn system_handler(State(collector): State<SharedCollector>) -> Json<Snapshot> {
    let mut collector = collector.lock().await;
    Json(collector.refresh())
}

/// Binds the agent and serves until the shutdown future resolves.
pub async fn serve<F>(addr: SocketAddr, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("failed to bind {addr}"))?;
    serve_on(listener, shutdown).await
}

pub async fn serve_on<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let collector = Arc::new(Mutex::new(Collector::new()));
    let app = router(collector);

    info!("serving snapshots at http://{}{SNAPSHOT_PATH}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .wrap_err("agent server failed")?;
    info!("agent stopped");
    Ok(())
}
