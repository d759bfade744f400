use crate::config::ServerConfig;
use crate::routes::{validate, AppState};
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;

pub fn router(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .route(validate::PATH, post(validate::validate_json))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .with_state(state)
}

/// Serves on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, cfg: &ServerConfig, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(AppState::from_config(cfg), cfg.body_limit_bytes);
    tracing::info!(
        addr = %listener.local_addr()?,
        optional_fields = cfg.optional_fields.len(),
        max_depth = cfg.max_depth,
        body_limit_bytes = cfg.body_limit_bytes,
        "nullguard listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("nullguard stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
