//! API server setup.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ApiConfig;
use crate::error::ServerResult;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the router with middleware applied.
pub fn build_app(config: &ApiConfig, state: AppState) -> Router {
    let mut router = create_router(state).layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}

/// Bind and serve until `shutdown` resolves.
pub async fn serve<F>(config: &ApiConfig, state: AppState, shutdown: F) -> ServerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(config, state);

    let listener = TcpListener::bind(config.bind_target()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "Receipt API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
