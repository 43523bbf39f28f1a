pub mod error;
pub mod handlers;
pub mod state;

use axum::Router;
use axum::extract::Request;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span};

use crate::error::Result;

pub use error::ApiError;
pub use handlers::{ComboResponse, MenuResponse};
pub use state::AppState;

/// Build the HTTP router for the menu service.
pub fn router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
        )
    });

    Router::new()
        .route("/api/menu", get(handlers::get_menu))
        .route("/api/menu/stats", get(handlers::get_stats))
        .route("/api/menu/reset", post(handlers::reset_menu))
        .route("/health", get(handlers::health))
        .layer(trace_layer)
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Server listening on {}", listener.local_addr()?);
    info!("Menu endpoint available at http://{}/api/menu", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
