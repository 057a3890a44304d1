use axum::{
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::{AppState, SharedState};

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/session", get(handlers::get_session))
        .route("/api/view", put(handlers::set_view))
        .route("/api/result-tab", put(handlers::set_result_tab))
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/analyze/cancel", post(handlers::cancel_analysis))
        .route("/api/analysis", get(handlers::get_analysis))
        .route("/api/keywords", get(handlers::list_keywords))
        .route("/api/keywords/:keyword", post(handlers::select_keyword))
        .route("/api/history", get(handlers::list_history))
        .route("/api/history/:id", axum::routing::delete(handlers::delete_history_entry))
        .route("/api/history/:id/open", post(handlers::open_history_entry))
        .route(
            "/api/selection",
            post(handlers::select_text).delete(handlers::clear_selection),
        )
        .route("/api/chat", get(handlers::get_chat).post(handlers::ask))
        .route("/api/words/:word", get(handlers::lookup_word))
        .route("/api/words/:word/articles/:id", get(handlers::open_related_article))
        .route("/api/notifications", get(handlers::drain_notifications))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(addr: SocketAddr, state: AppState) -> ar_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::{create_app, serve, AppState};
    pub use ar_core::{Error, Result};
}
