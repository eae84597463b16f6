//! showbill-web library - HTTP service for venue, artist and show listings
//!
//! Server-rendered HTML pages over the showbill database. Handlers receive the
//! shared [`AppState`] through axum state; there is no global database handle.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod forms;
pub mod ui;

pub use crate::error::{WebError, WebResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", axum::routing::get(api::home::index))
        .merge(api::venues::venue_routes())
        .merge(api::artists::artist_routes())
        .merge(api::shows::show_routes())
        .merge(api::health::health_routes())
        .fallback(api::errors::not_found)
        .layer(CatchPanicLayer::custom(api::errors::handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
