//! Router fallback and panic recovery

use std::any::Any;

use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, error};

use crate::ui;

/// Any route that matched nothing
pub async fn not_found(uri: Uri) -> (StatusCode, Html<String>) {
    debug!("No route for {}", uri);
    (StatusCode::NOT_FOUND, Html(ui::errors::not_found_page()))
}

/// Turn a handler panic into the 500 page
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(ui::errors::server_error_page()),
    )
        .into_response()
}
