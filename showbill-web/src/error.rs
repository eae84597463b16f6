//! Error type for HTTP handlers
//!
//! Every failure reaching the request boundary is turned into a rendered
//! error page; nothing escapes as an unhandled fault.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use showbill_common::Error;
use thiserror::Error;
use tracing::error;

use crate::ui;

#[derive(Debug, Error)]
pub enum WebError {
    /// Route matched but the record does not exist (or the id is malformed)
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Common(#[from] Error),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::NotFound(_) | WebError::Common(Error::NotFound(_)) => StatusCode::NOT_FOUND,
            WebError::Common(Error::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            WebError::Common(Error::Conflict(_)) => StatusCode::CONFLICT,
            WebError::Common(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let page = match status {
            StatusCode::NOT_FOUND => ui::errors::not_found_page(),
            StatusCode::INTERNAL_SERVER_ERROR => {
                error!("Request failed: {}", self);
                ui::errors::server_error_page()
            }
            _ => ui::errors::rejected_page(status, &self.to_string()),
        };

        (status, Html(page)).into_response()
    }
}

/// Result type for HTTP handlers
pub type WebResult<T> = Result<T, WebError>;
