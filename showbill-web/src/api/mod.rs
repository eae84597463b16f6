//! HTTP handlers for showbill-web

pub mod artists;
pub mod errors;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::{Html, IntoResponse, Response},
};
use showbill_common::Error;
use tracing::{error, warn};

use crate::ui::{self, Flash};
use crate::WebError;

/// Numeric record id taken from the `:id` path segment
///
/// Anything that is not an integer is answered with the 404 page, the same
/// as an id that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| WebError::NotFound(e.body_text()))?;

        raw.parse::<i64>()
            .map(EntityId)
            .map_err(|_| WebError::NotFound(format!("No record with id {}", raw)))
    }
}

/// Response for a rejected or failed form submission
///
/// Validation and conflict failures re-render the submitted form with the
/// messages; storage failures land on the home page with `failure_message`.
pub(crate) fn form_failure(
    err: Error,
    render_form: impl FnOnce(&Flash) -> String,
    failure_message: String,
) -> Response {
    match err {
        Error::Validation(messages) => {
            let flash = Flash::errors(messages);
            (StatusCode::UNPROCESSABLE_ENTITY, Html(render_form(&flash))).into_response()
        }
        Error::Conflict(message) => {
            warn!("Write rejected: {}", message);
            let flash = Flash::error(message);
            (StatusCode::CONFLICT, Html(render_form(&flash))).into_response()
        }
        Error::NotFound(message) => WebError::NotFound(message).into_response(),
        other => {
            error!("{}: {}", failure_message, other);
            let flash = Flash::error(failure_message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(ui::home::home_page(Some(&flash))),
            )
                .into_response()
        }
    }
}
