//! Venue pages: directory, search, detail, create, edit and delete

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Serialize;
use showbill_common::db::venues;
use showbill_common::listing::{search_venues, venue_areas, venue_shows};
use showbill_common::time::now;
use showbill_common::Error;
use tracing::error;

use super::{form_failure, EntityId};
use crate::forms::{SearchForm, VenueForm};
use crate::ui::{self, Flash};
use crate::{AppState, WebError, WebResult};

/// Build venue routes
pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search))
        .route("/venues/create", get(create_form).post(create_submit))
        .route("/venues/:id", get(show_venue).delete(delete_venue))
        .route("/venues/:id/edit", get(edit_form).post(edit_submit))
}

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> WebResult<Html<String>> {
    let areas = venue_areas(&state.db, now()).await?;
    Ok(Html(ui::venues::venue_list_page(&areas, None)))
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> WebResult<Html<String>> {
    let results = search_venues(&state.db, &form.search_term, now()).await?;
    Ok(Html(ui::search_results_page(
        "Venues",
        "/venues",
        &form.search_term,
        &results,
    )))
}

/// GET /venues/:id
pub async fn show_venue(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> WebResult<Html<String>> {
    venue_detail(&state, id, None).await
}

async fn venue_detail(state: &AppState, id: i64, flash: Option<&Flash>) -> WebResult<Html<String>> {
    let venue = venues::get_venue(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("Venue {}", id)))?;
    let shows = venue_shows(&state.db, id, now()).await?;

    Ok(Html(ui::venues::venue_detail_page(&venue, &shows, flash)))
}

/// GET /venues/create
pub async fn create_form() -> Html<String> {
    Html(ui::forms::venue_form_page(
        "List a new venue",
        "/venues/create",
        &VenueForm::default(),
        None,
    ))
}

/// POST /venues/create
pub async fn create_submit(
    State(state): State<AppState>,
    axum_extra::extract::Form(form): axum_extra::extract::Form<VenueForm>,
) -> Response {
    let input = form.to_input();

    match venues::create_venue(&state.db, &input).await {
        Ok(_) => {
            let flash = Flash::success(format!("Venue {} was successfully listed!", input.name));
            Html(ui::home::home_page(Some(&flash))).into_response()
        }
        Err(e) => form_failure(
            e,
            |flash| ui::forms::venue_form_page("List a new venue", "/venues/create", &form, Some(flash)),
            format!("An error occurred. Venue {} could not be listed.", input.name),
        ),
    }
}

/// GET /venues/:id/edit
pub async fn edit_form(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> WebResult<Html<String>> {
    let venue = venues::get_venue(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("Venue {}", id)))?;

    Ok(Html(ui::forms::venue_form_page(
        "Edit venue",
        &format!("/venues/{}/edit", id),
        &VenueForm::from(&venue),
        None,
    )))
}

/// POST /venues/:id/edit
pub async fn edit_submit(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    axum_extra::extract::Form(form): axum_extra::extract::Form<VenueForm>,
) -> Response {
    let input = form.to_input();
    let action = format!("/venues/{}/edit", id);

    if let Err(e) = venues::update_venue(&state.db, id, &input).await {
        return form_failure(
            e,
            |flash| ui::forms::venue_form_page("Edit venue", &action, &form, Some(flash)),
            format!("An error occurred. Venue {} could not be edited.", input.name),
        );
    }

    let flash = Flash::success(format!("Venue {} was successfully edited!", input.name));
    venue_detail(&state, id, Some(&flash)).await.into_response()
}

/// JSON body answering a delete request
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// DELETE /venues/:id
///
/// Refused with 409 while shows still reference the venue.
pub async fn delete_venue(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> (StatusCode, Json<DeleteResponse>) {
    let (status, error) = match venues::delete_venue(&state.db, id).await {
        Ok(()) => (StatusCode::OK, None),
        Err(e @ Error::NotFound(_)) => (StatusCode::NOT_FOUND, Some(e.to_string())),
        Err(e @ Error::Conflict(_)) => (StatusCode::CONFLICT, Some(e.to_string())),
        Err(e) => {
            error!("Failed to delete venue {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Some(format!("An error occurred. Venue {} could not be deleted.", id)),
            )
        }
    };

    (
        status,
        Json(DeleteResponse {
            success: error.is_none(),
            error,
        }),
    )
}
