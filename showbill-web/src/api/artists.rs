//! Artist pages: directory, search, detail, create and edit

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use showbill_common::db::artists;
use showbill_common::listing::{artist_shows, search_artists};
use showbill_common::time::now;

use super::{form_failure, EntityId};
use crate::forms::{ArtistForm, SearchForm};
use crate::ui::{self, Flash};
use crate::{AppState, WebError, WebResult};

/// Build artist routes
pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search))
        .route("/artists/create", get(create_form).post(create_submit))
        .route("/artists/:id", get(show_artist))
        .route("/artists/:id/edit", get(edit_form).post(edit_submit))
}

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> WebResult<Html<String>> {
    let artists = artists::list_artists(&state.db).await?;
    Ok(Html(ui::artists::artist_list_page(&artists, None)))
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> WebResult<Html<String>> {
    let results = search_artists(&state.db, &form.search_term, now()).await?;
    Ok(Html(ui::search_results_page(
        "Artists",
        "/artists",
        &form.search_term,
        &results,
    )))
}

/// GET /artists/:id
pub async fn show_artist(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> WebResult<Html<String>> {
    artist_detail(&state, id, None).await
}

async fn artist_detail(state: &AppState, id: i64, flash: Option<&Flash>) -> WebResult<Html<String>> {
    let artist = artists::get_artist(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("Artist {}", id)))?;
    let shows = artist_shows(&state.db, id, now()).await?;

    Ok(Html(ui::artists::artist_detail_page(&artist, &shows, flash)))
}

/// GET /artists/create
pub async fn create_form() -> Html<String> {
    Html(ui::forms::artist_form_page(
        "List a new artist",
        "/artists/create",
        &ArtistForm::default(),
        None,
    ))
}

/// POST /artists/create
pub async fn create_submit(
    State(state): State<AppState>,
    axum_extra::extract::Form(form): axum_extra::extract::Form<ArtistForm>,
) -> Response {
    let input = form.to_input();

    match artists::create_artist(&state.db, &input).await {
        Ok(_) => {
            let flash = Flash::success(format!("Artist {} was successfully listed!", input.name));
            Html(ui::home::home_page(Some(&flash))).into_response()
        }
        Err(e) => form_failure(
            e,
            |flash| ui::forms::artist_form_page("List a new artist", "/artists/create", &form, Some(flash)),
            format!("An error occurred. Artist {} could not be listed.", input.name),
        ),
    }
}

/// GET /artists/:id/edit
pub async fn edit_form(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> WebResult<Html<String>> {
    let artist = artists::get_artist(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("Artist {}", id)))?;

    Ok(Html(ui::forms::artist_form_page(
        "Edit artist",
        &format!("/artists/{}/edit", id),
        &ArtistForm::from(&artist),
        None,
    )))
}

/// POST /artists/:id/edit
pub async fn edit_submit(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    axum_extra::extract::Form(form): axum_extra::extract::Form<ArtistForm>,
) -> Response {
    let input = form.to_input();
    let action = format!("/artists/{}/edit", id);

    if let Err(e) = artists::update_artist(&state.db, id, &input).await {
        return form_failure(
            e,
            |flash| ui::forms::artist_form_page("Edit artist", &action, &form, Some(flash)),
            format!("An error occurred. Artist {} could not be edited.", input.name),
        );
    }

    let flash = Flash::success(format!("Artist {} was successfully edited!", input.name));
    artist_detail(&state, id, Some(&flash)).await.into_response()
}
