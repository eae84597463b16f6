//! Show listing and booking

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use showbill_common::db::shows;
use showbill_common::time::now;
use showbill_common::Error;

use super::form_failure;
use crate::forms::ShowForm;
use crate::ui::{self, Flash};
use crate::{AppState, WebResult};

/// Build show routes
pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_form).post(create_submit))
}

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> WebResult<Html<String>> {
    let shows = shows::list_shows(&state.db).await?;
    Ok(Html(ui::shows::show_list_page(&shows, None)))
}

/// GET /shows/create
pub async fn create_form() -> Html<String> {
    Html(ui::forms::show_form_page(&ShowForm::starting_at(&now()), None))
}

/// POST /shows/create
pub async fn create_submit(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Response {
    let render = |flash: &Flash| ui::forms::show_form_page(&form, Some(flash));
    let failure = "An error occurred. Show could not be listed.".to_string();

    let input = match form.to_input() {
        Ok(input) => input,
        Err(messages) => return form_failure(Error::Validation(messages), render, failure),
    };

    match shows::create_show(&state.db, &input).await {
        Ok(_) => {
            let flash = Flash::success("Show was successfully listed!");
            Html(ui::home::home_page(Some(&flash))).into_response()
        }
        Err(e) => form_failure(e, render, failure),
    }
}
