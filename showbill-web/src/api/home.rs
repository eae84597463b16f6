//! Landing page

use axum::response::Html;

use crate::ui;

/// GET /
pub async fn index() -> Html<String> {
    Html(ui::home::home_page(None))
}
