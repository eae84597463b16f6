//! Error pages

use axum::http::StatusCode;

use super::{escape, layout};

pub fn not_found_page() -> String {
    layout(
        "Not found",
        None,
        r#"<h1>404 Not Found</h1>
<p>The page you were looking for does not exist.</p>
<p><a href="/">Back to the home page</a></p>"#,
    )
}

pub fn server_error_page() -> String {
    layout(
        "Server error",
        None,
        r#"<h1>500 Internal Server Error</h1>
<p>Something went wrong on our side. Please try again later.</p>
<p><a href="/">Back to the home page</a></p>"#,
    )
}

/// Request understood but refused (validation failure, conflicting write)
pub fn rejected_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"<h1>{code} {reason}</h1>
<p>{message}</p>
<p><a href="/">Back to the home page</a></p>"#,
        code = status.as_u16(),
        reason = reason,
        message = escape(message),
    );
    layout(reason, None, &body)
}
