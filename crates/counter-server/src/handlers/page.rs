//! Counter page handlers.

use axum::http::header;
use axum::response::{Html, IntoResponse};

/// Serves the counter page.
///
/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Serves the page's client JavaScript.
///
/// `GET /app.js`
pub async fn app_js() -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        include_str!("../../static/app.js"),
    )
}
