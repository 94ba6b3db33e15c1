use axum::{
    extract::Query,
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::routes::nav::Nav;
use crate::site::theme::safe_redirect_target;

#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    pub next: Option<String>,
}

/// GET /theme?next=/path
///
/// Flips the theme cookie and sends the reader back where they came from.
pub async fn toggle_theme(Nav(nav): Nav, Query(query): Query<ThemeQuery>) -> Response {
    let theme = nav.theme.toggled();
    let target = safe_redirect_target(query.next.as_deref());
    (
        [(header::SET_COOKIE, theme.set_cookie())],
        Redirect::to(target),
    )
        .into_response()
}
