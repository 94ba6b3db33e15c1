use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{header, request::Parts},
};
use serde::Deserialize;

use crate::site::theme::{NavState, Theme};

/// Extracts the header state for the page being requested: path, theme cookie
/// and whether `menu=open` was asked for.
pub struct Nav(pub NavState);

#[derive(Debug, Deserialize)]
struct MenuQuery {
    menu: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for Nav
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let mut nav = NavState::new(parts.uri.path());

        nav.theme = parts
            .headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .map(Theme::from_cookie_header)
            .unwrap_or_default();

        // A query that fails to parse just leaves the menu closed.
        let wants_menu = Query::<MenuQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.menu)
            .is_some_and(|menu| menu == "open");
        if wants_menu {
            nav.toggle_menu();
        }

        Ok(Nav(nav))
    }
}
