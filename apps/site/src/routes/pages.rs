//! Axum route handlers for the site pages.

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;

use crate::errors::AppError;
use crate::routes::nav::Nav;
use crate::site::pages::{render_not_found, render_route, Rendered};
use crate::site::paths::Route;
use crate::site::reading::ReadingMode;
use crate::site::sitemap::{render_sitemap, sitemap_entries};
use crate::state::AppState;

impl IntoResponse for Rendered {
    fn into_response(self) -> Response {
        (self.status, Html(self.html)).into_response()
    }
}

fn page(state: &AppState, route: Route, Nav(nav): Nav) -> Result<Rendered, AppError> {
    render_route(&state.content, &route, &nav)
}

/// GET /
pub async fn home(State(state): State<AppState>, nav: Nav) -> Result<Rendered, AppError> {
    page(&state, Route::Home, nav)
}

/// GET /about
pub async fn about(State(state): State<AppState>, nav: Nav) -> Result<Rendered, AppError> {
    page(&state, Route::About, nav)
}

/// GET /experience
pub async fn experience_list(
    State(state): State<AppState>,
    nav: Nav,
) -> Result<Rendered, AppError> {
    page(&state, Route::Experience, nav)
}

/// GET /experience/:id
pub async fn experience_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    nav: Nav,
) -> Result<Rendered, AppError> {
    page(&state, Route::experience(id), nav)
}

/// GET /experience/:id/full
pub async fn experience_full_story(
    State(state): State<AppState>,
    Path(id): Path<String>,
    nav: Nav,
) -> Result<Rendered, AppError> {
    let mut mode = ReadingMode::default();
    mode.select_full();
    page(&state, Route::ExperienceDetail { id, mode }, nav)
}

/// GET /projects
pub async fn project_list(State(state): State<AppState>, nav: Nav) -> Result<Rendered, AppError> {
    page(&state, Route::Projects, nav)
}

/// GET /projects/:slug
pub async fn project_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    nav: Nav,
) -> Result<Rendered, AppError> {
    page(&state, Route::project(slug), nav)
}

/// GET /skills
pub async fn skills(State(state): State<AppState>, nav: Nav) -> Result<Rendered, AppError> {
    page(&state, Route::Skills, nav)
}

/// GET /education
pub async fn education(State(state): State<AppState>, nav: Nav) -> Result<Rendered, AppError> {
    page(&state, Route::Education, nav)
}

/// GET /contact
pub async fn contact(State(state): State<AppState>, nav: Nav) -> Result<Rendered, AppError> {
    page(&state, Route::Contact, nav)
}

/// GET /resume
pub async fn resume(State(state): State<AppState>, nav: Nav) -> Result<Rendered, AppError> {
    page(&state, Route::Resume, nav)
}

/// Anything no route or static asset matched.
pub async fn not_found(
    State(state): State<AppState>,
    Nav(nav): Nav,
) -> Result<Rendered, AppError> {
    render_not_found(&state.content, &nav, "Page Not Found")
}

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> Result<Response, AppError> {
    let entries = sitemap_entries(
        &state.content,
        &state.config.site_url,
        Utc::now().date_naive(),
    );
    let xml = render_sitemap(&entries)?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml).into_response())
}
