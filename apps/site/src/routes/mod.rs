pub mod contact;
pub mod health;
pub mod nav;
pub mod pages;
pub mod theme;

use axum::{handler::Handler, routing::get, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Unmatched paths fall through to public/, then to the not-found page.
    let assets = ServeDir::new(&state.config.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(pages::not_found.with_state(state.clone()));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/experience", get(pages::experience_list))
        .route("/experience/:id", get(pages::experience_detail))
        .route("/experience/:id/full", get(pages::experience_full_story))
        .route("/projects", get(pages::project_list))
        .route("/projects/:slug", get(pages::project_detail))
        .route("/skills", get(pages::skills))
        .route("/education", get(pages::education))
        .route(
            "/contact",
            get(pages::contact).post(contact::submit_contact),
        )
        .route("/resume", get(pages::resume))
        .route("/sitemap.xml", get(pages::sitemap))
        .route("/theme", get(theme::toggle_theme))
        .fallback_service(assets)
        .with_state(state)
}
