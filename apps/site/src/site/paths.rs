//! The navigation surface: every logical page and its URL path.

use crate::content::lookup::keys;
use crate::content::ContentStore;
use crate::site::reading::ReadingMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Experience,
    ExperienceDetail { id: String, mode: ReadingMode },
    Projects,
    ProjectDetail { slug: String },
    Skills,
    Education,
    Contact,
    Resume,
}

/// Parameterless pages, in navigation order.
pub const STATIC_ROUTES: &[Route] = &[
    Route::Home,
    Route::About,
    Route::Experience,
    Route::Projects,
    Route::Skills,
    Route::Education,
    Route::Contact,
    Route::Resume,
];

impl Route {
    pub fn experience(id: impl Into<String>) -> Self {
        Route::ExperienceDetail {
            id: id.into(),
            mode: ReadingMode::Quick,
        }
    }

    pub fn project(slug: impl Into<String>) -> Self {
        Route::ProjectDetail { slug: slug.into() }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Experience => "/experience".to_string(),
            Route::ExperienceDetail { id, mode } => match mode {
                ReadingMode::Quick => experience_path(id),
                ReadingMode::Full => format!("{}/full", experience_path(id)),
            },
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail { slug } => project_path(slug),
            Route::Skills => "/skills".to_string(),
            Route::Education => "/education".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Resume => "/resume".to_string(),
        }
    }
}

pub fn experience_path(id: &str) -> String {
    format!("/experience/{id}")
}

pub fn project_path(slug: &str) -> String {
    format!("/projects/{slug}")
}

/// Every page worth pre-rendering: static pages, then one page per experience
/// id, then one per project slug.
pub fn static_paths(store: &ContentStore) -> Vec<Route> {
    let experiences = keys(&store.experiences).into_iter().map(Route::experience);
    let projects = keys(&store.projects).into_iter().map(Route::project);

    STATIC_ROUTES
        .iter()
        .cloned()
        .chain(experiences)
        .chain(projects)
        .collect()
}
