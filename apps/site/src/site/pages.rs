//! Page rendering: content records in, HTML out.
//!
//! Rendering is a pure function of the content store, the route and the
//! per-request header state, so the HTTP handlers and the static exporter share
//! it. A lookup miss is not an error here; it renders the not-found page.

use askama::Template;
use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use tracing::debug;

use crate::content::lookup::find_by_key;
use crate::content::models::{Education, Experience, FullStory, Profile, Project, SkillGroup};
use crate::content::ordering::{current_first, partition_featured};
use crate::content::ContentStore;
use crate::errors::AppError;
use crate::site::cards::{non_empty, CardView};
use crate::site::contact::ContactSession;
use crate::site::paths::Route;
use crate::site::reading::ReadingMode;
use crate::site::theme::{NavLink, NavState};

/// A rendered page and the status it should be served with.
#[derive(Debug)]
pub struct Rendered {
    pub status: StatusCode,
    pub html: String,
}

impl Rendered {
    fn ok(html: String) -> Self {
        Self {
            status: StatusCode::OK,
            html,
        }
    }
}

/// Shared header/footer data for every page.
pub struct Layout<'a> {
    pub title: String,
    pub description: String,
    pub profile: &'a Profile,
    pub theme: &'static str,
    pub next_theme: &'static str,
    pub links: Vec<NavLink>,
    pub menu_open: bool,
    pub theme_href: String,
    pub menu_href: String,
    pub github: Option<&'a str>,
    pub linkedin: Option<&'a str>,
    pub year: i32,
}

impl<'a> Layout<'a> {
    fn new(
        profile: &'a Profile,
        nav: &NavState,
        page: Option<&str>,
        description: impl Into<String>,
    ) -> Self {
        let title = match page {
            Some(page) => format!("{page} - {}", profile.name),
            None => format!("{} - {}", profile.name, profile.title),
        };

        Self {
            title,
            description: description.into(),
            profile,
            theme: nav.theme.as_str(),
            next_theme: nav.theme.toggled().as_str(),
            links: nav.links(),
            menu_open: nav.menu_open,
            theme_href: nav.theme_toggle_href(),
            menu_href: nav.menu_toggle_href(),
            github: non_empty(Some(profile.github.as_str())),
            linkedin: non_empty(Some(profile.linkedin.as_str())),
            year: Utc::now().year(),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomePage<'a> {
    layout: Layout<'a>,
    profile: &'a Profile,
    featured: Vec<CardView>,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutPage<'a> {
    layout: Layout<'a>,
    profile: &'a Profile,
}

#[derive(Template)]
#[template(path = "experience_list.html")]
struct ExperienceListPage<'a> {
    layout: Layout<'a>,
    cards: Vec<CardView>,
}

#[derive(Template)]
#[template(path = "experience_detail.html")]
struct ExperienceDetailPage<'a> {
    layout: Layout<'a>,
    experience: &'a Experience,
    full: bool,
    full_story: Option<&'a FullStory>,
    quick_href: String,
    full_href: String,
}

#[derive(Template)]
#[template(path = "project_list.html")]
struct ProjectListPage<'a> {
    layout: Layout<'a>,
    featured: Vec<CardView>,
    other: Vec<CardView>,
}

#[derive(Template)]
#[template(path = "project_detail.html")]
struct ProjectDetailPage<'a> {
    layout: Layout<'a>,
    project: &'a Project,
    live: Option<&'a str>,
    repo: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "skills.html")]
struct SkillsPage<'a> {
    layout: Layout<'a>,
    groups: Vec<SkillGroup<'a>>,
}

#[derive(Template)]
#[template(path = "education.html")]
struct EducationPage<'a> {
    layout: Layout<'a>,
    education: &'a Education,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactPage<'a> {
    layout: Layout<'a>,
    profile: &'a Profile,
    session: &'a ContactSession,
    email_href: Option<String>,
    phone_href: Option<String>,
    toast_kind: &'static str,
    toast_message: &'static str,
    name_error: Option<&'static str>,
    email_error: Option<&'static str>,
    message_error: Option<&'static str>,
}

#[derive(Template)]
#[template(path = "resume.html")]
struct ResumePage<'a> {
    layout: Layout<'a>,
    resume: &'a str,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundPage<'a> {
    layout: Layout<'a>,
}

pub fn render_route(
    store: &ContentStore,
    route: &Route,
    nav: &NavState,
) -> Result<Rendered, AppError> {
    let profile = &store.profile;

    let html = match route {
        Route::Home => HomePage {
            layout: Layout::new(profile, nav, None, profile.tagline.clone()),
            profile,
            featured: partition_featured(&store.projects)
                .0
                .into_iter()
                .map(CardView::from)
                .collect(),
        }
        .render()?,
        Route::About => AboutPage {
            layout: Layout::new(
                profile,
                nav,
                Some("About"),
                format!("Learn more about {}.", profile.name),
            ),
            profile,
        }
        .render()?,
        Route::Experience => ExperienceListPage {
            layout: Layout::new(
                profile,
                nav,
                Some("Experience"),
                format!("Professional experience of {}.", profile.name),
            ),
            cards: current_first(&store.experiences)
                .into_iter()
                .map(CardView::from)
                .collect(),
        }
        .render()?,
        Route::ExperienceDetail { id, mode } => {
            return render_experience(store, id, *mode, nav);
        }
        Route::Projects => {
            let (featured, other) = partition_featured(&store.projects);
            ProjectListPage {
                layout: Layout::new(
                    profile,
                    nav,
                    Some("Projects"),
                    format!("Projects built by {}.", profile.name),
                ),
                featured: featured.into_iter().map(CardView::from).collect(),
                other: other.into_iter().map(CardView::from).collect(),
            }
            .render()?
        }
        Route::ProjectDetail { slug } => return render_project(store, slug, nav),
        Route::Skills => SkillsPage {
            layout: Layout::new(
                profile,
                nav,
                Some("Skills"),
                format!("Technical skills of {}.", profile.name),
            ),
            groups: store.skills.categories(),
        }
        .render()?,
        Route::Education => EducationPage {
            layout: Layout::new(
                profile,
                nav,
                Some("Education"),
                format!("{} at {}.", profile.education.degree, profile.education.school),
            ),
            education: &profile.education,
        }
        .render()?,
        Route::Contact => return render_contact(store, nav, &ContactSession::default()),
        Route::Resume => ResumePage {
            layout: Layout::new(
                profile,
                nav,
                Some("Resume"),
                format!("View and download the resume of {}.", profile.name),
            ),
            resume: &profile.resume,
        }
        .render()?,
    };

    Ok(Rendered::ok(html))
}

fn render_experience(
    store: &ContentStore,
    id: &str,
    mode: ReadingMode,
    nav: &NavState,
) -> Result<Rendered, AppError> {
    let Some(experience) = find_by_key(&store.experiences, id) else {
        debug!(id, "Experience lookup miss");
        return render_not_found(store, nav, "Experience Not Found");
    };

    let page = ExperienceDetailPage {
        layout: Layout::new(
            &store.profile,
            nav,
            Some(format!("{} at {}", experience.title, experience.company).as_str()),
            experience.short_description.clone(),
        ),
        experience,
        full: mode.is_full(),
        full_story: experience.full_story.as_ref(),
        quick_href: Route::experience(id).path(),
        full_href: Route::ExperienceDetail {
            id: id.to_string(),
            mode: ReadingMode::Full,
        }
        .path(),
    };
    Ok(Rendered::ok(page.render()?))
}

fn render_project(store: &ContentStore, slug: &str, nav: &NavState) -> Result<Rendered, AppError> {
    let Some(project) = find_by_key(&store.projects, slug) else {
        debug!(slug, "Project lookup miss");
        return render_not_found(store, nav, "Project Not Found");
    };

    let page = ProjectDetailPage {
        layout: Layout::new(
            &store.profile,
            nav,
            Some(project.title.as_str()),
            project.short_description.clone(),
        ),
        project,
        live: non_empty(project.links.live.as_deref()),
        repo: non_empty(project.links.repo.as_deref()),
    };
    Ok(Rendered::ok(page.render()?))
}

/// Renders the contact page around an existing submission session.
pub fn render_contact(
    store: &ContentStore,
    nav: &NavState,
    session: &ContactSession,
) -> Result<Rendered, AppError> {
    let profile = &store.profile;
    let (toast_kind, toast_message) = match &session.notification {
        Some(n) => (n.kind.as_str(), n.message),
        None => ("", ""),
    };

    let page = ContactPage {
        layout: Layout::new(
            profile,
            nav,
            Some("Contact"),
            format!("Get in touch with {}.", profile.name),
        ),
        profile,
        session,
        email_href: non_empty(Some(profile.email.as_str())).map(|e| format!("mailto:{e}")),
        phone_href: non_empty(Some(profile.phone.as_str())).map(|p| format!("tel:{p}")),
        toast_kind,
        toast_message,
        name_error: session.error_for("name"),
        email_error: session.error_for("email"),
        message_error: session.error_for("message"),
    };
    Ok(Rendered::ok(page.render()?))
}

/// The single not-found presentation for unknown paths and unknown keys alike.
/// Only the document title differs.
pub fn render_not_found(
    store: &ContentStore,
    nav: &NavState,
    title: &'static str,
) -> Result<Rendered, AppError> {
    let page = NotFoundPage {
        layout: Layout::new(
            &store.profile,
            nav,
            Some(title),
            "The page you are looking for does not exist.",
        ),
    };
    Ok(Rendered {
        status: StatusCode::NOT_FOUND,
        html: page.render()?,
    })
}
