//! Listing cards shared by experience and project pages.

use crate::content::models::{Experience, Project};
use crate::site::paths::{experience_path, project_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub label: &'static str,
    pub href: String,
}

/// Everything a listing card needs, whichever record it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub subtitle: String,
    pub meta: String,
    pub summary: String,
    pub stack: Vec<String>,
    pub href: String,
    pub badge: Option<&'static str>,
    pub logo: Option<String>,
    pub links: Vec<CardLink>,
}

impl From<&Experience> for CardView {
    fn from(exp: &Experience) -> Self {
        Self {
            title: exp.title.clone(),
            subtitle: exp.company.clone(),
            meta: format!("{} · {}", exp.location, exp.timeframe),
            summary: exp.short_description.clone(),
            stack: exp.stack.clone(),
            href: experience_path(&exp.id),
            badge: exp.is_current().then_some("Current"),
            logo: exp.logo.clone(),
            links: Vec::new(),
        }
    }
}

impl From<&Project> for CardView {
    fn from(project: &Project) -> Self {
        let mut links = Vec::new();
        if let Some(live) = non_empty(project.links.live.as_deref()) {
            links.push(CardLink {
                label: "Live Demo",
                href: live.to_string(),
            });
        }
        if let Some(repo) = non_empty(project.links.repo.as_deref()) {
            links.push(CardLink {
                label: "Source",
                href: repo.to_string(),
            });
        }

        Self {
            title: project.title.clone(),
            subtitle: project.category.clone(),
            meta: project.timeframe.clone(),
            summary: project.short_description.clone(),
            stack: project.stack.clone(),
            href: project_path(&project.slug),
            badge: project.featured.then_some("Featured"),
            logo: None,
            links,
        }
    }
}

/// Outbound links are passed through verbatim, but blank ones are dropped.
pub fn non_empty(link: Option<&str>) -> Option<&str> {
    link.filter(|l| !l.trim().is_empty())
}
