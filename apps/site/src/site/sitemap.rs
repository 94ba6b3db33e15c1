use askama::Template;
use chrono::NaiveDate;

use crate::content::ContentStore;
use crate::errors::AppError;
use crate::site::paths::{static_paths, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: &'static str,
    pub priority: &'static str,
}

#[derive(Template)]
#[template(path = "sitemap.xml")]
struct Sitemap<'a> {
    entries: &'a [SitemapEntry],
}

/// One entry per pre-rendered page. The home page is weighted highest and
/// expected to change weekly; everything else monthly.
pub fn sitemap_entries(store: &ContentStore, base_url: &str, today: NaiveDate) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let lastmod = today.format("%Y-%m-%d").to_string();

    static_paths(store)
        .into_iter()
        .map(|route| {
            let is_home = route == Route::Home;
            let path = route.path();
            SitemapEntry {
                loc: if is_home {
                    base.to_string()
                } else {
                    format!("{base}{path}")
                },
                lastmod: lastmod.clone(),
                changefreq: if is_home { "weekly" } else { "monthly" },
                priority: if is_home { "1.0" } else { "0.8" },
            }
        })
        .collect()
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> Result<String, AppError> {
    Ok(Sitemap { entries }.render()?)
}
