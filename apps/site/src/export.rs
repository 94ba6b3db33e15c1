//! Static export: pre-renders every page into a directory any static host can serve.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::content::ContentStore;
use crate::errors::AppError;
use crate::site::pages::{render_not_found, render_route};
use crate::site::paths::{static_paths, Route};
use crate::site::reading::ReadingMode;
use crate::site::sitemap::{render_sitemap, sitemap_entries};
use crate::site::theme::NavState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportReport {
    pub pages: usize,
    pub assets: usize,
}

pub async fn export_site(
    store: &ContentStore,
    config: &Config,
    out_dir: &Path,
) -> Result<ExportReport, AppError> {
    tokio::fs::create_dir_all(out_dir).await?;

    let mut routes = static_paths(store);
    routes.extend(store.experiences.iter().map(|exp| Route::ExperienceDetail {
        id: exp.id.clone(),
        mode: ReadingMode::Full,
    }));

    let mut pages = 0;
    for route in &routes {
        let path = route.path();
        let rendered = render_route(store, route, &NavState::new(path.as_str()))?;
        let file = page_file(out_dir, &path);
        if let Some(parent) = file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&file, rendered.html).await?;
        pages += 1;
    }

    let not_found = render_not_found(store, &NavState::new("/404"), "Page Not Found")?;
    tokio::fs::write(out_dir.join("404.html"), not_found.html).await?;

    let entries = sitemap_entries(store, &config.site_url, Utc::now().date_naive());
    tokio::fs::write(out_dir.join("sitemap.xml"), render_sitemap(&entries)?).await?;

    let assets = if tokio::fs::try_exists(&config.public_dir).await? {
        copy_dir(&config.public_dir, out_dir).await?
    } else {
        warn!(dir = %config.public_dir.display(), "Public directory missing; no assets copied");
        0
    };

    info!(pages, assets, out = %out_dir.display(), "Static export complete");
    Ok(ExportReport { pages, assets })
}

/// `/projects/alyra` -> `<out>/projects/alyra/index.html`
fn page_file(out_dir: &Path, path: &str) -> PathBuf {
    out_dir
        .join(path.trim_start_matches('/'))
        .join("index.html")
}

/// Mirrors `from` into `to`, returning how many files were copied.
async fn copy_dir(from: &Path, to: &Path) -> std::io::Result<usize> {
    let root = from.to_path_buf();
    let entries = tokio::task::spawn_blocking(move || {
        WalkDir::new(&root)
            .into_iter()
            .collect::<Result<Vec<_>, walkdir::Error>>()
    })
    .await?
    .map_err(std::io::Error::from)?;

    let mut copied = 0;
    for entry in entries {
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let target = to.join(relative);
        if entry.file_type().is_dir() {
            tokio::fs::create_dir_all(&target).await?;
        } else {
            tokio::fs::copy(entry.path(), &target).await?;
            copied += 1;
        }
    }

    Ok(copied)
}
