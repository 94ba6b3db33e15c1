pub mod dedup;
pub mod lookup;
pub mod models;
pub mod ordering;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::content::dedup::duplicate_keys;
use crate::content::lookup::Keyed;
use crate::content::models::{Experience, Profile, Project, Skills};

pub const PROFILE_FILE: &str = "personal.json";
pub const EXPERIENCES_FILE: &str = "experiences.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const SKILLS_FILE: &str = "skills.json";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate key '{key}' in {collection}")]
    DuplicateKey {
        collection: &'static str,
        key: String,
    },
}

/// Every piece of site content, loaded once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub profile: Profile,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Skills,
}

impl ContentStore {
    /// Builds a store from already-parsed collections, rejecting duplicate keys.
    pub fn new(
        profile: Profile,
        experiences: Vec<Experience>,
        projects: Vec<Project>,
        skills: Skills,
    ) -> Result<Self, ContentError> {
        ensure_unique("experiences", &experiences)?;
        ensure_unique("projects", &projects)?;

        Ok(Self {
            profile,
            experiences,
            projects,
            skills,
        })
    }

    /// Reads the four JSON collections from `dir`.
    pub async fn load(dir: &Path) -> Result<Self, ContentError> {
        let profile: Profile = read_json(&dir.join(PROFILE_FILE)).await?;
        let experiences: Vec<Experience> = read_json(&dir.join(EXPERIENCES_FILE)).await?;
        let projects: Vec<Project> = read_json(&dir.join(PROJECTS_FILE)).await?;
        let skills: Skills = read_json(&dir.join(SKILLS_FILE)).await?;

        let store = Self::new(profile, experiences, projects, skills)?;
        info!(
            dir = %dir.display(),
            experiences = store.experiences.len(),
            projects = store.projects.len(),
            "Content store loaded"
        );
        Ok(store)
    }
}

fn ensure_unique<T: Keyed>(collection: &'static str, records: &[T]) -> Result<(), ContentError> {
    match duplicate_keys(records).first() {
        Some(key) => Err(ContentError::DuplicateKey {
            collection,
            key: key.to_string(),
        }),
        None => Ok(()),
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::content::models::{Education, ExperienceStatus, FullStory, ProjectLinks};

    pub fn profile() -> Profile {
        Profile {
            name: "Ada Example".into(),
            title: "Software Engineer".into(),
            tagline: "Building <useful> things".into(),
            location: "Pittsburgh, PA".into(),
            email: "ada@example.com".into(),
            phone: "+1 555 0100".into(),
            github: "https://github.com/ada".into(),
            linkedin: String::new(),
            education: Education {
                degree: "B.S. Computer Science".into(),
                major: "Computer Science".into(),
                minor: "Economics".into(),
                school: "State University".into(),
                graduation_date: "May 2025".into(),
                achievements: vec!["Dean's List".into()],
                activities: vec![],
                coursework: vec![],
            },
            about: vec!["I like systems.".into()],
            photo: None,
            resume: "/resume.pdf".into(),
        }
    }

    pub fn experience(id: &str, current: bool) -> Experience {
        Experience {
            id: id.into(),
            title: format!("Engineer {id}"),
            company: "Acme".into(),
            location: "Remote".into(),
            timeframe: "2024".into(),
            status: if current {
                ExperienceStatus::Current
            } else {
                ExperienceStatus::Past
            },
            short_description: format!("Worked on {id}"),
            stack: vec!["Rust".into(), "Postgres".into()],
            quick_read: vec![format!("Shipped {id}")],
            full_story: Some(FullStory {
                problem: format!("Problem at {id}"),
                actions: vec!["Measured".into(), "Fixed".into()],
                impact: vec!["Faster by 40%".into()],
                learnings: "Measure first".into(),
            }),
            logo: None,
        }
    }

    pub fn project(slug: &str, featured: bool) -> Project {
        Project {
            slug: slug.into(),
            title: format!("Project {slug}"),
            category: "Systems".into(),
            timeframe: "2023".into(),
            short_description: format!("About {slug}"),
            problem: "Problem".into(),
            solution: "Solution".into(),
            role: "Sole developer".into(),
            highlights: vec!["Highlight".into()],
            outcomes: vec!["Outcome".into()],
            stack: vec!["C".into()],
            images: vec![],
            links: ProjectLinks {
                live: None,
                repo: Some(format!("https://github.com/ada/{slug}")),
            },
            featured,
            learnings: "Learned".into(),
        }
    }

    pub fn store() -> ContentStore {
        let mut without_story = experience("psu-math-grader", false);
        without_story.full_story = None;

        ContentStore::new(
            profile(),
            vec![
                experience("mu-sigma-intern", false),
                experience("augle-ai-2024", true),
                without_story,
            ],
            vec![
                project("nexthire", true),
                project("malloc-lab", false),
                project("alyra", true),
            ],
            Skills {
                languages: vec!["Rust".into(), "C".into()],
                ..Default::default()
            },
        )
        .expect("fixture keys are unique")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures;

    fn bundled_content_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("content")
    }

    #[tokio::test]
    async fn test_load_bundled_content() {
        let store = ContentStore::load(&bundled_content_dir()).await.unwrap();
        assert!(!store.experiences.is_empty());
        assert!(!store.projects.is_empty());
        assert!(!store.profile.name.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentStore::load(dir.path()).await.unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        for file in [PROFILE_FILE, EXPERIENCES_FILE, PROJECTS_FILE, SKILLS_FILE] {
            std::fs::copy(bundled_content_dir().join(file), dir.path().join(file)).unwrap();
        }
        std::fs::write(dir.path().join(PROJECTS_FILE), "[{\"slug\": ").unwrap();

        let err = ContentStore::load(dir.path()).await.unwrap_err();
        match err {
            ContentError::Parse { path, .. } => assert!(path.ends_with(PROJECTS_FILE)),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_experience_id_rejected() {
        let err = ContentStore::new(
            fixtures::profile(),
            vec![
                fixtures::experience("augle-ai-2024", true),
                fixtures::experience("augle-ai-2024", false),
            ],
            vec![],
            Skills::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ContentError::DuplicateKey { collection: "experiences", ref key } if key == "augle-ai-2024"
        ));
    }
}
