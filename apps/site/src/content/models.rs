use serde::{Deserialize, Serialize};

fn default_resume_path() -> String {
    "/resume.pdf".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    pub education: Education,
    /// Narrative paragraphs for the About page.
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default = "default_resume_path")]
    pub resume: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub major: String,
    pub minor: String,
    pub school: String,
    pub graduation_date: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub coursework: Vec<CourseGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseGroup {
    pub title: String,
    pub courses: Vec<String>,
}

/// Anything other than `"current"` is treated as a past position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceStatus {
    Current,
    #[default]
    #[serde(other)]
    Past,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub timeframe: String,
    #[serde(default)]
    pub status: ExperienceStatus,
    pub short_description: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub quick_read: Vec<String>,
    #[serde(default)]
    pub full_story: Option<FullStory>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.status == ExperienceStatus::Current
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FullStory {
    pub problem: String,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub impact: Vec<String>,
    pub learnings: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub timeframe: String,
    pub short_description: String,
    pub problem: String,
    pub solution: String,
    pub role: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub learnings: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectLinks {
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Skills {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub libraries: Vec<String>,
    #[serde(default)]
    pub databases: Vec<String>,
    #[serde(default)]
    pub cloud: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

/// A titled group of skill labels as shown on the Skills page.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup<'a> {
    pub title: &'static str,
    pub skills: Vec<&'a str>,
}

impl Skills {
    /// Display grouping. Frameworks and libraries share one group.
    pub fn categories(&self) -> Vec<SkillGroup<'_>> {
        vec![
            skill_group("Programming Languages", &[&self.languages]),
            skill_group("Frameworks & Libraries", &[&self.frameworks, &self.libraries]),
            skill_group("Databases", &[&self.databases]),
            skill_group("Cloud & DevOps", &[&self.cloud]),
            skill_group("Tools & Technologies", &[&self.tools]),
        ]
    }
}

fn skill_group<'a>(title: &'static str, lists: &[&'a Vec<String>]) -> SkillGroup<'a> {
    SkillGroup {
        title,
        skills: lists
            .iter()
            .flat_map(|list| list.iter().map(String::as_str))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_other_strings_are_past() {
        let status: ExperienceStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, ExperienceStatus::Past);
        let status: ExperienceStatus = serde_json::from_str("\"current\"").unwrap();
        assert_eq!(status, ExperienceStatus::Current);
    }

    #[test]
    fn test_experience_without_full_story() {
        let exp: Experience = serde_json::from_value(serde_json::json!({
            "id": "grader",
            "title": "Grader",
            "company": "Penn State",
            "location": "State College, PA",
            "timeframe": "2023",
            "status": "completed",
            "shortDescription": "Graded things",
            "stack": ["LaTeX"],
            "quickRead": ["Graded 300 exams"]
        }))
        .unwrap();
        assert!(exp.full_story.is_none());
        assert!(exp.logo.is_none());
        assert!(!exp.is_current());
    }

    #[test]
    fn test_project_defaults() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "slug": "malloc-lab",
            "title": "Malloc Lab",
            "category": "Systems",
            "timeframe": "2023",
            "shortDescription": "An allocator",
            "problem": "p",
            "solution": "s",
            "role": "r"
        }))
        .unwrap();
        assert!(!project.featured);
        assert!(project.images.is_empty());
        assert_eq!(project.links, ProjectLinks::default());
    }

    #[test]
    fn test_skill_categories_merge_frameworks_and_libraries() {
        let skills = Skills {
            languages: vec!["Rust".into()],
            frameworks: vec!["Axum".into()],
            libraries: vec!["Serde".into(), "Axum".into()],
            ..Default::default()
        };
        let groups = skills.categories();
        assert_eq!(groups.len(), 5);
        assert_eq!(groups[1].title, "Frameworks & Libraries");
        // Duplicates across lists are kept.
        assert_eq!(groups[1].skills, vec!["Axum", "Serde", "Axum"]);
        assert!(groups[2].skills.is_empty());
    }
}
