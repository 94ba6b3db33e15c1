use crate::content::models::{Experience, Project};

/// Splits projects into (featured, other), keeping source order inside each half.
pub fn partition_featured(projects: &[Project]) -> (Vec<&Project>, Vec<&Project>) {
    projects.iter().partition(|p| p.featured)
}

/// Current positions first, everything else in source order.
///
/// Only the "is current" bit is compared, so this is a stable partition rather
/// than a chronological sort.
pub fn current_first(experiences: &[Experience]) -> Vec<&Experience> {
    let (mut current, past): (Vec<&Experience>, Vec<&Experience>) =
        experiences.iter().partition(|e| e.is_current());
    current.extend(past);
    current
}
