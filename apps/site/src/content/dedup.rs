use std::collections::HashSet;

use crate::content::lookup::Keyed;

/// Returns each key that appears more than once, in order of its second sighting.
pub fn duplicate_keys<T: Keyed>(collection: &[T]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for key in collection.iter().map(Keyed::key) {
        if !seen.insert(key) && reported.insert(key) {
            duplicates.push(key);
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::project;

    #[test]
    fn test_no_duplicates() {
        let projects = vec![project("a", false), project("b", true)];
        assert!(duplicate_keys(&projects).is_empty());
    }

    #[test]
    fn test_duplicate_reported_once() {
        let projects = vec![
            project("a", false),
            project("b", true),
            project("a", true),
            project("a", false),
            project("b", false),
        ];
        assert_eq!(duplicate_keys(&projects), vec!["a", "b"]);
    }
}
