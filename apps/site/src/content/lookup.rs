//! Key-based lookup over content collections.
//!
//! Collections hold single digits to low tens of records, so a linear scan is
//! all a lookup needs. A miss is an ordinary `None`, never an error.

use crate::content::models::{Experience, Project};

/// A record addressable by a unique string key within its collection.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Experience {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Project {
    fn key(&self) -> &str {
        &self.slug
    }
}

/// Returns the first record whose key equals `key` exactly.
pub fn find_by_key<'a, T: Keyed>(collection: &'a [T], key: &str) -> Option<&'a T> {
    collection.iter().find(|record| record.key() == key)
}

/// Every record's key, in collection order.
pub fn keys<T: Keyed>(collection: &[T]) -> Vec<&str> {
    collection.iter().map(Keyed::key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::{experience, project};
    use std::collections::HashSet;

    #[test]
    fn test_every_key_resolves_to_its_record() {
        let projects = vec![
            project("alyra", true),
            project("nexthire", false),
            project("cpu-scheduler", true),
        ];
        for p in &projects {
            let found = find_by_key(&projects, &p.slug).unwrap();
            assert!(std::ptr::eq(found, p));
        }
    }

    #[test]
    fn test_unknown_key_is_none() {
        let experiences = vec![experience("augle-ai-2024", true)];
        assert!(find_by_key(&experiences, "augle-ai-2025").is_none());
        assert!(find_by_key(&experiences, "").is_none());
        // Exact match only.
        assert!(find_by_key(&experiences, "Augle-AI-2024").is_none());
        assert!(find_by_key::<Experience>(&[], "anything").is_none());
    }

    #[test]
    fn test_keys_cover_collection_exactly_once() {
        let experiences = vec![
            experience("mu-sigma-intern", false),
            experience("augle-ai-2024", true),
            experience("psu-math-grader", false),
        ];
        let listed = keys(&experiences);
        assert_eq!(listed.len(), experiences.len());

        let listed: HashSet<&str> = listed.into_iter().collect();
        let expected: HashSet<&str> = experiences.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_keys_of_empty_collection() {
        assert!(keys::<Project>(&[]).is_empty());
    }
}
