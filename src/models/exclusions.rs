//! Names that stay on the list but can never be drawn.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    /// Flip membership of `name` and return whether it is now excluded.
    /// The name does not have to be on the candidate list.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_membership() {
        let mut set = ExclusionSet::default();
        assert!(set.toggle("Bob"));
        assert!(set.is_excluded("Bob"));
        assert!(!set.toggle("Bob"));
        assert!(!set.is_excluded("Bob"));
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut set = ExclusionSet::default();
        set.toggle("Alice");
        set.toggle("Grace");
        let original = set.clone();

        set.toggle("Grace");
        set.toggle("Grace");
        assert_eq!(set, original);

        set.toggle("Henry");
        set.toggle("Henry");
        assert_eq!(set, original);
    }

    #[test]
    fn test_exact_match_only() {
        let mut set = ExclusionSet::default();
        set.toggle("Bob");
        assert!(!set.is_excluded("bob"));
        assert!(!set.is_excluded("Bob "));
    }

    #[test]
    fn test_deserialize_merges_duplicates() {
        let set: ExclusionSet = serde_json::from_str(r#"["Bob","Amy","Bob"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.is_excluded("Amy"));
        assert!(set.is_excluded("Bob"));
    }
}
