//! Ordered list of names that can land on the wheel.
//!
//! Entries are always trimmed and never blank. Duplicates are kept: two
//! "Bob" lines are two slices of the wheel.

use feruca::Collator;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::SortDirection;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateList {
    names: Vec<String>,
}

impl CandidateList {
    /// Build a list from raw names, dropping anything blank
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let names = names
            .into_iter()
            .filter_map(|name| {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    None
                } else if trimmed.len() == name.len() {
                    Some(name)
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect();
        Self { names }
    }

    /// Replace the whole list with the non-blank lines of `text`
    pub fn replace_all(&mut self, text: &str) -> &[String] {
        *self = Self::from_names(text.lines().map(str::to_string));
        &self.names
    }

    /// Sort with Unicode collation (CLDR root): accents sort next to their
    /// base letter and case only breaks ties, so the order is total.
    pub fn sort(&mut self, direction: SortDirection) {
        let mut collator = Collator::default();
        match direction {
            SortDirection::Ascending => self
                .names
                .sort_by(|a, b| collator.collate(a.as_str(), b.as_str())),
            SortDirection::Descending => self
                .names
                .sort_by(|a, b| collator.collate(b.as_str(), a.as_str())),
        }
    }

    /// Uniformly permute the list (Fisher-Yates)
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.names.shuffle(rng);
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Remove every entry equal to `name`, returning how many were removed
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.names.len();
        self.names.retain(|entry| entry != name);
        before - self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
