//! Eligibility and the random draw.

use rand::Rng;

use crate::models::{CandidateList, ExclusionSet};

/// One slice of the wheel: an eligible candidate and where it sits in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub list_index: usize,
    pub name: String,
}

/// Outcome of a draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// Position among the eligible slots (the wheel segment)
    pub slot: usize,
    /// Position in the full candidate list
    pub list_index: usize,
    pub name: String,
}

/// Candidates in list order minus excluded values. Duplicates stay separate.
pub fn eligible(candidates: &CandidateList, exclusions: &ExclusionSet) -> Vec<Slot> {
    candidates
        .names()
        .iter()
        .enumerate()
        .filter(|(_, name)| !exclusions.is_excluded(name))
        .map(|(list_index, name)| Slot {
            list_index,
            name: name.clone(),
        })
        .collect()
}

/// Pick one slot with equal probability, or `None` if there is nothing to pick
pub fn draw<R: Rng + ?Sized>(slots: &[Slot], rng: &mut R) -> Option<Draw> {
    if slots.is_empty() {
        return None;
    }
    let slot = rng.random_range(0..slots.len());
    let picked = &slots[slot];
    Some(Draw {
        slot,
        list_index: picked.list_index,
        name: picked.name.clone(),
    })
}
