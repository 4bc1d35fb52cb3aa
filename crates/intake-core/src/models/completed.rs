//! The set of steps the user has passed through.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Step ids the user has successfully passed via `advance()`.
///
/// Sequential use always produces `{1..k}`. Contiguity is not enforced when a
/// set is loaded from storage, so a tampered set such as `{1, 3}` is
/// representable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CompletedSteps(BTreeSet<u32>);

impl CompletedSteps {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a step as completed. Returns `false` if it already was.
    pub fn insert(&mut self, id: u32) -> bool {
        self.0.insert(id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Highest completed step id.
    pub fn max(&self) -> Option<u32> {
        self.0.last().copied()
    }

    /// Length of the gap-free prefix `{1..k}`.
    pub fn contiguous_prefix(&self) -> u32 {
        let mut k = 0;
        while self.0.contains(&(k + 1)) {
            k += 1;
        }
        k
    }

    /// Whether the set is exactly `{1..k}` for some `k`.
    pub fn is_prefix_closed(&self) -> bool {
        self.contiguous_prefix() as usize == self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u32> for CompletedSteps {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
