//! Dimension tags used as a coarse broad-phase filter
//!
//! A body lives in one or more numbered dimensions. Two bodies are only
//! tested against each other when they share at least one, or when neither
//! has been placed in any dimension at all.

use serde::{Deserialize, Serialize};

/// Dimension tag
pub type Dimension = u32;

/// Sorted set of dimension tags without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionSet {
    tags: Vec<Dimension>,
}

impl DimensionSet {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag, keeping the set sorted; duplicates are ignored
    pub fn add(&mut self, dimension: Dimension) {
        if self.contains(dimension) {
            return;
        }
        self.tags.push(dimension);
        self.tags.sort_unstable();
    }

    /// Remove a tag; returns whether it was present
    pub fn remove(&mut self, dimension: Dimension) -> bool {
        match self.tags.iter().position(|&tag| tag == dimension) {
            Some(index) => {
                self.tags.swap_remove(index);
                self.tags.sort_unstable();
                true
            }
            None => false,
        }
    }

    /// Whether the tag is present
    pub fn contains(&self, dimension: Dimension) -> bool {
        self.tags.contains(&dimension)
    }

    /// Whether two sets share a tag (two empty sets count as sharing)
    pub fn shares(&self, other: &DimensionSet) -> bool {
        if self.tags.is_empty() && other.tags.is_empty() {
            return true;
        }
        self.tags.iter().any(|tag| other.tags.contains(tag))
    }

    /// Tags in ascending order
    pub fn as_slice(&self) -> &[Dimension] {
        &self.tags
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the set has no tags
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl FromIterator<Dimension> for DimensionSet {
    fn from_iter<I: IntoIterator<Item = Dimension>>(iter: I) -> Self {
        let mut set = Self::new();
        for dimension in iter {
            set.add(dimension);
        }
        set
    }
}
