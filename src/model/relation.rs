use std::collections::HashSet;

use crate::model::genes::GeneId;

/// Unordered gene pair, stored with the smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(GeneId, GeneId);

impl PairKey {
    /// Returns `None` for self-pairs.
    pub fn new(a: GeneId, b: GeneId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self(a, b)),
            std::cmp::Ordering::Greater => Some(Self(b, a)),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Sparse symmetric irreflexive relation over gene ids.
#[derive(Debug, Clone, Default)]
pub struct PairSet {
    pairs: HashSet<PairKey>,
}

impl PairSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the pair was not present before. Self-pairs are never stored.
    pub fn insert(&mut self, a: GeneId, b: GeneId) -> bool {
        match PairKey::new(a, b) {
            Some(key) => self.pairs.insert(key),
            None => false,
        }
    }

    pub fn contains(&self, a: GeneId, b: GeneId) -> bool {
        PairKey::new(a, b).is_some_and(|key| self.pairs.contains(&key))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/relation.rs"]
mod tests;
