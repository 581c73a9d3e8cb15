//! One-shot "animate on scroll" tracking
//!
//! Each element is observed until it first intersects the viewport. At that
//! point it is scheduled for reveal and unobserved, so it can never fire
//! again. Reveals in one intersection batch are staggered by their position
//! in the batch.

use std::collections::HashSet;
use std::time::Duration;

use crate::types::ItemId;

/// One observation delivered by the intersection source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub id: ItemId,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(id: impl Into<ItemId>, is_intersecting: bool) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
        }
    }
}

/// An element to reveal, after `delay`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStep {
    pub id: ItemId,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    stagger: Duration,
    observed: HashSet<ItemId>,
    revealed: HashSet<ItemId>,
}

impl RevealTracker {
    pub fn new(stagger: Duration) -> Self {
        Self {
            stagger,
            observed: HashSet::new(),
            revealed: HashSet::new(),
        }
    }

    /// Start observing `id`. Already revealed elements are not observed again.
    pub fn observe(&mut self, id: ItemId) -> bool {
        if self.revealed.contains(&id) {
            return false;
        }
        self.observed.insert(id)
    }

    pub fn observe_all<I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = ItemId>,
    {
        ids.into_iter().filter(|id| self.observe(id.clone())).count()
    }

    pub fn is_observed(&self, id: &ItemId) -> bool {
        self.observed.contains(id)
    }

    pub fn is_revealed(&self, id: &ItemId) -> bool {
        self.revealed.contains(id)
    }

    pub fn pending(&self) -> usize {
        self.observed.len()
    }

    /// Process a batch of intersection entries
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry]) -> Vec<RevealStep> {
        let mut steps = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            if !entry.is_intersecting || !self.observed.remove(&entry.id) {
                continue;
            }
            self.revealed.insert(entry.id.clone());
            steps.push(RevealStep {
                id: entry.id.clone(),
                delay: self
                    .stagger
                    .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX)),
            });
        }
        steps
    }
}
