//! LRU (Least Recently Used) replacement policy.
//!
//! Resident pages are kept in a list in admission order: eviction removes by
//! value and admission appends at the end. The list is never re-sorted by
//! recency; recency only drives the choice of victim.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use log::trace;

use super::{padded, Replacer};
use crate::common::{PageId, Slot};

/// An LRU eviction policy.
///
/// # Invariant
/// The keys of `last_access` are exactly the pages in `frames`.
pub struct LruReplacer {
    /// Resident pages in insertion-then-removal order.
    frames: Vec<PageId>,

    /// Position of each resident page's most recent access.
    last_access: HashMap<PageId, usize>,

    capacity: usize,
}

impl LruReplacer {
    /// Create a new LRU replacer holding at most `capacity` pages.
    pub fn new(capacity: NonZeroUsize) -> Self {
        let capacity = capacity.get();
        Self {
            frames: Vec::with_capacity(capacity),
            last_access: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    /// Pick the least recently used resident page.
    ///
    /// Ties on recency go to the page that comes first in frame order.
    ///
    /// # Panics
    /// Panics if a resident page has no recorded access.
    fn victim(&self) -> Option<PageId> {
        let mut best: Option<(PageId, usize)> = None;
        for &page in &self.frames {
            let recency = self.last_access[&page];
            match best {
                Some((_, least)) if recency >= least => {}
                _ => best = Some((page, recency)),
            }
        }
        best.map(|(page, _)| page)
    }
}

impl Replacer for LruReplacer {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.frames.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.last_access.contains_key(&page)
    }

    fn record_access(&mut self, position: usize, page: PageId) {
        debug_assert!(self.contains(page), "access recorded for non-resident page");
        self.last_access.insert(page, position);
    }

    fn admit(&mut self, position: usize, page: PageId) -> Option<PageId> {
        debug_assert!(!self.contains(page), "admit called for resident page");

        let victim = if self.is_full() { self.victim() } else { None };
        if let Some(victim) = victim {
            self.frames.retain(|&resident| resident != victim);
            self.last_access.remove(&victim);
            trace!("LRU step {}: evict {} for {}", position, victim, page);
        }

        self.frames.push(page);
        self.last_access.insert(page, position);
        victim
    }

    fn slots(&self) -> Vec<Slot> {
        padded(self.frames.iter().copied(), self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: i64) -> PageId {
        PageId::new(id)
    }

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    /// Admit or touch `page` the way the engine does.
    fn access(replacer: &mut LruReplacer, position: usize, page: PageId) -> Option<PageId> {
        let evicted = if replacer.contains(page) {
            None
        } else {
            replacer.admit(position, page)
        };
        replacer.record_access(position, page);
        evicted
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut replacer = LruReplacer::new(cap(3));
        access(&mut replacer, 0, p(1));
        access(&mut replacer, 1, p(2));
        access(&mut replacer, 2, p(3));
        access(&mut replacer, 3, p(1));
        access(&mut replacer, 4, p(2));

        assert_eq!(access(&mut replacer, 5, p(4)), Some(p(3)));
    }

    #[test]
    fn test_lru_order_not_resorted() {
        let mut replacer = LruReplacer::new(cap(3));
        access(&mut replacer, 0, p(1));
        access(&mut replacer, 1, p(2));
        access(&mut replacer, 2, p(3));
        access(&mut replacer, 3, p(1)); // hit: 1 is now most recent

        // Victim is 2; 4 is appended after the remaining pages.
        assert_eq!(access(&mut replacer, 4, p(4)), Some(p(2)));
        assert_eq!(
            replacer.slots(),
            vec![Some(p(1)), Some(p(3)), Some(p(4))]
        );
    }

    #[test]
    fn test_lru_recency_tracks_residents() {
        let mut replacer = LruReplacer::new(cap(2));
        access(&mut replacer, 0, p(1));
        access(&mut replacer, 1, p(2));
        access(&mut replacer, 2, p(3));

        assert_eq!(replacer.last_access.len(), replacer.frames.len());
        for page in &replacer.frames {
            assert!(replacer.last_access.contains_key(page));
        }
        assert!(!replacer.last_access.contains_key(&p(1)));
    }

    #[test]
    fn test_lru_tie_breaks_on_frame_order() {
        let mut replacer = LruReplacer::new(cap(3));
        access(&mut replacer, 0, p(7));
        access(&mut replacer, 1, p(8));
        access(&mut replacer, 2, p(9));

        // Force coinciding recency values.
        replacer.last_access.insert(p(8), 0);
        replacer.last_access.insert(p(9), 0);
        replacer.last_access.insert(p(7), 5);

        assert_eq!(replacer.victim(), Some(p(8)));
    }

    #[test]
    #[should_panic]
    fn test_lru_victim_requires_recency_entry() {
        let mut replacer = LruReplacer::new(cap(2));
        access(&mut replacer, 0, p(1));
        access(&mut replacer, 1, p(2));

        // Break the frames/last_access invariant.
        replacer.last_access.remove(&p(1));
        replacer.victim();
    }

    #[test]
    fn test_lru_single_frame() {
        let mut replacer = LruReplacer::new(NonZeroUsize::MIN);
        assert_eq!(access(&mut replacer, 0, p(1)), None);
        assert_eq!(replacer.len(), replacer.capacity());
        assert_eq!(replacer.slots(), vec![Some(p(1))]);
        assert_eq!(access(&mut replacer, 1, p(1)), None);
        assert_eq!(access(&mut replacer, 2, p(2)), Some(p(1)));
        assert_eq!(replacer.slots(), vec![Some(p(2))]);
    }
}
