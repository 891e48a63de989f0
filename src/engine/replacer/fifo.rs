//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};
use std::num::NonZeroUsize;

use log::trace;

use super::{padded, Replacer};
use crate::common::{PageId, Slot};

/// A FIFO eviction policy.
///
/// Evicts pages in the order they were admitted. Hits do not reorder the
/// queue, so a heavily used page is evicted as soon as it is the oldest.
pub struct FifoReplacer {
    /// Resident pages in admission order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    in_queue: HashSet<PageId>,

    capacity: usize,
}

impl FifoReplacer {
    /// Create a new FIFO replacer holding at most `capacity` pages.
    pub fn new(capacity: NonZeroUsize) -> Self {
        let capacity = capacity.get();
        Self {
            queue: VecDeque::with_capacity(capacity),
            in_queue: HashSet::with_capacity(capacity),
            capacity,
        }
    }
}

impl Replacer for FifoReplacer {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.in_queue.contains(&page)
    }

    /// FIFO ignores accesses; only admission order matters.
    fn record_access(&mut self, _position: usize, _page: PageId) {}

    fn admit(&mut self, position: usize, page: PageId) -> Option<PageId> {
        debug_assert!(!self.contains(page), "admit called for resident page");

        let victim = if self.is_full() {
            self.queue.pop_front()
        } else {
            None
        };
        if let Some(victim) = victim {
            self.in_queue.remove(&victim);
            trace!("FIFO step {}: evict {} for {}", position, victim, page);
        }

        self.queue.push_back(page);
        self.in_queue.insert(page);
        victim
    }

    fn slots(&self) -> Vec<Slot> {
        padded(self.queue.iter().copied(), self.capacity)
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

    #[test]
    fn test_fifo_basic() {
        let mut replacer = FifoReplacer::new(cap(3));

        // Fill frames 1, 2, 3
        assert_eq!(replacer.admit(0, p(1)), None);
        assert_eq!(replacer.admit(1, p(2)), None);
        assert_eq!(replacer.admit(2, p(3)), None);
        assert!(replacer.is_full());

        // Should evict in FIFO order
        assert_eq!(replacer.admit(3, p(4)), Some(p(1)));
        assert_eq!(replacer.admit(4, p(5)), Some(p(2)));
        assert_eq!(
            replacer.slots(),
            vec![Some(p(3)), Some(p(4)), Some(p(5))]
        );
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut replacer = FifoReplacer::new(cap(2));

        replacer.admit(0, p(0));
        replacer.admit(1, p(1));
        replacer.record_access(2, p(0)); // Access again - should NOT reorder

        // FIFO: page 0 was first, should be evicted first
        assert_eq!(replacer.admit(3, p(2)), Some(p(0)));
        assert!(!replacer.contains(p(0)));
        assert!(replacer.contains(p(1)));
    }

    #[test]
    fn test_fifo_slots_padded() {
        let mut replacer = FifoReplacer::new(cap(4));
        replacer.admit(0, p(9));

        assert_eq!(replacer.slots(), vec![Some(p(9)), None, None, None]);
        assert_eq!(replacer.len(), 1);
    }

    #[test]
    fn test_fifo_single_frame() {
        let mut replacer = FifoReplacer::new(NonZeroUsize::MIN);
        assert_eq!(replacer.admit(0, p(1)), None);
        assert_eq!(replacer.len(), replacer.capacity());
        assert_eq!(replacer.slots(), vec![Some(p(1))]);

        assert_eq!(replacer.admit(1, p(2)), Some(p(1)));
        assert_eq!(replacer.slots(), vec![Some(p(2))]);
    }
}
