//! OPT (Optimal, Belady) replacement policy.
//!
//! On a fault with all frames occupied, evicts the resident page whose next
//! use lies farthest in the future. A page that is never used again counts
//! as infinitely far. Frames are fixed slots: the victim's slot is
//! overwritten in place, so the other pages keep their positions.

use std::num::NonZeroUsize;

use log::trace;

use super::{padded, Replacer};
use crate::common::{PageId, Slot};

/// An OPT eviction policy.
///
/// Borrows the whole reference string to look ahead from the current
/// position. Each eviction scans the remaining suffix once per resident page.
pub struct OptReplacer<'a> {
    /// Occupied slots, in slot order.
    frames: Vec<PageId>,

    /// The full reference string being simulated.
    reference: &'a [PageId],

    capacity: usize,
}

impl<'a> OptReplacer<'a> {
    /// Create a new OPT replacer over `reference`.
    pub fn new(capacity: NonZeroUsize, reference: &'a [PageId]) -> Self {
        let capacity = capacity.get();
        Self {
            frames: Vec::with_capacity(capacity),
            reference,
            capacity,
        }
    }

    /// Offset of the next use of `page` strictly after `position`.
    ///
    /// `None` means the page is never used again.
    fn next_use(&self, position: usize, page: PageId) -> Option<usize> {
        self.reference
            .get(position + 1..)
            .and_then(|future| future.iter().position(|&p| p == page))
    }

    /// Slot index of the page to evict at `position`.
    ///
    /// The farthest next use wins; among pages never used again, the lowest
    /// slot wins.
    fn victim_slot(&self, position: usize) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (slot, &page) in self.frames.iter().enumerate() {
            let distance = self.next_use(position, page).unwrap_or(usize::MAX);
            match best {
                Some((_, farthest)) if distance <= farthest => {}
                _ => best = Some((slot, distance)),
            }
        }
        best.map(|(slot, _)| slot)
    }
}

impl Replacer for OptReplacer<'_> {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.frames.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.frames.contains(&page)
    }

    /// OPT needs no access history; the future decides.
    fn record_access(&mut self, _position: usize, _page: PageId) {}

    fn admit(&mut self, position: usize, page: PageId) -> Option<PageId> {
        debug_assert!(!self.contains(page), "admit called for resident page");

        if !self.is_full() {
            self.frames.push(page);
            return None;
        }

        let slot = self.victim_slot(position)?;
        let victim = std::mem::replace(&mut self.frames[slot], page);
        trace!(
            "OPT step {}: evict {} from slot {} for {}",
            position,
            victim,
            slot,
            page
        );
        Some(victim)
    }

    fn slots(&self) -> Vec<Slot> {
        padded(self.frames.iter().copied(), self.capacity)
    }
}
