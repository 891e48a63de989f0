//! Page replacement policy implementations (replacers).
//!
//! Currently implements:
//! - [`FifoReplacer`] - First-In-First-Out
//! - [`LruReplacer`] - Least Recently Used
//! - [`OptReplacer`] - Optimal (farthest next use)
//!
//! Each replacer owns the resident set for one simulation run. The engine
//! drives them through the [`Replacer`] trait: the step loop is shared and
//! only the bookkeeping and the victim choice differ.

mod fifo;
mod lru;
mod opt;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use opt::OptReplacer;

use std::num::NonZeroUsize;

use crate::common::{PageId, Slot};
use crate::engine::Policy;

/// Resident-set bookkeeping for one replacement policy.
pub trait Replacer {
    /// Maximum number of resident pages.
    fn capacity(&self) -> usize;

    /// Number of resident pages.
    fn len(&self) -> usize;

    /// Whether `page` is currently resident.
    fn contains(&self, page: PageId) -> bool;

    /// Record an access at `position` in the reference string.
    ///
    /// Called for every access, hit or fault, after any admission.
    fn record_access(&mut self, position: usize, page: PageId);

    /// Admit a non-resident page, evicting one resident page if full.
    ///
    /// Returns the evicted page, if any.
    fn admit(&mut self, position: usize, page: PageId) -> Option<PageId>;

    /// Resident pages in policy order, padded with `None` to `capacity()`.
    fn slots(&self) -> Vec<Slot>;

    /// Whether the resident set has reached capacity.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Whether no page is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the replacer for `policy`.
///
/// `reference` is only consulted by [`OptReplacer`].
pub fn replacer_for<'a>(
    policy: Policy,
    capacity: NonZeroUsize,
    reference: &'a [PageId],
) -> Box<dyn Replacer + 'a> {
    match policy {
        Policy::Fifo => Box::new(FifoReplacer::new(capacity)),
        Policy::Lru => Box::new(LruReplacer::new(capacity)),
        Policy::Opt => Box::new(OptReplacer::new(capacity, reference)),
    }
}

/// Pad resident pages with empty-slot markers up to `capacity`.
pub(crate) fn padded<I>(resident: I, capacity: usize) -> Vec<Slot>
where
    I: IntoIterator<Item = PageId>,
{
    let mut slots: Vec<Slot> = resident.into_iter().map(Some).collect();
    debug_assert!(slots.len() <= capacity, "more resident pages than frames");
    slots.resize(capacity, None);
    slots
}
