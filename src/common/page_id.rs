//! Page identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a virtual page in a reference string.
///
/// Any integer is a valid page; the engine only compares pages for equality.
/// Serializes as a bare JSON integer.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(-7);
/// assert_eq!(page_id.0, -7);
/// assert_eq!(page_id.to_string(), "-7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One frame slot in a snapshot. `None` is the empty-slot marker.
pub type Slot = Option<PageId>;

/// Convert a slice of raw integers into a reference string.
pub fn reference_string(pages: &[i64]) -> Vec<PageId> {
    pages.iter().copied().map(PageId).collect()
}
