//! Replacement policy selector.

use std::fmt;
use std::str::FromStr;

use crate::common::Error;

/// The page-replacement policies the engine can run.
///
/// Selector strings are part of the external contract and are matched
/// verbatim (case-sensitive): `"FIFO"`, `"LRU"`, `"OPT"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Evict the page admitted earliest.
    Fifo,
    /// Evict the page whose last access is oldest.
    Lru,
    /// Evict the page whose next use is farthest in the future.
    Opt,
}

impl Policy {
    /// Every policy, in selector order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Opt];

    /// The verbatim selector string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Opt => "OPT",
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIFO" => Ok(Policy::Fifo),
            "LRU" => Ok(Policy::Lru),
            "OPT" => Ok(Policy::Opt),
            other => Err(Error::InvalidPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
