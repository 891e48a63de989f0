//! Simulation configuration.

use crate::common::{Error, Result};
use crate::engine::Policy;

/// Frame count used when the caller does not choose one.
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// A validated pair of frame count and replacement policy.
///
/// Construction is the only place where the frame count is checked, so a
/// `SimulationConfig` in hand always has `frame_count >= 1`.
///
/// # Example
/// ```
/// use pagesim::{Policy, SimulationConfig};
///
/// let config = SimulationConfig::from_raw(3, "LRU").unwrap();
/// assert_eq!(config.frame_count(), 3);
/// assert_eq!(config.policy(), Policy::Lru);
///
/// assert!(SimulationConfig::from_raw(0, "LRU").is_err());
/// assert!(SimulationConfig::from_raw(3, "lru").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    frame_count: usize,
    policy: Policy,
}

impl SimulationConfig {
    /// Create a config, rejecting a frame count of 0.
    pub fn new(frame_count: usize, policy: Policy) -> Result<Self> {
        if frame_count == 0 {
            return Err(Error::InvalidFrameCount(0));
        }
        Ok(Self {
            frame_count,
            policy,
        })
    }

    /// Validate untrusted values: a signed frame count and a selector string.
    ///
    /// The selector is checked first, so an invalid policy is reported even
    /// when the frame count is also bad.
    pub fn from_raw(frame_count: i64, selector: &str) -> Result<Self> {
        let policy: Policy = selector.parse()?;
        let frame_count = usize::try_from(frame_count)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(Error::InvalidFrameCount(frame_count))?;
        Self::new(frame_count, policy)
    }

    /// Number of physical frames.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Selected replacement policy.
    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
            policy: Policy::Fifo,
        }
    }
}
