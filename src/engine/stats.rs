//! Simulation statistics.

use std::fmt;

use crate::engine::Trace;

/// Aggregate counters for one finished simulation run.
///
/// Derived from a [`Trace`], so the counters always agree with the
/// per-step fault flags.
///
/// # Example
/// ```
/// use pagesim::{reference_string, simulate, Policy};
///
/// let reference = reference_string(&[1, 2, 1, 3]);
/// let stats = simulate(&reference, 2, Policy::Lru).unwrap().stats();
/// assert_eq!(stats.faults, 3);
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.evictions, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationStats {
    /// Number of page accesses (length of the reference string).
    pub accesses: usize,

    /// Number of accesses to a non-resident page.
    pub faults: usize,

    /// Number of accesses to a resident page.
    pub hits: usize,

    /// Number of faults that displaced a resident page.
    pub evictions: usize,
}

impl SimulationStats {
    /// Tally the counters of a trace.
    pub fn from_trace(trace: &Trace) -> Self {
        let mut stats = Self {
            accesses: trace.len(),
            ..Self::default()
        };
        for step in trace.iter() {
            if step.page_fault {
                stats.faults += 1;
            } else {
                stats.hits += 1;
            }
            if step.evicted.is_some() {
                stats.evictions += 1;
            }
        }
        stats
    }

    /// Fraction of accesses that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    /// Fraction of accesses that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.faults as f64 / self.accesses as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ accesses: {}, faults: {}, hits: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.accesses,
            self.faults,
            self.hits,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
