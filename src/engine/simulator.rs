//! Simulation engine - the shared step loop.
//!
//! [`simulate`] provides:
//! - One pass over the reference string
//! - Fault detection and accounting
//! - Policy-specific eviction through a [`Replacer`]
//! - One [`StepSnapshot`] per access
//!
//! The engine is a pure function of its inputs: no global state, no I/O,
//! and identical inputs always give identical results.

use std::num::NonZeroUsize;

use log::debug;

use crate::common::{Error, PageId, Result, SimulationConfig};
use crate::engine::replacer::{replacer_for, Replacer};
use crate::engine::{Policy, SimulationResult, StepSnapshot, Trace};

/// Run `policy` over `reference` with `frame_count` frames.
///
/// # Errors
/// - `Error::InvalidFrameCount` if `frame_count` is 0
///
/// # Example
/// ```
/// use pagesim::{reference_string, simulate, Policy};
///
/// let reference = reference_string(&[1, 2, 3, 1, 2, 4]);
/// let result = simulate(&reference, 3, Policy::Lru).unwrap();
/// assert_eq!(result.faults, 4);
/// assert_eq!(result.trace.len(), reference.len());
/// ```
pub fn simulate(
    reference: &[PageId],
    frame_count: usize,
    policy: Policy,
) -> Result<SimulationResult> {
    let capacity = NonZeroUsize::new(frame_count).ok_or(Error::InvalidFrameCount(0))?;

    let mut replacer = replacer_for(policy, capacity, reference);
    let result = run(replacer.as_mut(), reference);

    debug!(
        "{} with {} frames: {} accesses, {} faults",
        policy,
        frame_count,
        reference.len(),
        result.faults
    );
    Ok(result)
}

/// Run the policy and frame count of a validated config.
pub fn simulate_config(config: &SimulationConfig, reference: &[PageId]) -> Result<SimulationResult> {
    simulate(reference, config.frame_count(), config.policy())
}

/// Run every policy over the same reference string.
///
/// Results come back in [`Policy::ALL`] order.
///
/// # Errors
/// - `Error::InvalidFrameCount` if `frame_count` is 0
pub fn compare(reference: &[PageId], frame_count: usize) -> Result<Vec<(Policy, SimulationResult)>> {
    Policy::ALL
        .iter()
        .map(|&policy| simulate(reference, frame_count, policy).map(|result| (policy, result)))
        .collect()
}

/// The step loop shared by all policies.
fn run<R: Replacer + ?Sized>(replacer: &mut R, reference: &[PageId]) -> SimulationResult {
    let mut trace = Trace::with_capacity(reference.len());
    let mut faults = 0;

    for (position, &page) in reference.iter().enumerate() {
        let page_fault = !replacer.contains(page);
        let evicted = if page_fault {
            faults += 1;
            replacer.admit(position, page)
        } else {
            None
        };
        replacer.record_access(position, page);

        trace.push(StepSnapshot {
            page,
            frames: replacer.slots(),
            page_fault,
            evicted,
        });
    }

    SimulationResult { trace, faults }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::reference_string;

    fn frames(result: &SimulationResult, position: usize) -> Vec<Option<i64>> {
        result.trace.steps()[position]
            .frames
            .iter()
            .map(|slot| slot.map(|page| page.0))
            .collect()
    }

    #[test]
    fn test_zero_frames_rejected() {
        let reference = reference_string(&[1, 2]);
        for policy in Policy::ALL {
            assert!(matches!(
                simulate(&reference, 0, policy),
                Err(Error::InvalidFrameCount(0))
            ));
        }
    }

    #[test]
    fn test_empty_reference() {
        for policy in Policy::ALL {
            let result = simulate(&[], 3, policy).unwrap();
            assert!(result.trace.is_empty());
            assert_eq!(result.faults, 0);
        }
    }

    #[test]
    fn test_fifo_trace() {
        let reference = reference_string(&[1, 2, 3, 4, 1, 2, 5]);
        let result = simulate(&reference, 3, Policy::Fifo).unwrap();

        assert_eq!(result.faults, 7);
        assert_eq!(frames(&result, 0), vec![Some(1), None, None]);
        assert_eq!(frames(&result, 3), vec![Some(2), Some(3), Some(4)]);
        assert_eq!(frames(&result, 6), vec![Some(1), Some(2), Some(5)]);
        assert_eq!(result.trace.steps()[3].evicted, Some(PageId(1)));
    }

    #[test]
    fn test_lru_trace() {
        let reference = reference_string(&[1, 2, 3, 1, 2, 4]);
        let result = simulate(&reference, 3, Policy::Lru).unwrap();

        assert_eq!(result.faults, 4);
        assert_eq!(result.trace.fault_positions(), vec![0, 1, 2, 5]);
        assert_eq!(frames(&result, 5), vec![Some(1), Some(2), Some(4)]);
        assert_eq!(result.trace.steps()[5].evicted, Some(PageId(3)));
    }

    #[test]
    fn test_opt_trace() {
        let reference = reference_string(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
        let result = simulate(&reference, 3, Policy::Opt).unwrap();

        assert_eq!(result.faults, 7);
        assert_eq!(result.trace.fault_positions(), vec![0, 1, 2, 3, 6, 9, 10]);
        assert_eq!(frames(&result, 3), vec![Some(1), Some(2), Some(4)]);
        assert_eq!(frames(&result, 9), vec![Some(3), Some(2), Some(5)]);
        assert_eq!(frames(&result, 11), vec![Some(4), Some(2), Some(5)]);
    }

    #[test]
    fn test_compare_order() {
        let reference = reference_string(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
        let results = compare(&reference, 3).unwrap();

        let faults: Vec<(Policy, usize)> = results
            .iter()
            .map(|(policy, result)| (*policy, result.faults))
            .collect();
        assert_eq!(
            faults,
            vec![(Policy::Fifo, 9), (Policy::Lru, 10), (Policy::Opt, 7)]
        );
    }

    #[test]
    fn test_simulate_config() {
        let config = SimulationConfig::new(2, Policy::Lru).unwrap();
        let reference = reference_string(&[1, 2, 1, 3]);
        let result = simulate_config(&config, &reference).unwrap();
        assert_eq!(result, simulate(&reference, 2, Policy::Lru).unwrap());
    }
}
