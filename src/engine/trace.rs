//! Step-by-step simulation traces.
//!
//! A [`Trace`] records one [`StepSnapshot`] per access. Together with the
//! fault total it forms a [`SimulationResult`], whose JSON form is
//!
//! ```text
//! {"steps": [{"page": 1, "frames": [1, null, null], "page_fault": true}, ...],
//!  "faults": 1}
//! ```

use serde::Serialize;

use crate::common::{PageId, Result, Slot};
use crate::engine::SimulationStats;

/// Frame state after one access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSnapshot {
    /// The page accessed at this step.
    pub page: PageId,

    /// Frame contents after the access, padded with `None` to the frame
    /// count. Slot order is defined by the policy.
    pub frames: Vec<Slot>,

    /// True iff the page was not resident before this access.
    pub page_fault: bool,

    /// Page displaced by this access, if any. Not part of the wire format.
    #[serde(skip)]
    pub evicted: Option<PageId>,
}

impl StepSnapshot {
    /// Number of occupied slots.
    pub fn resident_count(&self) -> usize {
        self.frames.iter().filter(|slot| slot.is_some()).count()
    }

    /// Occupied slots in order.
    pub fn resident(&self) -> impl Iterator<Item = PageId> + '_ {
        self.frames.iter().flatten().copied()
    }
}

/// Ordered record of every step in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<StepSnapshot>,
}

impl Trace {
    /// Create an empty trace with room for `capacity` steps.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, step: StepSnapshot) {
        self.steps.push(step);
    }

    /// Number of steps (one per access).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All steps in access order.
    pub fn steps(&self) -> &[StepSnapshot] {
        &self.steps
    }

    /// Iterate over steps in access order.
    pub fn iter(&self) -> std::slice::Iter<'_, StepSnapshot> {
        self.steps.iter()
    }

    /// Step at `position` in the reference string, if any.
    pub fn get(&self, position: usize) -> Option<&StepSnapshot> {
        self.steps.get(position)
    }

    /// Number of steps flagged as faults.
    pub fn fault_count(&self) -> usize {
        self.steps.iter().filter(|step| step.page_fault).count()
    }

    /// Positions of faulting steps, ascending.
    pub fn fault_positions(&self) -> Vec<usize> {
        self.steps
            .iter()
            .enumerate()
            .filter(|(_, step)| step.page_fault)
            .map(|(position, _)| position)
            .collect()
    }

    /// Frame contents after the last step, or `None` for an empty trace.
    pub fn final_frames(&self) -> Option<&[Slot]> {
        self.steps.last().map(|step| step.frames.as_slice())
    }

    /// CRC32 of the trace's wire-visible content.
    ///
    /// Two traces with the same pages, frames and fault flags have the same
    /// fingerprint. The evicted page is not included.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&(self.steps.len() as u64).to_le_bytes());
        for step in &self.steps {
            hasher.update(&step.page.0.to_le_bytes());
            hasher.update(&[step.page_fault as u8]);
            hasher.update(&(step.frames.len() as u64).to_le_bytes());
            for slot in &step.frames {
                match slot {
                    Some(page) => {
                        hasher.update(&[1]);
                        hasher.update(&page.0.to_le_bytes());
                    }
                    None => hasher.update(&[0]),
                }
            }
        }
        hasher.finalize()
    }
}

impl From<Vec<StepSnapshot>> for Trace {
    fn from(steps: Vec<StepSnapshot>) -> Self {
        Self { steps }
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a StepSnapshot;
    type IntoIter = std::slice::Iter<'a, StepSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Trace plus fault total of one simulation run.
///
/// `faults` always equals `trace.fault_count()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    /// Per-access snapshots. Serialized as `steps`.
    #[serde(rename = "steps")]
    pub trace: Trace,

    /// Total number of page faults.
    pub faults: usize,
}

impl SimulationResult {
    /// Aggregate counters derived from the trace.
    pub fn stats(&self) -> SimulationStats {
        SimulationStats::from_trace(&self.trace)
    }

    /// Serialize to the compact JSON response object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
