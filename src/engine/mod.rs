//! Page-replacement simulation engine.
//!
//! The engine runs one replacement policy over a reference string and a
//! fixed number of frames, recording frame occupancy and faults per access.
//!
//! # Components
//! - [`simulate`] - The shared step loop
//! - [`Policy`] - Selects FIFO, LRU or OPT
//! - [`Trace`] / [`StepSnapshot`] - Per-access frame state
//! - [`SimulationStats`] - Aggregate counters
//! - [`replacer`] - Eviction policy implementations

mod policy;
pub mod replacer;
mod simulator;
mod stats;
mod trace;

pub use policy::Policy;
pub use simulator::{compare, simulate, simulate_config};
pub use stats::SimulationStats;
pub use trace::{SimulationResult, StepSnapshot, Trace};
