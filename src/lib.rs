//! pagesim - A page-replacement policy simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 CLI (src/main.rs)                        │   │
//! │  │        clap arguments → engine → JSON / table            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Simulation Engine (engine/)                    │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │       Replacement Policies: FIFO | LRU | OPT    │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      simulate + Trace + StepSnapshot + Statistics        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │               Common (common/)                           │   │
//! │  │          PageId + SimulationConfig + Error               │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`engine`] - The simulation loop and replacement policies
//!
//! # Quick Start
//! ```
//! use pagesim::{reference_string, simulate, Policy};
//!
//! let reference = reference_string(&[1, 2, 3, 4, 1, 2, 5]);
//! let result = simulate(&reference, 3, Policy::Fifo).unwrap();
//!
//! assert_eq!(result.faults, 7);
//! println!("{}", result.to_json().unwrap());
//! ```

pub mod common;
pub mod engine;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_FRAME_COUNT;
pub use common::{reference_string, Error, PageId, Result, SimulationConfig, Slot};

pub use engine::{
    compare, simulate, simulate_config, Policy, SimulationResult, SimulationStats, StepSnapshot,
    Trace,
};
