//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Simulation configuration
//! - Error types
//! - Page identifiers and frame slots

pub mod config;
pub mod error;
mod page_id;

pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use page_id::{reference_string, PageId, Slot};
