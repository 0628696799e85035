//! FairAlloc - cooperative-game-theoretic resource allocation engine.
//!
//! This crate computes fair divisions of a scarce, shareable resource pool
//! among competing consumers:
//! - Characteristic (coalition-value) function evaluation
//! - Exact Shapley values by brute-force coalition enumeration
//! - Shapley-based allocation with per-consumer demand caps
//! - Proportional allocation as a baseline comparator
//! - Satisfaction-ratio reporting over both policies
//!
//! The Shapley computation is deliberately exact and exponential in the
//! number of consumers; bound the consumer count externally.

pub mod core;
pub mod game;
pub mod report;

pub use crate::core::error::{AllocError, Result};
pub use crate::core::types::Consumer;
pub use crate::game::engine::AllocationEngine;
pub use crate::report::comparison::AllocationComparison;
pub use crate::report::satisfaction::SatisfactionReport;
