//! Cooperative-game machinery: coalition enumeration and the allocation engine.

pub mod coalition;
pub mod engine;

pub use coalition::Combinations;
pub use engine::AllocationEngine;
