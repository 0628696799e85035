//! Core types and utilities for FairAlloc.

pub mod error;
pub mod types;

pub use error::{AllocError, Result};
pub use types::Consumer;
