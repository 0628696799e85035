//! Reporting over allocation results.

pub mod comparison;
pub mod satisfaction;

pub use comparison::AllocationComparison;
pub use satisfaction::SatisfactionReport;
