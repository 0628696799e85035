//! Error types for FairAlloc.

use thiserror::Error;

/// Result type alias for FairAlloc operations.
pub type Result<T> = std::result::Result<T, AllocError>;

/// Error types for the allocation engine.
#[derive(Error, Debug)]
pub enum AllocError {
    /// Invalid parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Negative demand supplied for a consumer.
    #[error("Negative demand {demand} for consumer {id}")]
    NegativeDemand { id: String, demand: f64 },

    /// Negative total resource pool.
    #[error("Negative total resources: {total}")]
    NegativeResources { total: f64 },

    /// Invalid index access.
    #[error("Index {index} out of bounds for length {length}")]
    IndexOutOfBounds { index: usize, length: usize },
}

impl AllocError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a negative demand error.
    pub fn negative_demand(id: impl Into<String>, demand: f64) -> Self {
        Self::NegativeDemand {
            id: id.into(),
            demand,
        }
    }

    /// Create a negative resources error.
    pub fn negative_resources(total: f64) -> Self {
        Self::NegativeResources { total }
    }

    /// Create an index out of bounds error.
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }
}
