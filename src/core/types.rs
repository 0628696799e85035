//! Core data types for FairAlloc.

use serde::{Deserialize, Serialize};

/// A resource consumer (e.g. a virtual machine) with a fixed demand.
///
/// Consumers are immutable once registered with an engine. Identity for
/// all internal computation is positional (registry index); `id` is
/// display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumer {
    /// Display identifier.
    pub id: String,
    /// Resource demand (non-negative).
    pub demand: f64,
}

impl Consumer {
    /// Create a new consumer.
    pub fn new(id: impl Into<String>, demand: f64) -> Self {
        Self {
            id: id.into(),
            demand,
        }
    }
}

impl std::fmt::Display for Consumer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Consumer(id={}, demand={})", self.id, self.demand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumer_display() {
        let c = Consumer::new("vm-1", 10.0);
        assert_eq!(c.to_string(), "Consumer(id=vm-1, demand=10)");
    }

    #[test]
    fn test_consumer_serde_roundtrip() {
        let c = Consumer::new("vm-2", 20.5);
        let json = serde_json::to_string(&c).unwrap();
        let back: Consumer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
