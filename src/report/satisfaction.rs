//! Demand-satisfaction metrics for an allocation.

use serde::{Deserialize, Serialize};

use crate::core::types::Consumer;

/// How well an allocation satisfies each consumer's demand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SatisfactionReport {
    /// Per-consumer satisfaction ratio `min(allocated / demand, 1)`,
    /// index-aligned with the registry. A zero-demand consumer is fully
    /// satisfied by definition (ratio 1).
    pub ratios: Vec<f64>,
    /// Average satisfaction ratio across all consumers (0 when empty).
    pub average: f64,
}

impl SatisfactionReport {
    /// Calculate satisfaction from consumers and their allocation.
    ///
    /// `allocations` must be index-aligned with `consumers`.
    pub fn from_allocation(consumers: &[Consumer], allocations: &[f64]) -> Self {
        let ratios: Vec<f64> = consumers
            .iter()
            .zip(allocations.iter())
            .map(|(consumer, &alloc)| {
                if consumer.demand <= 0.0 {
                    1.0
                } else {
                    (alloc / consumer.demand).min(1.0)
                }
            })
            .collect();

        let average = if ratios.is_empty() {
            0.0
        } else {
            ratios.iter().sum::<f64>() / ratios.len() as f64
        };

        Self { ratios, average }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfaction_ratios() {
        let consumers = vec![Consumer::new("1", 10.0), Consumer::new("2", 20.0)];
        let report = SatisfactionReport::from_allocation(&consumers, &[5.0, 20.0]);
        assert!((report.ratios[0] - 0.5).abs() < 1e-12);
        assert!((report.ratios[1] - 1.0).abs() < 1e-12);
        assert!((report.average - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_satisfaction_caps_at_one() {
        let consumers = vec![Consumer::new("1", 10.0)];
        let report = SatisfactionReport::from_allocation(&consumers, &[15.0]);
        assert!((report.ratios[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_satisfaction_zero_demand() {
        let consumers = vec![Consumer::new("1", 0.0)];
        let report = SatisfactionReport::from_allocation(&consumers, &[0.0]);
        assert!((report.ratios[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_satisfaction_empty() {
        let report = SatisfactionReport::from_allocation(&[], &[]);
        assert!(report.ratios.is_empty());
        assert_eq!(report.average, 0.0);
    }
}
