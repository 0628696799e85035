//! Side-by-side comparison of the two allocation policies.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::types::Consumer;
use crate::game::engine::AllocationEngine;
use crate::report::satisfaction::SatisfactionReport;

/// Both allocation policies evaluated over one engine, plus their
/// satisfaction metrics.
///
/// Pure presentation over the engine's output arrays; no allocation logic
/// is re-derived here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationComparison {
    /// Consumers, in registry order.
    pub consumers: Vec<Consumer>,
    /// Total resource pool.
    pub total_resources: f64,
    /// Shapley-based allocation, index-aligned with `consumers`.
    pub shapley_allocation: Vec<f64>,
    /// Proportional allocation, index-aligned with `consumers`.
    pub proportional_allocation: Vec<f64>,
    /// Satisfaction under the Shapley allocation.
    pub shapley_satisfaction: SatisfactionReport,
    /// Satisfaction under the proportional allocation.
    pub proportional_satisfaction: SatisfactionReport,
}

impl AllocationComparison {
    /// Run both allocation policies on the engine and collect the results.
    pub fn from_engine(engine: &AllocationEngine) -> Self {
        let shapley_allocation = engine.allocate_by_shapley();
        let proportional_allocation = engine.allocate_proportionally();
        let shapley_satisfaction =
            SatisfactionReport::from_allocation(engine.consumers(), &shapley_allocation);
        let proportional_satisfaction =
            SatisfactionReport::from_allocation(engine.consumers(), &proportional_allocation);

        Self {
            consumers: engine.consumers().to_vec(),
            total_resources: engine.total_resources(),
            shapley_allocation,
            proportional_allocation,
            shapley_satisfaction,
            proportional_satisfaction,
        }
    }

    /// Render the comparison as a fixed-width text table with summary
    /// metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Fair Resource Allocation using Cooperative Game Theory");
        let _ = writeln!(out, "{}", "=".repeat(60));
        let _ = writeln!(out, "Total resources: {}", self.total_resources);
        let _ = writeln!(out, "Consumer demands:");
        for consumer in &self.consumers {
            let _ = writeln!(out, "  {consumer}");
        }

        let _ = writeln!(out, "\nAllocation methods:");
        let _ = writeln!(out, "{}", "-".repeat(60));
        let _ = writeln!(
            out,
            "{:<15} {:<15} {:<15} {:<15}",
            "Consumer", "Demand", "Shapley", "Proportional"
        );
        for (i, consumer) in self.consumers.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:<15} {:<15} {:<15.2} {:<15.2}",
                consumer.id,
                consumer.demand,
                self.shapley_allocation[i],
                self.proportional_allocation[i]
            );
        }

        let _ = writeln!(out, "\nMetrics:");
        let _ = writeln!(out, "{}", "-".repeat(60));
        let _ = writeln!(
            out,
            "Average demand satisfaction (Shapley): {:.2}%",
            self.shapley_satisfaction.average * 100.0
        );
        let _ = writeln!(
            out,
            "Average demand satisfaction (Proportional): {:.2}%",
            self.proportional_satisfaction.average * 100.0
        );

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_engine() -> AllocationEngine {
        let consumers = vec![
            Consumer::new("1", 10.0),
            Consumer::new("2", 20.0),
            Consumer::new("3", 30.0),
        ];
        AllocationEngine::new(consumers, 45.0).unwrap()
    }

    #[test]
    fn test_comparison_collects_both_policies() {
        let engine = reference_engine();
        let comparison = AllocationComparison::from_engine(&engine);

        assert_eq!(comparison.shapley_allocation.len(), 3);
        assert!((comparison.proportional_allocation[0] - 7.5).abs() < 1e-12);
        assert!((comparison.proportional_allocation[1] - 15.0).abs() < 1e-12);
        assert!((comparison.proportional_allocation[2] - 22.5).abs() < 1e-12);
    }

    #[test]
    fn test_render_contains_sections() {
        let engine = reference_engine();
        let report = AllocationComparison::from_engine(&engine).render();

        assert!(report.contains("Total resources: 45"));
        assert!(report.contains("Shapley"));
        assert!(report.contains("Proportional"));
        assert!(report.contains("Average demand satisfaction"));
    }

    #[test]
    fn test_render_empty_registry() {
        let engine = AllocationEngine::new(vec![], 45.0).unwrap();
        let report = AllocationComparison::from_engine(&engine).render();
        assert!(report.contains("Consumer demands:"));
    }
}
