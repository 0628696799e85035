//! Allocation engine: characteristic function, exact Shapley values, and
//! the two allocation policies.

use crate::core::error::{AllocError, Result};
use crate::core::types::Consumer;
use crate::game::coalition::{factorial_table, Combinations};

/// Cooperative-game allocation engine over a fixed consumer registry and
/// resource pool.
///
/// The engine is immutable after construction and recomputes every result
/// from scratch on each call; no caches are kept between calls. All
/// operations are pure, so a shared `&AllocationEngine` is safe to use from
/// any number of threads.
///
/// Shapley computation enumerates all 2^n coalitions and is intended for
/// small registries only.
#[derive(Debug, Clone)]
pub struct AllocationEngine {
    consumers: Vec<Consumer>,
    total_resources: f64,
}

impl AllocationEngine {
    /// Create a new engine over `consumers` and a total resource pool.
    ///
    /// Rejects any negative or non-finite demand, and a negative or
    /// non-finite `total_resources`.
    pub fn new(consumers: Vec<Consumer>, total_resources: f64) -> Result<Self> {
        if !total_resources.is_finite() {
            return Err(AllocError::invalid_parameter(format!(
                "total_resources must be finite, got {total_resources}"
            )));
        }
        if total_resources < 0.0 {
            return Err(AllocError::negative_resources(total_resources));
        }
        for consumer in &consumers {
            if !consumer.demand.is_finite() {
                return Err(AllocError::invalid_parameter(format!(
                    "demand must be finite, got {} for consumer {}",
                    consumer.demand, consumer.id
                )));
            }
            if consumer.demand < 0.0 {
                return Err(AllocError::negative_demand(
                    consumer.id.clone(),
                    consumer.demand,
                ));
            }
        }
        Ok(Self {
            consumers,
            total_resources,
        })
    }

    /// Registered consumers, in registry order.
    #[inline]
    pub fn consumers(&self) -> &[Consumer] {
        &self.consumers
    }

    /// Total resource pool.
    #[inline]
    pub fn total_resources(&self) -> f64 {
        self.total_resources
    }

    /// Number of registered consumers.
    #[inline]
    pub fn len(&self) -> usize {
        self.consumers.len()
    }

    /// Check if the registry is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }

    /// Demands of all consumers, in registry order.
    pub fn demands(&self) -> Vec<f64> {
        self.consumers.iter().map(|c| c.demand).collect()
    }

    /// Sum of all demands.
    pub fn total_demand(&self) -> f64 {
        self.consumers.iter().map(|c| c.demand).sum()
    }

    /// Value of a coalition: `min(sum of member demands, total_resources)`.
    ///
    /// The empty coalition has value 0. Returns an error if any index is
    /// out of range.
    pub fn characteristic_value(&self, coalition: &[usize]) -> Result<f64> {
        let n = self.consumers.len();
        for &idx in coalition {
            if idx >= n {
                return Err(AllocError::index_out_of_bounds(idx, n));
            }
        }
        Ok(self.coalition_value(coalition))
    }

    /// Coalition value over indices known to be in range.
    fn coalition_value(&self, coalition: &[usize]) -> f64 {
        let total_demand: f64 = coalition.iter().map(|&i| self.consumers[i].demand).sum();
        total_demand.min(self.total_resources)
    }

    /// Compute the exact Shapley value of every consumer.
    ///
    /// Enumerates every coalition of every size and accumulates each
    /// member's marginal contribution, weighted by the probability that a
    /// uniformly random join order places exactly that coalition's other
    /// members before it: `(s-1)! (n-s)! / n!` for a coalition of size `s`.
    ///
    /// Theta(2^n * n) coalition-member pairs; exact by design. The returned
    /// values sum to the value of the full coalition (efficiency property).
    pub fn compute_shapley_values(&self) -> Vec<f64> {
        let n = self.consumers.len();
        let mut shapley_values = vec![0.0; n];
        let factorials = factorial_table(n);

        let mut sub_coalition = Vec::with_capacity(n);
        for coalition_size in 1..=n {
            // Weight is a function of coalition size only.
            let weight = factorials[coalition_size - 1] * factorials[n - coalition_size]
                / factorials[n];

            for coalition in Combinations::new(n, coalition_size) {
                let value = self.coalition_value(&coalition);

                for &member in &coalition {
                    sub_coalition.clear();
                    sub_coalition.extend(coalition.iter().copied().filter(|&i| i != member));
                    let value_without = self.coalition_value(&sub_coalition);
                    shapley_values[member] += (value - value_without) * weight;
                }
            }
        }

        shapley_values
    }

    /// Allocate the pool in proportion to Shapley values, capped per
    /// consumer at its demand.
    ///
    /// If the total Shapley value is zero or negative (zero pool, or all
    /// demands zero) the allocation is all zeros; this is a defined policy,
    /// not an error. Note that excess share above a consumer's demand cap
    /// is not redistributed to the others - a known limitation of this
    /// policy, preserved deliberately.
    pub fn allocate_by_shapley(&self) -> Vec<f64> {
        let shapley_values = self.compute_shapley_values();
        let total_shapley: f64 = shapley_values.iter().sum();

        if total_shapley <= 0.0 {
            return vec![0.0; self.consumers.len()];
        }

        self.consumers
            .iter()
            .zip(shapley_values.iter())
            .map(|(consumer, &value)| {
                let alloc = self.total_resources * (value / total_shapley);
                alloc.min(consumer.demand)
            })
            .collect()
    }

    /// Allocate the pool in direct proportion to demand.
    ///
    /// When total demand fits in the pool every consumer receives its full
    /// demand; otherwise each receives `total_resources * demand / D`.
    pub fn allocate_proportionally(&self) -> Vec<f64> {
        let total_demand = self.total_demand();

        if total_demand <= self.total_resources {
            return self.demands();
        }

        self.consumers
            .iter()
            .map(|c| self.total_resources * (c.demand / total_demand))
            .collect()
    }
}
