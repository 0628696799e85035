//! Coalition enumeration for exact Shapley computation.
//!
//! Coalitions are subsets of consumer indices; order within a coalition is
//! irrelevant, so enumeration walks index combinations rather than
//! permutations.

/// Iterator over all size-`k` combinations of indices `0..n`, in
/// lexicographic order.
///
/// Each item is a sorted `Vec<usize>` of distinct indices. Yields nothing
/// when `k > n`, and a single empty coalition when `k == 0`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    /// Create an iterator over size-`k` subsets of `0..n`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // Advance to the next combination: bump the rightmost index that
        // still has room, then reset everything to its right.
        let mut pos = self.k;
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            if self.indices[pos] < self.n - self.k + pos {
                self.indices[pos] += 1;
                for j in (pos + 1)..self.k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}

/// Precompute `0! ..= n!` as `f64`.
///
/// The Shapley weight `s!(n-s-1)!/n!` is assembled from these; `f64`
/// factorials are exact up to `22!`, well beyond any tractable consumer
/// count for 2^n enumeration.
pub fn factorial_table(n: usize) -> Vec<f64> {
    let mut table = vec![1.0; n + 1];
    for i in 1..=n {
        table[i] = table[i - 1] * i as f64;
    }
    table
}
