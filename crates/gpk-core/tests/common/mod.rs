//! Shared utilities for integration tests

use proptest::prelude::*;

pub const EPSILON: f64 = 1e-10;

/// Abscissa lengths covering the degenerate and small cases
pub fn edge_case_lengths() -> Vec<usize> {
    vec![0, 1, 2, 3, 7, 16, 31]
}

/// Evenly spaced grid of `n` points on `[0, 1]`
pub fn unit_grid(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
    }
}

/// Finite abscissa sequences of up to `max_len` points
pub fn abscissas(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e3..1e3f64, 0..=max_len)
}
