//! Shared utilities for integration tests

use gpk_kernels::{Kernel, Matern, Polynomial, SquaredExponential, WhiteNoise};
use proptest::prelude::*;

/// One kernel of every leaf kind with non-default parameters
pub fn sample_kernels() -> Vec<Kernel> {
    vec![
        WhiteNoise::new(0.3).unwrap().into(),
        SquaredExponential::new(1.2, 0.4).unwrap().into(),
        Matern::new(0.9, 0.6, 1.5).unwrap().into(),
        Matern::new(1.1, 2.0, 0.8).unwrap().into(),
        Polynomial::new(0.7, 2.0).unwrap().into(),
    ]
}

/// Finite abscissa sequences of bounded magnitude, possibly empty
pub fn abscissas(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-50.0..50.0f64, 0..max_len)
}

/// Any leaf kernel with parameters drawn from their valid domains
pub fn leaf_kernel() -> impl Strategy<Value = Kernel> {
    prop_oneof![
        (0.0..5.0f64).prop_map(|s| WhiteNoise::new(s).unwrap().into()),
        (0.0..5.0f64, 0.05..10.0f64)
            .prop_map(|(s, l)| SquaredExponential::new(s, l).unwrap().into()),
        (0.0..5.0f64, 0.05..10.0f64, 0.1..6.0f64)
            .prop_map(|(s, l, nu)| Matern::new(s, l, nu).unwrap().into()),
        (0.0..5.0f64, 0u32..4).prop_map(|(s, p)| Polynomial::new(s, p as f64).unwrap().into()),
    ]
}
