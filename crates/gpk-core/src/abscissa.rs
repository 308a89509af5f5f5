//! Pairwise grids over abscissa sequences
//!
//! Every stationary kernel evaluates its formula entrywise over the
//! difference grid `D[i][j] = x[i] - y[j]`; Polynomial uses the outer
//! product instead.

use crate::{Error, Result};
use nalgebra::DMatrix;

/// Pairwise differences `x[i] - y[j]`, shape `(x.len(), y.len())`
pub fn differences(x: &[f64], y: &[f64]) -> DMatrix<f64> {
    DMatrix::from_fn(x.len(), y.len(), |i, j| x[i] - y[j])
}

/// Pairwise products `x[i] * y[j]`, shape `(x.len(), y.len())`
pub fn outer_product(x: &[f64], y: &[f64]) -> DMatrix<f64> {
    DMatrix::from_fn(x.len(), y.len(), |i, j| x[i] * y[j])
}

/// Reject abscissas containing NaN or infinite values.
///
/// Empty sequences are valid and produce degenerate matrices downstream.
pub fn validate_abscissas(values: &[f64], label: &str) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::non_finite(label, index, values[index])),
        None => Ok(()),
    }
}

/// Validate both inputs of a `cov` call
pub fn validate_pair(x: &[f64], y: &[f64]) -> Result<()> {
    validate_abscissas(x, "x")?;
    validate_abscissas(y, "y")
}
