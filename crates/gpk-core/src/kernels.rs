//! Covariance kernel traits
//!
//! This module provides the trait definitions that the kernel crates
//! implement. Concrete kernels live in `gpk-kernels`.
//!
//! # Design Philosophy
//!
//! - **Interface Only**: This module only defines traits, not implementations
//! - **Pure**: `cov` is a function of its inputs and the bound parameters
//! - **Immutable**: kernels are `Send + Sync` and never change after construction

use crate::Result;
use nalgebra::DMatrix;

/// Base trait for all covariance kernels
pub trait CovarianceFunction: Send + Sync {
    /// Covariance matrix between abscissas `x` and `y`.
    ///
    /// The result has shape `(x.len(), y.len())`. Empty inputs are legal and
    /// give a matrix with zero rows and/or columns. Non-finite abscissas are
    /// rejected with [`Error::Shape`](crate::Error::Shape).
    fn cov(&self, x: &[f64], y: &[f64]) -> Result<DMatrix<f64>>;

    /// Covariance of a sequence with itself
    fn cov_self(&self, x: &[f64]) -> Result<DMatrix<f64>> {
        self.cov(x, x)
    }
}

/// Intrinsic properties of a kernel that don't depend on the inputs
pub trait KernelProperties {
    /// Type tag of this kernel, as used in configuration files
    fn name(&self) -> &'static str;

    /// Whether the kernel depends only on `x - y`
    fn is_stationary(&self) -> bool;

    /// Prior variance `sigma^2`
    fn variance(&self) -> f64;
}
