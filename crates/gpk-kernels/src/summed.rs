//! Sums of kernels
//!
//! A [`SummedKernel`] models covariance from several independent sources of
//! correlation: its covariance is the elementwise sum of its children's.

use crate::kernel::Kernel;
use gpk_core::abscissa::validate_pair;
use gpk_core::{CovarianceFunction, DMatrix, KernelProperties, Result};
use tracing::trace;

/// Ordered, flat collection of kernels whose covariances are added.
///
/// Nested sums are flattened on insertion, so a `SummedKernel` never holds
/// another `SummedKernel` as a child. The empty sum is a valid kernel whose
/// covariance is identically zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummedKernel {
    kernels: Vec<Kernel>,
}

impl SummedKernel {
    /// Create a sum from `kernels`, flattening any nested sums
    pub fn new(kernels: impl IntoIterator<Item = Kernel>) -> Self {
        kernels.into_iter().collect()
    }

    /// The sum with no terms
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a term. A summed kernel contributes its children in order.
    pub fn push(&mut self, kernel: impl Into<Kernel>) {
        match kernel.into() {
            Kernel::Summed(summed) => self.kernels.extend(summed.kernels),
            other => self.kernels.push(other),
        }
    }

    pub fn kernels(&self) -> &[Kernel] {
        &self.kernels
    }

    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Kernel> {
        self.kernels.iter()
    }
}

impl FromIterator<Kernel> for SummedKernel {
    fn from_iter<I: IntoIterator<Item = Kernel>>(iter: I) -> Self {
        let mut summed = Self::empty();
        for kernel in iter {
            summed.push(kernel);
        }
        summed
    }
}

impl IntoIterator for SummedKernel {
    type Item = Kernel;
    type IntoIter = std::vec::IntoIter<Kernel>;

    fn into_iter(self) -> Self::IntoIter {
        self.kernels.into_iter()
    }
}

impl<'a> IntoIterator for &'a SummedKernel {
    type Item = &'a Kernel;
    type IntoIter = std::slice::Iter<'a, Kernel>;

    fn into_iter(self) -> Self::IntoIter {
        self.kernels.iter()
    }
}

impl CovarianceFunction for SummedKernel {
    fn cov(&self, x: &[f64], y: &[f64]) -> Result<DMatrix<f64>> {
        validate_pair(x, y)?;
        trace!(
            terms = self.kernels.len(),
            rows = x.len(),
            cols = y.len(),
            "evaluating summed covariance"
        );
        let mut total = DMatrix::zeros(x.len(), y.len());
        for kernel in &self.kernels {
            total += kernel.cov(x, y)?;
        }
        Ok(total)
    }
}

impl KernelProperties for SummedKernel {
    fn name(&self) -> &'static str {
        "SummedKernel"
    }

    fn is_stationary(&self) -> bool {
        self.kernels.iter().all(|k| k.is_stationary())
    }

    fn variance(&self) -> f64 {
        self.kernels.iter().map(|k| k.variance()).sum()
    }
}
