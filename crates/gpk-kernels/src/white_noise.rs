//! White-noise kernel
//!
//! cov(x, y) = sigma^2 * delta(x - y)

use crate::validation::check_non_negative;
use gpk_core::abscissa::{differences, validate_pair};
use gpk_core::{CovarianceFunction, DMatrix, KernelProperties, Result};

/// Uncorrelated noise of variance `sigma^2`, present only where abscissas
/// coincide exactly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhiteNoise {
    sigma: f64,
}

impl WhiteNoise {
    pub const DEFAULT_SIGMA: f64 = 1.0;

    /// Create a white-noise kernel with standard deviation `sigma`
    pub fn new(sigma: f64) -> Result<Self> {
        Ok(Self {
            sigma: check_non_negative("sigma", sigma)?,
        })
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Default for WhiteNoise {
    fn default() -> Self {
        Self {
            sigma: Self::DEFAULT_SIGMA,
        }
    }
}

impl CovarianceFunction for WhiteNoise {
    fn cov(&self, x: &[f64], y: &[f64]) -> Result<DMatrix<f64>> {
        validate_pair(x, y)?;
        let variance = self.variance();
        Ok(differences(x, y).map(|d| if d == 0.0 { variance } else { 0.0 }))
    }
}

impl KernelProperties for WhiteNoise {
    fn name(&self) -> &'static str {
        "WhiteNoise"
    }

    fn is_stationary(&self) -> bool {
        true
    }

    fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }
}
