//! Squared-exponential (radial basis) kernel
//!
//! cov(x, y) = sigma^2 * exp(-0.5 * (x - y)^2 / length^2)

use crate::validation::{check_non_negative, check_positive};
use gpk_core::abscissa::{differences, validate_pair};
use gpk_core::{CovarianceFunction, DMatrix, KernelProperties, Result};

/// Infinitely smooth stationary kernel with correlation length `length`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquaredExponential {
    sigma: f64,
    length: f64,
}

impl SquaredExponential {
    pub const DEFAULT_SIGMA: f64 = 1.0;
    pub const DEFAULT_LENGTH: f64 = 1.0;

    pub fn new(sigma: f64, length: f64) -> Result<Self> {
        Ok(Self {
            sigma: check_non_negative("sigma", sigma)?,
            length: check_positive("length", length)?,
        })
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn length(&self) -> f64 {
        self.length
    }
}

impl Default for SquaredExponential {
    fn default() -> Self {
        Self {
            sigma: Self::DEFAULT_SIGMA,
            length: Self::DEFAULT_LENGTH,
        }
    }
}

impl CovarianceFunction for SquaredExponential {
    fn cov(&self, x: &[f64], y: &[f64]) -> Result<DMatrix<f64>> {
        validate_pair(x, y)?;
        let variance = self.variance();
        let inv_length2 = 1.0 / (self.length * self.length);
        Ok(differences(x, y).map(|d| variance * (-0.5 * d * d * inv_length2).exp()))
    }
}

impl KernelProperties for SquaredExponential {
    fn name(&self) -> &'static str {
        "SquaredExponential"
    }

    fn is_stationary(&self) -> bool {
        true
    }

    fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }
}
