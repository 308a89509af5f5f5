//! Matern kernel
//!
//! With `d = |x - y| * sqrt(2 nu) / length`:
//!
//! cov(x, y) = sigma^2 * 2^(1 - nu) / Gamma(nu) * d^nu * K_nu(d)
//!
//! where `K_nu` is the modified Bessel function of the second kind. The
//! expression has a removable singularity at `d = 0` whose limit is
//! `sigma^2`. Half-integer orders reduce to the familiar closed forms, e.g.
//! `nu = 1/2` is the exponential kernel and `nu -> inf` approaches the
//! squared exponential.

use crate::validation::{check_non_negative, check_positive};
use gpk_core::abscissa::{differences, validate_pair};
use gpk_core::math::special::{ln_bessel_k, ln_gamma};
use gpk_core::{CovarianceFunction, DMatrix, KernelProperties, Result};
use std::f64::consts::LN_2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matern {
    sigma: f64,
    length: f64,
    order: f64,
    /// `sqrt(2 nu) / length`
    scale: f64,
    /// `ln(2^(1 - nu) / Gamma(nu))`
    ln_normalisation: f64,
}

impl Matern {
    pub const DEFAULT_SIGMA: f64 = 1.0;
    pub const DEFAULT_LENGTH: f64 = 1.0;
    pub const DEFAULT_ORDER: f64 = 1.0;

    /// Create a Matern kernel of smoothness `order` (nu)
    pub fn new(sigma: f64, length: f64, order: f64) -> Result<Self> {
        let sigma = check_non_negative("sigma", sigma)?;
        let length = check_positive("length", length)?;
        let order = check_positive("order", order)?;
        Ok(Self::from_valid(sigma, length, order))
    }

    fn from_valid(sigma: f64, length: f64, order: f64) -> Self {
        Self {
            sigma,
            length,
            order,
            scale: (2.0 * order).sqrt() / length,
            ln_normalisation: (1.0 - order) * LN_2 - ln_gamma(order),
        }
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn order(&self) -> f64 {
        self.order
    }

    /// Correlation at scaled distance `d >= 0`, in `[0, 1]`
    fn correlation(&self, d: f64) -> f64 {
        if d == 0.0 {
            return 1.0;
        }
        let ln_k = ln_bessel_k(self.order, d);
        if ln_k == f64::INFINITY {
            // d below ~1e-200, where the correlation rounds to 1
            return 1.0;
        }
        (self.ln_normalisation + self.order * d.ln() + ln_k)
            .exp()
            .min(1.0)
    }
}

impl Default for Matern {
    fn default() -> Self {
        Self::from_valid(Self::DEFAULT_SIGMA, Self::DEFAULT_LENGTH, Self::DEFAULT_ORDER)
    }
}

impl CovarianceFunction for Matern {
    fn cov(&self, x: &[f64], y: &[f64]) -> Result<DMatrix<f64>> {
        validate_pair(x, y)?;
        let variance = self.variance();
        Ok(differences(x, y).map(|d| variance * self.correlation(d.abs() * self.scale)))
    }
}

impl KernelProperties for Matern {
    fn name(&self) -> &'static str {
        "Matern"
    }

    fn is_stationary(&self) -> bool {
        true
    }

    fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }
}
