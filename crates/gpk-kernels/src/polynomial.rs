//! Polynomial kernel
//!
//! cov(x, y) = sigma^2 * (x * y)^order
//!
//! Unlike the other kernels this one is not stationary: it depends on the
//! outer product of the abscissas rather than their difference.

use crate::validation::check_non_negative;
use gpk_core::abscissa::{outer_product, validate_pair};
use gpk_core::{CovarianceFunction, DMatrix, Error, KernelProperties, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    sigma: f64,
    order: f64,
}

impl Polynomial {
    pub const DEFAULT_SIGMA: f64 = 1.0;
    pub const DEFAULT_ORDER: f64 = 0.0;

    /// Create a polynomial kernel raising `x * y` to `order`.
    ///
    /// Non-integer orders are accepted but only evaluate on non-negative
    /// products; see [`CovarianceFunction::cov`].
    pub fn new(sigma: f64, order: f64) -> Result<Self> {
        Ok(Self {
            sigma: check_non_negative("sigma", sigma)?,
            order: check_non_negative("order", order)?,
        })
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn order(&self) -> f64 {
        self.order
    }

    fn integer_order(&self) -> Option<i32> {
        (self.order.fract() == 0.0 && self.order <= i32::MAX as f64).then(|| self.order as i32)
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self {
            sigma: Self::DEFAULT_SIGMA,
            order: Self::DEFAULT_ORDER,
        }
    }
}

impl CovarianceFunction for Polynomial {
    /// Fails with a domain error when the order is fractional and some
    /// product `x[i] * y[j]` is negative, as the power has no real value.
    fn cov(&self, x: &[f64], y: &[f64]) -> Result<DMatrix<f64>> {
        validate_pair(x, y)?;
        let variance = self.variance();
        let products = outer_product(x, y);

        match self.integer_order() {
            Some(power) => Ok(products.map(|p| variance * p.powi(power))),
            None => {
                if let Some(negative) = products.iter().find(|p| **p < 0.0) {
                    return Err(Error::invalid_parameter(
                        "order",
                        self.order,
                        &format!("is fractional, undefined for negative product {negative}"),
                    ));
                }
                Ok(products.map(|p| variance * p.powf(self.order)))
            }
        }
    }
}

impl KernelProperties for Polynomial {
    fn name(&self) -> &'static str {
        "Polynomial"
    }

    fn is_stationary(&self) -> bool {
        false
    }

    fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gpk_core::ErrorCategory;

    #[test]
    fn test_linear_order() {
        let kernel = Polynomial::new(2.0, 1.0).unwrap();
        let cov = kernel.cov(&[1.0, 2.0], &[3.0, 4.0]).unwrap();
        let expected = DMatrix::from_row_slice(2, 2, &[3.0, 4.0, 6.0, 8.0]) * 4.0;
        assert_eq!(cov, expected);
    }

    #[test]
    fn test_quadratic_order() {
        let cov = Polynomial::new(1.0, 2.0)
            .unwrap()
            .cov(&[-1.0, 3.0], &[2.0])
            .unwrap();
        assert_eq!(cov, DMatrix::from_row_slice(2, 1, &[4.0, 36.0]));
    }

    #[test]
    fn test_default_is_constant() {
        let cov = Polynomial::default().cov(&[0.0, -5.0], &[2.0, 0.0]).unwrap();
        assert_eq!(cov, DMatrix::from_element(2, 2, 1.0));
    }

    #[test]
    fn test_fractional_order() {
        let kernel = Polynomial::new(1.0, 0.5).unwrap();
        let cov = kernel.cov(&[4.0], &[1.0, 9.0]).unwrap();
        assert_relative_eq!(cov[(0, 0)], 2.0, max_relative = 1e-15);
        assert_relative_eq!(cov[(0, 1)], 6.0, max_relative = 1e-15);

        let err = kernel.cov(&[-4.0], &[1.0]).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Domain);
    }

    #[test]
    fn test_not_stationary() {
        let kernel = Polynomial::new(1.0, 1.0).unwrap();
        assert!(!kernel.is_stationary());
        let a = kernel.cov(&[1.0], &[2.0]).unwrap();
        let b = kernel.cov(&[2.0], &[3.0]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_invalid_order() {
        assert!(Polynomial::new(1.0, -1.0).is_err());
        assert!(Polynomial::new(1.0, f64::NAN).is_err());
    }
}
