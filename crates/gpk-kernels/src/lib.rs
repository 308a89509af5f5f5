//! Closed-form covariance kernels for Gaussian-process models
//!
//! This crate provides the kernel family and its additive composition:
//! - White noise
//! - Squared exponential
//! - Matern of arbitrary real order
//! - Polynomial
//! - Sums of any of the above
//!
//! # Overview
//!
//! Every kernel maps two abscissa sequences `x` and `y` to the dense
//! `x.len() x y.len()` covariance matrix. Parameters are bound at
//! construction, validated there, and never change afterwards.
//!
//! | Kernel | Parameters (default) | Entry `(i, j)` |
//! |--------|----------------------|----------------|
//! | WhiteNoise | sigma (1) | `sigma^2` if `x_i == y_j`, else 0 |
//! | SquaredExponential | sigma (1), length (1) | `sigma^2 exp(-(x_i - y_j)^2 / 2 length^2)` |
//! | Matern | sigma (1), length (1), order (1) | `sigma^2 2^(1-nu)/Gamma(nu) d^nu K_nu(d)` |
//! | Polynomial | sigma (1), order (0) | `sigma^2 (x_i y_j)^order` |
//!
//! # Examples
//!
//! ```rust
//! use gpk_kernels::{combine, CovarianceFunction, SquaredExponential, WhiteNoise};
//!
//! let signal = SquaredExponential::new(1.0, 0.5).unwrap();
//! let noise = WhiteNoise::new(0.1).unwrap();
//! let kernel = combine(signal, noise);
//!
//! let x = [0.0, 0.25, 0.5];
//! let cov = kernel.cov(&x, &x).unwrap();
//! assert_eq!(cov.shape(), (3, 3));
//! assert!((cov[(0, 0)] - 1.01).abs() < 1e-12);
//! ```
//!
//! The `+` operator is equivalent to [`combine`]:
//!
//! ```rust
//! use gpk_kernels::{Matern, Polynomial, WhiteNoise};
//!
//! let kernel = Matern::default() + WhiteNoise::default() + Polynomial::default();
//! assert_eq!(kernel.len(), 3);
//! ```

pub mod kernel;
pub mod kind;
pub mod matern;
pub mod polynomial;
pub mod squared_exponential;
pub mod summed;
pub mod white_noise;

mod validation;

// Re-exports
pub use kernel::{combine, Kernel};
pub use kind::KernelKind;
pub use matern::Matern;
pub use polynomial::Polynomial;
pub use squared_exponential::SquaredExponential;
pub use summed::SummedKernel;
pub use white_noise::WhiteNoise;

pub use gpk_core::{
    CovarianceFunction, CovarianceMatrix, Error, ErrorCategory, KernelProperties, Result,
};
