//! Covariance kernels for Gaussian-process modelling
//!
//! This crate re-exports the workspace:
//! - [`gpk_core`]: error taxonomy, abscissa differences and special functions
//! - [`gpk_kernels`]: the kernel family and additive composition
//! - [`gpk_config`]: building kernel sums from TOML configuration files
//!
//! # Example
//!
//! ```rust
//! use gp_kernels::prelude::*;
//!
//! let kernel = SquaredExponential::new(1.0, 0.5).unwrap() + WhiteNoise::new(0.1).unwrap();
//! let x = [0.0, 0.5, 1.0];
//! let cov = kernel.cov(&x, &x).unwrap();
//! assert_eq!(cov.shape(), (3, 3));
//! ```

pub use gpk_config;
pub use gpk_core;
pub use gpk_kernels;

pub use gpk_core::{CovarianceMatrix, Error, ErrorCategory, Result};

/// Commonly used items
pub mod prelude {
    pub use gpk_config::{parse, parse_str, KernelConfig};
    pub use gpk_core::abscissa::differences;
    pub use gpk_core::{CovarianceFunction, KernelProperties};
    pub use gpk_kernels::{
        combine, Kernel, KernelKind, Matern, Polynomial, SquaredExponential, SummedKernel,
        WhiteNoise,
    };
}
