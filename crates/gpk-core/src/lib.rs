//! Core traits and types for Gaussian-process covariance kernels
//!
//! This crate provides the pieces every kernel crate builds on:
//!
//! - [`error`]: the shared error taxonomy (shape, domain, config)
//! - [`abscissa`]: pairwise difference and outer-product grids
//! - [`math`]: special functions (Gamma, modified Bessel K)
//! - [`kernels`]: the [`CovarianceFunction`] and [`KernelProperties`] traits
//!
//! # Example
//!
//! ```rust
//! use gpk_core::abscissa::differences;
//!
//! let d = differences(&[1.0, 2.0], &[0.5, 1.0, 1.5]);
//! assert_eq!(d.shape(), (2, 3));
//! assert_eq!(d[(1, 2)], 0.5);
//! ```

pub mod abscissa;
pub mod error;
pub mod kernels;
pub mod math;

// Re-export core types
pub use error::{Error, ErrorCategory, Result};
pub use kernels::{CovarianceFunction, KernelProperties};

pub use nalgebra::DMatrix;

/// Dense covariance matrix produced by `cov`
pub type CovarianceMatrix = DMatrix<f64>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::abscissa::{differences, outer_product};
    pub use crate::error::Error;
    pub use crate::{CovarianceFunction, CovarianceMatrix, KernelProperties, Result};
}
