//! TOML configuration for covariance kernels
//!
//! This crate reads a configuration file declaring named kernel sections
//! and builds their sum.
//!
//! # Example
//!
//! ```rust
//! use gpk_config::parse_str;
//! use gpk_kernels::CovarianceFunction;
//!
//! let kernel = parse_str(
//!     r#"
//!     [signal]
//!     kernel = "Matern"
//!     order = 2.5
//!     length = 0.3
//!
//!     [noise]
//!     kernel = "WhiteNoise"
//!     sigma = 0.05
//!     "#,
//!     false,
//! )
//! .unwrap();
//!
//! assert_eq!(kernel.len(), 2);
//! let cov = kernel.cov(&[0.0, 0.1], &[0.0, 0.1]).unwrap();
//! assert!((cov[(0, 0)] - 1.0025).abs() < 1e-12);
//! ```

mod config;
mod parser;

pub use config::{parse_config_str, to_toml_string, KernelConfig, KIND_KEY};
pub use parser::{build_summed, parse, parse_str, read_config};

pub use gpk_core::{Error, ErrorCategory, Result};
