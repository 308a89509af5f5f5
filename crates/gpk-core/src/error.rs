//! Error types for covariance kernels
//!
//! Provides a unified error type for all gp-kernels crates.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for kernel construction, evaluation and parsing
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed abscissas passed to `cov`
    #[error("Shape error: {0}")]
    Shape(String),

    /// Kernel parameter outside its valid domain
    #[error("Domain error: {parameter} = {value} {reason}")]
    Domain {
        parameter: String,
        value: f64,
        reason: String,
    },

    /// Configuration source could not be interpreted
    #[error("Config error: {0}")]
    Config(String),

    /// Configuration source could not be read
    #[error("Config error: cannot read {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Shape,
    Domain,
    Config,
}

impl Error {
    /// Which of the three error classes this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Shape(_) => ErrorCategory::Shape,
            Self::Domain { .. } => ErrorCategory::Domain,
            Self::Config(_) | Self::ConfigIo { .. } => ErrorCategory::Config,
        }
    }

    /// Create an error for NaN/Inf abscissas
    pub fn non_finite(label: &str, index: usize, value: f64) -> Self {
        Self::Shape(format!(
            "{label}[{index}] = {value} is not a finite real number"
        ))
    }

    /// Create an error for a parameter outside its domain
    pub fn invalid_parameter(parameter: &str, value: f64, reason: &str) -> Self {
        Self::Domain {
            parameter: parameter.to_string(),
            value,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an unrecognised kernel type tag
    pub fn unknown_kernel(tag: &str) -> Self {
        Self::Config(format!(
            "unknown kernel type '{tag}' (expected one of WhiteNoise, SquaredExponential, Matern, Polynomial)"
        ))
    }
}
