//! Kernel type tags and construction from parameter maps
//!
//! This module maps the sealed set of type tags onto constructors, filling
//! any parameter that is not supplied with the kernel's default.

use crate::{Kernel, Matern, Polynomial, SquaredExponential, WhiteNoise};
use gpk_core::{Error, Result};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Type tag of a leaf kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelKind {
    WhiteNoise,
    SquaredExponential,
    Matern,
    Polynomial,
}

impl KernelKind {
    pub const ALL: [KernelKind; 4] = [
        Self::WhiteNoise,
        Self::SquaredExponential,
        Self::Matern,
        Self::Polynomial,
    ];

    /// Tag used in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            Self::WhiteNoise => "WhiteNoise",
            Self::SquaredExponential => "SquaredExponential",
            Self::Matern => "Matern",
            Self::Polynomial => "Polynomial",
        }
    }

    /// Accepted parameter names and their defaults, in declaration order
    pub fn parameters(&self) -> &'static [(&'static str, f64)] {
        match self {
            Self::WhiteNoise => &[("sigma", WhiteNoise::DEFAULT_SIGMA)],
            Self::SquaredExponential => &[
                ("sigma", SquaredExponential::DEFAULT_SIGMA),
                ("length", SquaredExponential::DEFAULT_LENGTH),
            ],
            Self::Matern => &[
                ("sigma", Matern::DEFAULT_SIGMA),
                ("length", Matern::DEFAULT_LENGTH),
                ("order", Matern::DEFAULT_ORDER),
            ],
            Self::Polynomial => &[
                ("sigma", Polynomial::DEFAULT_SIGMA),
                ("order", Polynomial::DEFAULT_ORDER),
            ],
        }
    }

    /// Construct a kernel of this kind.
    ///
    /// Parameters absent from `params` take their defaults. A name this kind
    /// does not accept is a config error; an out-of-domain value is a domain
    /// error.
    pub fn build<'a, I>(&self, params: I) -> Result<Kernel>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let table = self.parameters();
        let mut values: Vec<f64> = table.iter().map(|&(_, default)| default).collect();

        for (name, value) in params {
            match table.iter().position(|&(accepted, _)| accepted == name) {
                Some(index) => values[index] = value,
                None => {
                    let accepted: Vec<_> = table.iter().map(|&(n, _)| n).collect();
                    return Err(Error::Config(format!(
                        "{} does not accept parameter '{name}' (accepted: {})",
                        self.name(),
                        accepted.join(", ")
                    )));
                }
            }
        }

        let kernel: Kernel = match self {
            Self::WhiteNoise => WhiteNoise::new(values[0])?.into(),
            Self::SquaredExponential => SquaredExponential::new(values[0], values[1])?.into(),
            Self::Matern => Matern::new(values[0], values[1], values[2])?.into(),
            Self::Polynomial => Polynomial::new(values[0], values[1])?.into(),
        };
        debug!(kernel = %kernel, "constructed kernel");
        Ok(kernel)
    }

    /// Default-parameter kernel of this kind
    pub fn default_kernel(&self) -> Kernel {
        match self {
            Self::WhiteNoise => WhiteNoise::default().into(),
            Self::SquaredExponential => SquaredExponential::default().into(),
            Self::Matern => Matern::default().into(),
            Self::Polynomial => Polynomial::default().into(),
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelKind {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == tag)
            .ok_or_else(|| Error::unknown_kernel(tag))
    }
}
