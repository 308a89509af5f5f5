//! The closed set of kernel variants and additive composition

use crate::kind::KernelKind;
use crate::{Matern, Polynomial, SquaredExponential, SummedKernel, WhiteNoise};
use gpk_core::{CovarianceFunction, DMatrix, KernelProperties, Result};
use std::fmt;
use std::ops::Add;

/// Any covariance kernel
#[derive(Debug, Clone, PartialEq)]
pub enum Kernel {
    WhiteNoise(WhiteNoise),
    SquaredExponential(SquaredExponential),
    Matern(Matern),
    Polynomial(Polynomial),
    Summed(SummedKernel),
}

impl Kernel {
    /// Type tag of a leaf kernel; `None` for sums
    pub fn kind(&self) -> Option<KernelKind> {
        match self {
            Self::WhiteNoise(_) => Some(KernelKind::WhiteNoise),
            Self::SquaredExponential(_) => Some(KernelKind::SquaredExponential),
            Self::Matern(_) => Some(KernelKind::Matern),
            Self::Polynomial(_) => Some(KernelKind::Polynomial),
            Self::Summed(_) => None,
        }
    }

    /// Bound parameters of a leaf kernel in declaration order; empty for sums
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        match self {
            Self::WhiteNoise(k) => vec![("sigma", k.sigma())],
            Self::SquaredExponential(k) => vec![("sigma", k.sigma()), ("length", k.length())],
            Self::Matern(k) => vec![
                ("sigma", k.sigma()),
                ("length", k.length()),
                ("order", k.order()),
            ],
            Self::Polynomial(k) => vec![("sigma", k.sigma()), ("order", k.order())],
            Self::Summed(_) => Vec::new(),
        }
    }
}

impl CovarianceFunction for Kernel {
    fn cov(&self, x: &[f64], y: &[f64]) -> Result<DMatrix<f64>> {
        match self {
            Self::WhiteNoise(k) => k.cov(x, y),
            Self::SquaredExponential(k) => k.cov(x, y),
            Self::Matern(k) => k.cov(x, y),
            Self::Polynomial(k) => k.cov(x, y),
            Self::Summed(k) => k.cov(x, y),
        }
    }
}

impl KernelProperties for Kernel {
    fn name(&self) -> &'static str {
        match self {
            Self::WhiteNoise(k) => k.name(),
            Self::SquaredExponential(k) => k.name(),
            Self::Matern(k) => k.name(),
            Self::Polynomial(k) => k.name(),
            Self::Summed(k) => k.name(),
        }
    }

    fn is_stationary(&self) -> bool {
        match self {
            Self::WhiteNoise(k) => k.is_stationary(),
            Self::SquaredExponential(k) => k.is_stationary(),
            Self::Matern(k) => k.is_stationary(),
            Self::Polynomial(k) => k.is_stationary(),
            Self::Summed(k) => k.is_stationary(),
        }
    }

    fn variance(&self) -> f64 {
        match self {
            Self::WhiteNoise(k) => k.variance(),
            Self::SquaredExponential(k) => k.variance(),
            Self::Matern(k) => k.variance(),
            Self::Polynomial(k) => k.variance(),
            Self::Summed(k) => k.variance(),
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summed(summed) => {
                if summed.is_empty() {
                    return write!(f, "0");
                }
                for (i, kernel) in summed.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{kernel}")?;
                }
                Ok(())
            }
            leaf => {
                write!(f, "{}(", leaf.name())?;
                for (i, (name, value)) in leaf.parameters().into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}={value}")?;
                }
                write!(f, ")")
            }
        }
    }
}

macro_rules! impl_into_kernel {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Kernel {
                fn from(kernel: $ty) -> Self {
                    Kernel::$variant(kernel)
                }
            }
        )*
    };
}

impl_into_kernel!(
    WhiteNoise => WhiteNoise,
    SquaredExponential => SquaredExponential,
    Matern => Matern,
    Polynomial => Polynomial,
    Summed => SummedKernel,
);

/// Add two kernels.
///
/// The result lists the terms of `a` followed by the terms of `b`, where a
/// sum contributes its children rather than itself. Composition is therefore
/// associative: `(a + b) + c` and `a + (b + c)` both hold `[a, b, c]` and
/// evaluate to bit-identical covariances.
pub fn combine(a: impl Into<Kernel>, b: impl Into<Kernel>) -> SummedKernel {
    let mut summed = SummedKernel::empty();
    summed.push(a);
    summed.push(b);
    summed
}

macro_rules! impl_add {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<R: Into<Kernel>> Add<R> for $ty {
                type Output = SummedKernel;

                fn add(self, rhs: R) -> SummedKernel {
                    combine(self, rhs)
                }
            }
        )*
    };
}

impl_add!(Kernel, SummedKernel, WhiteNoise, SquaredExponential, Matern, Polynomial);
