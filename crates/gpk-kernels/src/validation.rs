//! Construction-time parameter checks

use gpk_core::{Error, Result};

/// `value` must be finite and `>= 0`
pub(crate) fn check_non_negative(parameter: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid_parameter(parameter, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(Error::invalid_parameter(parameter, value, "must be non-negative"));
    }
    Ok(value)
}

/// `value` must be finite and `> 0`
pub(crate) fn check_positive(parameter: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid_parameter(parameter, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(Error::invalid_parameter(parameter, value, "must be positive"));
    }
    Ok(value)
}
