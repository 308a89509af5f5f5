//! Summed-kernel construction from configuration sources

use crate::config::{parse_config_str, KernelConfig};
use gpk_core::{Error, Result};
use gpk_kernels::SummedKernel;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Read the kernel records declared in a configuration file
pub fn read_config(path: impl AsRef<Path>) -> Result<Vec<KernelConfig>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_str(&source)
}

/// Sum the kernels declared by `configs`, in order
pub fn build_summed(configs: &[KernelConfig]) -> Result<SummedKernel> {
    if configs.is_empty() {
        return Err(Error::Config("no kernel sections declared".to_string()));
    }
    configs.iter().map(KernelConfig::build).collect()
}

/// Load the kernel sum declared in the configuration file at `path`.
///
/// With `verbose` set, the source and each declared kernel are reported at
/// info level; otherwise the same events go to debug.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn parse(path: impl AsRef<Path>, verbose: bool) -> Result<SummedKernel> {
    if verbose {
        info!("loading kernel configuration");
    } else {
        debug!("loading kernel configuration");
    }
    let configs = read_config(path)?;
    report(&configs, verbose);
    build_summed(&configs)
}

/// Load the kernel sum declared in an in-memory TOML source
#[instrument(skip_all)]
pub fn parse_str(source: &str, verbose: bool) -> Result<SummedKernel> {
    let configs = parse_config_str(source)?;
    report(&configs, verbose);
    build_summed(&configs)
}

fn report(configs: &[KernelConfig], verbose: bool) {
    for config in configs {
        if verbose {
            info!(section = %config.name, kind = %config.kind, "adding kernel");
        } else {
            debug!(section = %config.name, kind = %config.kind, "adding kernel");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpk_core::ErrorCategory;
    use gpk_kernels::{Kernel, SquaredExponential, WhiteNoise};

    #[test]
    fn test_parse_str_builds_sum_in_order() {
        let source = r#"
            [noise]
            kernel = "WhiteNoise"
            sigma = 0.1

            [signal]
            kernel = "SquaredExponential"
            length = 0.5
        "#;
        let summed = parse_str(source, false).unwrap();
        let expected = WhiteNoise::new(0.1).unwrap() + SquaredExponential::new(1.0, 0.5).unwrap();
        assert_eq!(summed, expected);
    }

    #[test]
    fn test_single_section_is_one_term_sum() {
        let summed = parse_str("[only]\nkernel = \"Matern\"\n", true).unwrap();
        assert_eq!(summed.len(), 1);
        assert_eq!(summed.kernels()[0], Kernel::from(gpk_kernels::Matern::default()));
    }

    #[test]
    fn test_empty_source_is_config_error() {
        let err = parse_str("", false).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(build_summed(&[]).is_err());
    }

    #[test]
    fn test_out_of_domain_parameter() {
        let err = parse_str("[k]\nkernel = \"SquaredExponential\"\nlength = 0\n", false)
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Domain);
    }

    #[test]
    fn test_missing_file() {
        let err = parse("/nonexistent/kernels.toml", false).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(matches!(err, Error::ConfigIo { .. }));
    }
}
