//! Kernel configuration records and their TOML representation
//!
//! A configuration source is a TOML document with one named table per
//! kernel. The `kernel` key holds the type tag; every other key is a
//! parameter whose value is a real number:
//!
//! ```toml
//! [noise]
//! kernel = "WhiteNoise"
//! sigma = 0.1
//!
//! [trend]
//! kernel = "SquaredExponential"
//! sigma = 1.0
//! length = 0.5
//! ```
//!
//! Tables are kept in document order.

use gpk_core::{Error, Result};
use gpk_kernels::{Kernel, KernelKind};
use toml::{Table, Value};

/// Key holding the type tag inside each section
pub const KIND_KEY: &str = "kernel";

/// One declared kernel: section name, type tag and parameter overrides
#[derive(Debug, Clone, PartialEq)]
pub struct KernelConfig {
    /// Section name, unique within a source
    pub name: String,
    pub kind: KernelKind,
    /// Parameters in declaration order; absent ones take kernel defaults
    pub parameters: Vec<(String, f64)>,
}

impl KernelConfig {
    pub fn new(name: impl Into<String>, kind: KernelKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: f64) -> Self {
        self.parameters.push((name.into(), value));
        self
    }

    /// Record describing an existing leaf kernel; `None` for sums
    pub fn from_kernel(name: impl Into<String>, kernel: &Kernel) -> Option<Self> {
        let kind = kernel.kind()?;
        let parameters = kernel
            .parameters()
            .into_iter()
            .map(|(param, value)| (param.to_string(), value))
            .collect();
        Some(Self {
            name: name.into(),
            kind,
            parameters,
        })
    }

    /// Instantiate the declared kernel
    pub fn build(&self) -> Result<Kernel> {
        self.kind
            .build(self.parameters.iter().map(|(k, v)| (k.as_str(), *v)))
            .map_err(|e| in_section(&self.name, e))
    }
}

/// Prefix config errors with the section they came from
pub(crate) fn in_section(section: &str, err: Error) -> Error {
    match err {
        Error::Config(message) => Error::Config(format!("section [{section}]: {message}")),
        other => other,
    }
}

fn parse_real(section: &str, key: &str, value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Float(f) => Some(*f),
        Value::Integer(i) => Some(*i as f64),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).ok_or_else(|| {
        Error::Config(format!(
            "section [{section}]: parameter '{key}' = {value} is not a finite real number"
        ))
    })
}

fn parse_section(name: &str, value: &Value) -> Result<KernelConfig> {
    let section = value.as_table().ok_or_else(|| {
        Error::Config(format!("top-level entry '{name}' is not a kernel section"))
    })?;

    let tag = match section.get(KIND_KEY) {
        Some(Value::String(tag)) => tag,
        Some(other) => {
            return Err(Error::Config(format!(
                "section [{name}]: '{KIND_KEY}' must be a string, found {other}"
            )))
        }
        None => {
            return Err(Error::Config(format!(
                "section [{name}]: missing '{KIND_KEY}' type tag"
            )))
        }
    };
    let kind = tag
        .parse::<KernelKind>()
        .map_err(|e| in_section(name, e))?;

    let mut config = KernelConfig::new(name, kind);
    for (key, value) in section.iter().filter(|(key, _)| key.as_str() != KIND_KEY) {
        config = config.with_parameter(key.as_str(), parse_real(name, key, value)?);
    }
    Ok(config)
}

/// Read the ordered kernel records declared in a TOML source
pub fn parse_config_str(source: &str) -> Result<Vec<KernelConfig>> {
    let document: Table = toml::from_str(source)
        .map_err(|e| Error::Config(format!("invalid kernel configuration: {e}")))?;

    document
        .iter()
        .map(|(name, value)| parse_section(name, value))
        .collect()
}

/// Render kernel records as a TOML document that [`parse_config_str`] reads
/// back to the same records
pub fn to_toml_string(configs: &[KernelConfig]) -> Result<String> {
    let mut document = Table::new();
    for config in configs {
        let mut section = Table::new();
        section.insert(
            KIND_KEY.to_string(),
            Value::String(config.kind.name().to_string()),
        );
        for (key, value) in &config.parameters {
            section.insert(key.clone(), Value::Float(*value));
        }
        if document
            .insert(config.name.clone(), Value::Table(section))
            .is_some()
        {
            return Err(Error::Config(format!(
                "duplicate section name '{}'",
                config.name
            )));
        }
    }
    toml::to_string(&document).map_err(|e| Error::Config(format!("cannot render TOML: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpk_core::ErrorCategory;

    #[test]
    fn test_reads_sections_in_order() {
        let source = r#"
            [zeta]
            kernel = "WhiteNoise"
            sigma = 0.5

            [alpha]
            kernel = "Matern"
            order = 2.5
            length = 3
        "#;
        let configs = parse_config_str(source).unwrap();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].name, "zeta");
        assert_eq!(configs[0].kind, KernelKind::WhiteNoise);
        assert_eq!(configs[0].parameters, vec![("sigma".to_string(), 0.5)]);
        assert_eq!(configs[1].name, "alpha");
        assert_eq!(configs[1].kind, KernelKind::Matern);
        assert_eq!(
            configs[1].parameters,
            vec![("order".to_string(), 2.5), ("length".to_string(), 3.0)]
        );
    }

    #[test]
    fn test_string_values_parse_as_numbers() {
        let source = "[s]\nkernel = \"Polynomial\"\norder = \" 2 \"\nsigma = \"1e-1\"\n";
        let configs = parse_config_str(source).unwrap();
        assert_eq!(
            configs[0].parameters,
            vec![("order".to_string(), 2.0), ("sigma".to_string(), 0.1)]
        );
    }

    #[test]
    fn test_rejects_non_numeric_value() {
        let source = "[s]\nkernel = \"WhiteNoise\"\nsigma = \"large\"\n";
        let err = parse_config_str(source).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(err.to_string().contains("'sigma'"));

        let source = "[s]\nkernel = \"WhiteNoise\"\nsigma = true\n";
        assert!(parse_config_str(source).is_err());
    }

    #[test]
    fn test_rejects_non_finite_value() {
        for value in ["inf", "-inf", "nan", "\"inf\"", "\"NaN\"", "\"infinity\""] {
            let source = format!("[wide]\nkernel = \"SquaredExponential\"\nlength = {value}\n");
            let err = parse_config_str(&source).unwrap_err();
            assert_eq!(err.category(), ErrorCategory::Config, "value {value}");
            assert!(err.to_string().contains("section [wide]"));
            assert!(err.to_string().contains("'length'"));
        }
    }

    #[test]
    fn test_rejects_unknown_tag() {
        let err = parse_config_str("[p]\nkernel = \"Periodic\"\n").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(err.to_string().contains("section [p]"));
        assert!(err.to_string().contains("'Periodic'"));
    }

    #[test]
    fn test_rejects_missing_or_malformed_tag() {
        assert!(parse_config_str("[p]\nsigma = 1.0\n").is_err());
        assert!(parse_config_str("[p]\nkernel = 3\n").is_err());
    }

    #[test]
    fn test_rejects_top_level_values() {
        let err = parse_config_str("sigma = 1.0\n").unwrap_err();
        assert!(err.to_string().contains("'sigma'"));
    }

    #[test]
    fn test_rejects_invalid_toml() {
        let err = parse_config_str("[unterminated\nkernel = ").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Config);
    }

    #[test]
    fn test_build_reports_section() {
        let config = KernelConfig::new("noise", KernelKind::WhiteNoise).with_parameter("length", 1.0);
        let err = config.build().unwrap_err();
        assert!(err.to_string().contains("section [noise]"));
    }

    #[test]
    fn test_from_kernel() {
        let kernel: Kernel = gpk_kernels::Polynomial::new(2.0, 3.0).unwrap().into();
        let config = KernelConfig::from_kernel("poly", &kernel).unwrap();
        assert_eq!(config.kind, KernelKind::Polynomial);
        assert_eq!(config.build().unwrap(), kernel);

        let summed: Kernel = gpk_kernels::SummedKernel::empty().into();
        assert!(KernelConfig::from_kernel("sum", &summed).is_none());
    }

    #[test]
    fn test_to_toml_round_trip() {
        let configs = vec![
            KernelConfig::new("b", KernelKind::SquaredExponential)
                .with_parameter("sigma", 0.1)
                .with_parameter("length", 1.0 / 3.0),
            KernelConfig::new("a", KernelKind::Polynomial),
        ];
        let text = to_toml_string(&configs).unwrap();
        assert_eq!(parse_config_str(&text).unwrap(), configs);
    }

    #[test]
    fn test_to_toml_rejects_duplicate_names() {
        let configs = vec![
            KernelConfig::new("k", KernelKind::WhiteNoise),
            KernelConfig::new("k", KernelKind::Matern),
        ];
        assert!(to_toml_string(&configs).is_err());
    }
}
