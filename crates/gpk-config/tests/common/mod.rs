//! Common test utilities for gpk-config tests

use std::io::Write;
use tempfile::NamedTempFile;

/// Write `contents` to a fresh temporary file
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub const MIXED_CONFIG: &str = r#"
[smooth]
kernel = "SquaredExponential"
sigma = 2.0
length = 0.25

[rough]
kernel = "Matern"
order = 0.5

[noise]
kernel = "WhiteNoise"
sigma = "0.1"
"#;
