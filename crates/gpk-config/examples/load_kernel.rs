//! Load a kernel configuration and print its covariance on a small grid.
//!
//! ```text
//! RUST_LOG=gpk_config=debug cargo run -p gpk-config --example load_kernel -- data/kernels.toml
//! ```

use gpk_kernels::{CovarianceFunction, Kernel};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/data/kernels.toml").to_string());

    let kernel = gpk_config::parse(&path, true)?;
    println!("{}", Kernel::from(kernel.clone()));

    let grid: Vec<f64> = (0..5).map(|i| i as f64 * 0.25).collect();
    let cov = kernel.cov(&grid, &grid)?;
    println!("{cov:.4}");

    Ok(())
}
