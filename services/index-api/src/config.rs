//! Band configuration loading for the service.

use std::path::Path;

use anyhow::{Context, Result};
use band_store::BandStoreConfig;
use tracing::{info, warn};

/// Load the band table.
///
/// Starts from the YAML file when given, otherwise the built-in Sentinel-2
/// layout, then applies `BAND_*` environment overrides and validates.
pub fn load_band_config(path: Option<&Path>) -> Result<BandStoreConfig> {
    let mut config = match path {
        Some(path) => BandStoreConfig::from_file(path)
            .with_context(|| format!("Failed to load band config {}", path.display()))?,
        None => BandStoreConfig::default(),
    };

    config.apply_env_overrides(std::env::vars());
    config.validate().context("Invalid band configuration")?;

    for (code, band_path) in &config.bands {
        let resolved = config.path_for(code).unwrap_or_else(|| band_path.clone());
        if resolved.is_file() {
            info!(band = %code, path = %resolved.display(), "Band configured");
        } else {
            warn!(band = %code, path = %resolved.display(), "Band file not found");
        }
    }

    Ok(config)
}
