//! Band path configuration.

use index_common::BandRole;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{BandStoreError, Result};

/// Prefix for per-band environment overrides (`BAND_B04=/data/red.tiff`).
const BAND_ENV_PREFIX: &str = "BAND_";

/// Environment variable overriding the base directory for relative paths.
const DATA_DIR_ENV: &str = "BAND_DATA_DIR";

/// Immutable band code → raster path table.
///
/// Built once at startup and shared read-only by every request. Paths are
/// not checked here; existence is resolved lazily per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandStoreConfig {
    /// Base directory for relative band paths.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Band code (e.g. "B04") to single-band GeoTIFF path.
    #[serde(default = "default_band_paths")]
    pub bands: BTreeMap<String, PathBuf>,

    /// Which band code plays each spectral role.
    #[serde(default = "default_role_codes")]
    pub roles: BTreeMap<BandRole, String>,
}

fn default_band_paths() -> BTreeMap<String, PathBuf> {
    BandRole::ALL
        .iter()
        .map(|role| {
            let code = role.sentinel2_code();
            (
                code.to_string(),
                PathBuf::from(format!("data/sentinel/{}_sentinel-2.tiff", code)),
            )
        })
        .collect()
}

fn default_role_codes() -> BTreeMap<BandRole, String> {
    BandRole::ALL
        .iter()
        .map(|role| (*role, role.sentinel2_code().to_string()))
        .collect()
}

impl Default for BandStoreConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            bands: default_band_paths(),
            roles: default_role_codes(),
        }
    }
}

impl BandStoreConfig {
    /// Build from an explicit path table with Sentinel-2 role bindings.
    pub fn from_paths<I, K, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: Into<PathBuf>,
    {
        Self {
            data_dir: None,
            bands: paths
                .into_iter()
                .map(|(code, path)| (code.into(), path.into()))
                .collect(),
            roles: default_role_codes(),
        }
    }

    /// Load configuration from a YAML string.
    ///
    /// Missing sections fall back to the Sentinel-2 defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BandStoreError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Apply `BAND_DATA_DIR` and `BAND_<CODE>` overrides.
    pub fn apply_env_overrides<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if key == DATA_DIR_ENV {
                self.data_dir = Some(PathBuf::from(value));
                continue;
            }

            if let Some(code) = key.strip_prefix(BAND_ENV_PREFIX) {
                if code.is_empty() {
                    continue;
                }
                tracing::debug!(band = %code, path = %value, "Band path overridden from environment");
                self.bands.insert(code.to_uppercase(), PathBuf::from(value));
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Every role must be bound to a configured code.
    pub fn validate(&self) -> Result<()> {
        if self.bands.is_empty() {
            return Err(BandStoreError::Config("no bands configured".to_string()));
        }

        for role in BandRole::MANDATORY {
            let code = self.code_for(role).ok_or_else(|| {
                BandStoreError::Config(format!("mandatory role {} has no band code", role))
            })?;
            if !self.bands.contains_key(code) {
                return Err(BandStoreError::Config(format!(
                    "mandatory role {} is bound to unconfigured band {}",
                    role, code
                )));
            }
        }

        for (role, code) in &self.roles {
            if !self.bands.contains_key(code) {
                tracing::warn!(role = %role, band = %code, "Optional role bound to unconfigured band");
            }
        }

        Ok(())
    }

    /// Band code bound to a role.
    pub fn code_for(&self, role: BandRole) -> Option<&str> {
        self.roles.get(&role).map(String::as_str)
    }

    /// Full path for a band code, joined onto `data_dir` when relative.
    pub fn path_for(&self, code: &str) -> Option<PathBuf> {
        let path = self.bands.get(code)?;
        match &self.data_dir {
            Some(dir) if path.is_relative() => Some(dir.join(path)),
            _ => Some(path.clone()),
        }
    }
}
