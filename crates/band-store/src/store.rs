//! Band code resolution against the configured path table.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use index_common::BandRole;
use tracing::debug;

use crate::config::BandStoreConfig;
use crate::error::{BandStoreError, Result};

/// A configured, existing single-band raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandSource {
    pub code: String,
    pub path: PathBuf,
}

/// Read-only lookup from band codes and roles to raster sources.
///
/// Cloning is cheap; the configuration is shared.
#[derive(Debug, Clone)]
pub struct BandStore {
    config: Arc<BandStoreConfig>,
}

impl BandStore {
    pub fn new(config: BandStoreConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &BandStoreConfig {
        &self.config
    }

    /// Source for a band code if it is configured and its file exists.
    pub fn resolve(&self, code: &str) -> Option<BandSource> {
        let path = self.config.path_for(code)?;
        if !path.is_file() {
            return None;
        }
        Some(BandSource {
            code: code.to_string(),
            path,
        })
    }

    /// Source for the band bound to `role`, if available.
    pub fn resolve_role(&self, role: BandRole) -> Option<BandSource> {
        let code = self.config.code_for(role)?;
        let source = self.resolve(code);
        if source.is_none() {
            debug!(
                role = %role,
                band = %code,
                path = ?self.config.path_for(code),
                "Band not found"
            );
        }
        source
    }

    /// Source for a role that the computation cannot do without.
    ///
    /// A role with no configured code is [`BandStoreError::NotConfigured`];
    /// a configured code whose file is gone is [`BandStoreError::MissingFile`].
    pub fn require_role(&self, role: BandRole) -> Result<BandSource> {
        let code = self
            .config
            .code_for(role)
            .ok_or_else(|| BandStoreError::NotConfigured(role.to_string()))?;
        let path = self
            .config
            .path_for(code)
            .ok_or_else(|| BandStoreError::NotConfigured(code.to_string()))?;

        if !path.is_file() {
            return Err(BandStoreError::MissingFile {
                code: code.to_string(),
                path: path.display().to_string(),
            });
        }

        Ok(BandSource {
            code: code.to_string(),
            path,
        })
    }

    /// Availability of every configured band code.
    pub fn availability(&self) -> BTreeMap<String, bool> {
        self.config
            .bands
            .keys()
            .map(|code| (code.clone(), self.resolve(code).is_some()))
            .collect()
    }
}
