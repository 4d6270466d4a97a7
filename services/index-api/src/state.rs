//! Application state for the index API.

use band_store::{BandStore, BandStoreConfig};
use index_processor::IndexService;

/// Shared application state.
///
/// Read-only after startup; handlers receive it behind an `Arc`.
pub struct AppState {
    /// Index pipeline over the configured bands.
    pub service: IndexService,
}

impl AppState {
    pub fn new(config: BandStoreConfig) -> Self {
        Self {
            service: IndexService::new(BandStore::new(config)),
        }
    }

    pub fn store(&self) -> &BandStore {
        self.service.store()
    }
}
