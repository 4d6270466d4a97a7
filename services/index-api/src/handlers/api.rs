//! Discovery endpoints: supported indices and band availability.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::Extension, Json};
use index_common::BandRole;
use index_engine::SpectralIndex;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct IndexInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Every role the index reads, mandatory first.
    pub bands: Vec<BandRole>,
    /// Roles the index uses when present, with a fallback otherwise.
    pub optional_bands: Vec<BandRole>,
}

/// GET /api/indices
pub async fn indices_handler() -> Json<Vec<IndexInfo>> {
    Json(
        SpectralIndex::ALL
            .iter()
            .map(|index| IndexInfo {
                name: index.name(),
                description: index.description(),
                bands: index.roles(),
                optional_bands: index.optional_roles().to_vec(),
            })
            .collect(),
    )
}

#[derive(Debug, Serialize)]
pub struct BandStatus {
    pub code: String,
    pub available: bool,
}

/// GET /api/bands - band availability per role
pub async fn bands_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<BTreeMap<BandRole, BandStatus>> {
    let store = state.store();
    let availability = store.availability();

    let bands = BandRole::ALL
        .iter()
        .filter_map(|role| {
            let code = store.config().code_for(*role)?;
            let available = availability.get(code).copied().unwrap_or(false);
            Some((
                *role,
                BandStatus {
                    code: code.to_string(),
                    available,
                },
            ))
        })
        .collect();

    Json(bands)
}
