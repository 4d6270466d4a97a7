//! Index calculation handler.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use index_common::{BoundingBox, IndexError};
use index_processor::ResponseBundle;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::error::ApiError;
use crate::state::AppState;

/// Request body: `{ "bbox": [west, south, east, north] }`.
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub bbox: Vec<f64>,
}

/// Min/max of the index; both null when no pixel is valid.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StatsBody {
    pub min: Option<f32>,
    pub max: Option<f32>,
}

/// Success body with base64-encoded PNGs.
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub image: String,
    pub colorbar: String,
    /// `[south, west, north, east]`
    pub bounds: [f64; 4],
    pub stats: StatsBody,
    pub index_name: String,
}

impl From<ResponseBundle> for CalculateResponse {
    fn from(bundle: ResponseBundle) -> Self {
        Self {
            image: STANDARD.encode(&bundle.image),
            colorbar: STANDARD.encode(&bundle.colorbar),
            bounds: bundle.bounds,
            stats: StatsBody {
                min: bundle.stats.map(|s| s.min),
                max: bundle.stats.map(|s| s.max),
            },
            index_name: bundle.index_name,
        }
    }
}

/// POST /calculate/:index_name
pub async fn calculate_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(index_name): Path<String>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|e| ApiError::from(IndexError::InvalidBbox(e.body_text())))?;
    let bbox = BoundingBox::from_slice(&request.bbox)?;

    info!(index = %index_name, bbox = %bbox, "Calculating index");

    // Raster reads and rendering are blocking
    let bundle = tokio::task::spawn_blocking(move || state.service.compute(&index_name, &bbox))
        .await
        .map_err(|e| {
            error!(error = %e, "Index computation task failed");
            ApiError::internal(format!("computation task failed: {}", e))
        })??;

    Ok(Json(bundle.into()))
}
