use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_barang::{Barang, BarangDraft};

use super::error::ApiError;
use crate::domain::a001_barang;

/// GET /api/barang
pub async fn list_all() -> Result<Json<Vec<Barang>>, ApiError> {
    let items = a001_barang::service::list_all().await?;
    Ok(Json(items))
}

/// POST /barang
pub async fn create(
    Json(draft): Json<BarangDraft>,
) -> Result<(StatusCode, Json<Barang>), ApiError> {
    let created = a001_barang::service::create(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
