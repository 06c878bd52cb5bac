use contracts::domain::a001_barang::{Barang, BarangDraft};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_url;

/// GET /api/barang
pub async fn fetch_barang() -> Result<Vec<Barang>, String> {
    let response = Request::get(&api_url("/api/barang"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response
        .json::<Vec<Barang>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST /barang, returns the stored item with its id
pub async fn create_barang(draft: &BarangDraft) -> Result<Barang, String> {
    let response = Request::post(&api_url("/barang"))
        .header("Accept", "application/json")
        .json(draft)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response
        .json::<Barang>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// "HTTP <status>" plus the server's `error` field when there is one
async fn failure_message(response: Response) -> String {
    let status = response.status();
    let detail = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_string));
    match detail {
        Some(detail) => format!("HTTP {}: {}", status, detail),
        None => format!("HTTP {}", status),
    }
}
