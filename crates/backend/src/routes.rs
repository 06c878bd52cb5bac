use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::system::middleware::request_logger::request_logger;

/// All application routes
pub fn configure_routes(static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Barang
        .route("/api/barang", get(handlers::a001_barang::list_all))
        .route("/barang", post(handlers::a001_barang::create))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::install_test_connection;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use contracts::domain::a001_barang::Barang;
    use contracts::enums::kategori::Kategori;
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // One test owns the global connection, so the whole flow runs in order
    #[tokio::test]
    async fn test_barang_endpoints() {
        install_test_connection().await;
        let app = configure_routes("dist");

        let response = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.clone().oneshot(get("/api/barang")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!([]));

        let response = app
            .clone()
            .oneshot(post_json(
                "/barang",
                r#"{"nama_barang":"Beras","kategori":"dapur_umum","stok_awal":"25","satuan":"kg"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Barang = serde_json::from_value(json_body(response).await).unwrap();
        assert_eq!(created.nama_barang, "Beras");
        assert_eq!(created.kategori, Kategori::DapurUmum);
        assert_eq!(created.stok_awal, 25);

        let response = app
            .clone()
            .oneshot(post_json(
                "/barang",
                r#"{"nama_barang":"Sabun","kategori":"barang_habis_pakai","stok_awal":"3"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["error"], "field `satuan` is required");

        let response = app.clone().oneshot(get("/api/barang")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed: Vec<Barang> = serde_json::from_value(json_body(response).await).unwrap();
        assert_eq!(listed, vec![created]);
    }
}
