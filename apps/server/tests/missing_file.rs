use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use ipotracker_server::{api::app_router, build_state, config::Config};
use tempfile::tempdir;
use tower::ServiceExt;

#[tokio::test]
async fn reload_with_missing_csv_fails_as_operational_error() {
    let tmp = tempdir().unwrap();
    std::env::set_var("IPOT_DB_PATH", tmp.path().join("test.db"));
    std::env::set_var("IPOT_CSV_PATH", tmp.path().join("not-there.csv"));

    let config = Config::from_env();
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/ipos/reload")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], 500);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Failed to read CSV file"));
}
