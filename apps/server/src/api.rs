use std::sync::Arc;

use crate::{
    config::Config,
    error::ApiResult,
    main_lib::AppState,
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use ipotracker_core::ipos::Ipo;

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/api/v1/readyz", responses((status = 200, description = "Ready")))]
pub async fn readyz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/api/v1/ipos", responses((status = 200, description = "All stored IPO records, in storage order")))]
async fn list_ipos(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Ipo>>> {
    let ipos = state.ipo_service.get_ipos()?;
    Ok(Json(ipos))
}

#[derive(serde::Serialize)]
pub struct ReloadResponse {
    message: String,
    info: String,
}

#[utoipa::path(post, path = "/api/v1/ipos/reload", responses((status = 200, description = "Reload outcome with the accepted-row count")))]
async fn reload_ipos(State(state): State<Arc<AppState>>) -> ApiResult<Json<ReloadResponse>> {
    let accepted = state.ipo_service.reload_from_csv(&state.csv_path)?;

    let file_name = state
        .csv_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| state.csv_path.display().to_string());

    Ok(Json(ReloadResponse {
        message: format!(
            "Successfully loaded and added {} IPO records from '{}'.",
            accepted, file_name
        ),
        info: "Please refresh the page.".to_string(),
    }))
}

#[derive(OpenApi)]
#[openapi(
    paths(healthz, readyz, list_ipos, reload_ipos),
    tags((name = "ipotracker"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/ipos", get(list_ipos))
        .route("/ipos/reload", post(reload_ipos));

    Router::new()
        .nest("/api/v1", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
