use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use vs_core::{Request, Response};

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn skill_routes() -> Router<AppState> {
    Router::new().route("/", post(invoke))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

async fn invoke(State(state): State<AppState>, body: Bytes) -> Result<Json<Response>, ApiError> {
    let request = Request::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "rejected request body");
        ApiError::from(err)
    })?;

    let application_id = request.application_id();
    if !state.config.accepts(application_id) {
        tracing::warn!(
            request_id = %request.request.request_id,
            application_id = application_id.unwrap_or(""),
            "request targets a different skill"
        );
        return Err(ApiError::application_mismatch(format!(
            "Unexpected application id: {}",
            application_id.unwrap_or("<none>")
        )));
    }

    let mut rng = state.random_source();
    Ok(Json(vs_handler::handle(&request, &mut rng)))
}
