use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    status: &'static str,
    app: &'static str,
}

const HEALTH: HealthResponse = HealthResponse {
    status: "ok",
    app: "backend",
};

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HEALTH)
}
