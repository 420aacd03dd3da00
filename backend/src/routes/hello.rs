use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HelloResponse {
    message: &'static str,
    status: &'static str,
}

const HELLO: HelloResponse = HelloResponse {
    message: "Hola desde Spring Boot",
    status: "ok",
};

pub async fn handle_hello() -> Json<HelloResponse> {
    Json(HELLO)
}
