pub mod health;
pub mod hello;

use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;

/// Route table. Anything not listed here falls through to axum's own
/// 404/405 responses.
pub fn build_router(config: &Config) -> Router {
    let router = Router::new()
        .route("/api/health", get(health::handle_health))
        .route("/api/hello", get(hello::handle_hello));

    let router = if config.cors_allowed_origins.is_empty() {
        router
    } else {
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::list(config.cors_allowed_origins.clone()))
            .allow_methods([Method::GET]);
        router.layer(cors)
    };

    router.layer(TraceLayer::new_for_http())
}
