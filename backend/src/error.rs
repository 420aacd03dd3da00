/// Startup failures. Request handling itself has no error paths; anything that
/// goes wrong mid-request is answered by axum/hyper defaults.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("APP_PORT must be a valid u16, got {0:?}")]
    InvalidPort(String),
    #[error("invalid listen address {0:?}")]
    InvalidAddr(String),
    #[error("invalid CORS allowed origin {0:?}")]
    InvalidCorsOrigin(String),
    #[error("io error")]
    Io(#[from] std::io::Error),
}
